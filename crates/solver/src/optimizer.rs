use cosmwasm_std::{Uint128, Uint256};
use fillroute_types::{Fill, FillPath, Side};
use tracing::{debug, warn};

/// Search objective. The comparator direction and the interpolation rounding
/// are the only side-dependent behaviors in the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    /// Fixed input, more output is better (market sell)
    MaximizeOutput,
    /// Fixed amount acquired, less paid is better (market buy)
    MinimizeOutput,
}

impl Objective {
    pub fn from_side(side: Side) -> Self {
        match side {
            Side::Sell => Objective::MaximizeOutput,
            Side::Buy => Objective::MinimizeOutput,
        }
    }

    fn improves(&self, candidate: Uint128, incumbent: Option<Uint128>) -> bool {
        match incumbent {
            // First feasible path always wins; ties thereafter keep the
            // earlier discovery.
            None => true,
            Some(best) => match self {
                Objective::MaximizeOutput => candidate > best,
                Objective::MinimizeOutput => candidate < best,
            },
        }
    }

    /// Output attributed to consuming `consumed` out of a fill, assuming
    /// constant marginal price within the bucket. Sells round down so
    /// proceeds are never overstated; buys round up so cost is never
    /// understated.
    pub fn interpolate(&self, fill: &Fill, consumed: Uint128) -> Uint128 {
        if consumed >= fill.input {
            return fill.output;
        }
        if fill.input.is_zero() {
            return Uint128::zero();
        }
        let floor = fill.output.multiply_ratio(consumed, fill.input);
        match self {
            Objective::MaximizeOutput => floor,
            Objective::MinimizeOutput => {
                let exact =
                    fill.output.full_mul(consumed) % Uint256::from(fill.input) == Uint256::zero();
                if exact {
                    floor
                } else {
                    floor + Uint128::one()
                }
            }
        }
    }
}

/// Bounded depth-first branch and bound over the fill arena.
///
/// Returns the best path covering `target` found within `run_limit` search
/// steps, or `None` when no candidate combination covers the target. An
/// `upper_bound` path, when supplied, seeds the incumbent and is returned
/// unchanged if nothing beats it. Exceeding the step budget aborts the whole
/// search and returns the incumbent as-is, bounding worst-case latency at
/// the price of potential sub-optimality.
pub fn optimize(
    fills: &[Fill],
    target: Uint128,
    objective: Objective,
    upper_bound: Option<FillPath>,
    run_limit: u32,
) -> Option<FillPath> {
    let mut search = Search {
        fills,
        target,
        objective,
        run_limit,
        steps: 0,
        best: upper_bound.map(|path| {
            let output = path.total_output();
            (path, output)
        }),
    };

    let candidates: Vec<usize> = (0..fills.len()).collect();
    search.explore(&PathState::default(), &candidates);
    debug!(
        "fill path search used {}/{} steps",
        search.steps, search.run_limit
    );
    search.best.map(|(path, _)| path)
}

/// Transient state of one branch: the fills taken so far (arena index,
/// consumed input, produced output) and the running totals and bitmasks.
#[derive(Clone, Debug, Default)]
struct PathState {
    taken: Vec<(usize, Uint128, Uint128)>,
    input: Uint128,
    output: Uint128,
    flags: u64,
    exclusions: u64,
}

struct Search<'a> {
    fills: &'a [Fill],
    target: Uint128,
    objective: Objective,
    run_limit: u32,
    steps: u32,
    best: Option<(FillPath, Uint128)>,
}

impl Search<'_> {
    /// Returns false when the step budget fired; callers unwind without
    /// exploring anything further.
    fn explore(&mut self, state: &PathState, candidates: &[usize]) -> bool {
        if state.input >= self.target {
            let incumbent = self.best.as_ref().map(|(_, output)| *output);
            if self.objective.improves(state.output, incumbent) {
                self.best = Some((self.collect(state), state.output));
            }
            return true;
        }

        let last = state.taken.last().map(|taken| taken.0);
        for &index in candidates {
            let fill = &self.fills[index];

            // A marginal bucket can only extend the bucket it was sampled
            // against, and only immediately.
            if let Some(parent) = fill.parent {
                if last != Some(parent) {
                    continue;
                }
            }
            if state.flags & fill.exclusion_mask != 0 || fill.flags & state.exclusions != 0 {
                continue;
            }

            if self.steps >= self.run_limit {
                warn!(
                    "fill path search aborted after {} steps, keeping incumbent",
                    self.steps
                );
                return false;
            }
            self.steps += 1;

            let remaining = self.target - state.input;
            let consumed = remaining.min(fill.input);
            let produced = self.objective.interpolate(fill, consumed);

            let mut next = state.clone();
            next.taken.push((index, consumed, produced));
            next.input += consumed;
            next.output += produced;
            next.flags |= fill.flags;
            next.exclusions |= fill.exclusion_mask;

            let next_candidates: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&c| c != index && self.fills[c].flags & next.exclusions == 0)
                .collect();

            if !self.explore(&next, &next_candidates) {
                return false;
            }
        }
        true
    }

    /// Clip the taken fills to their consumed portions and freeze the path.
    fn collect(&self, state: &PathState) -> FillPath {
        let fills = state
            .taken
            .iter()
            .map(|&(index, consumed, produced)| {
                let mut fill = self.fills[index].clone();
                fill.input = consumed;
                fill.output = produced;
                fill
            })
            .collect();
        FillPath::new(fills)
    }
}
