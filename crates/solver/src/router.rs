use std::sync::Arc;

use cosmwasm_std::Uint128;
use fillroute_sampler::{sample_amounts, QuoteSampler};
use fillroute_types::{Fill, FillPath, NativeOrder, Order, OrderDomain, Side};
use tracing::debug;

use crate::graph::build_fills;
use crate::optimizer::{optimize, Objective};
use crate::path::{materialize, simplify};
use crate::{RouteError, RouterOptions};

/// Aggregates order-book and venue liquidity into executable orders.
///
/// One call performs one quoting round-trip, then runs entirely on the
/// returned snapshot: no state survives between calls.
pub struct Router {
    sampler: Arc<dyn QuoteSampler>,
    domain: OrderDomain,
}

impl Router {
    pub fn new(sampler: Arc<dyn QuoteSampler>, domain: OrderDomain) -> Self {
        Self { sampler, domain }
    }

    /// Sell exactly `taker_amount`, maximizing what comes back.
    pub async fn improve_market_sell(
        &self,
        orders: &[NativeOrder],
        taker_amount: Uint128,
        options: &RouterOptions,
    ) -> Result<Vec<Order>, RouteError> {
        self.improve(orders, taker_amount, Side::Sell, options).await
    }

    /// Buy exactly `maker_amount`, minimizing what is paid.
    pub async fn improve_market_buy(
        &self,
        orders: &[NativeOrder],
        maker_amount: Uint128,
        options: &RouterOptions,
    ) -> Result<Vec<Order>, RouteError> {
        self.improve(orders, maker_amount, Side::Buy, options).await
    }

    async fn improve(
        &self,
        orders: &[NativeOrder],
        target: Uint128,
        side: Side,
        options: &RouterOptions,
    ) -> Result<Vec<Order>, RouteError> {
        if orders.is_empty() {
            return Err(RouteError::NoOrders);
        }
        options.validate()?;

        let venues = options.active_venues();
        let thresholds = sample_amounts(target, options.num_samples);
        let sampled = match side {
            Side::Sell => {
                self.sampler
                    .sample_sell(orders, &thresholds, &venues)
                    .await?
            }
            Side::Buy => self.sampler.sample_buy(orders, &thresholds, &venues).await?,
        };
        sampled.validate(orders.len(), venues.len(), options.num_samples)?;

        let fills = build_fills(
            orders,
            &sampled.fillable_amounts,
            &sampled.source_samples,
            side,
            target,
            options.dust_fraction,
            options.no_conflicts,
        );

        let objective = Objective::from_side(side);
        let upper_bound = native_upper_bound(&fills, target, objective);
        let path = optimize(&fills, target, objective, upper_bound, options.run_limit)
            .ok_or_else(|| RouteError::NoFeasiblePath {
                target,
                available: fills.iter().map(|fill| fill.input).sum(),
            })?;

        debug!(
            "optimized fill path: {} fills, input {}, output {}",
            path.len(),
            path.total_input(),
            path.total_output()
        );

        Ok(materialize(
            simplify(path),
            side,
            options.slippage_buffer,
            &self.domain,
        ))
    }
}

/// Greedy book-only path used as the initial incumbent, when the book alone
/// covers the target. Seeding the search with it guarantees the result is
/// never worse than the best fill available from native orders alone.
fn native_upper_bound(fills: &[Fill], target: Uint128, objective: Objective) -> Option<FillPath> {
    let mut taken = Vec::new();
    let mut input = Uint128::zero();
    for fill in fills.iter().filter(|fill| fill.source.is_native()) {
        if input >= target {
            break;
        }
        let consumed = (target - input).min(fill.input);
        let mut clipped = fill.clone();
        clipped.output = objective.interpolate(fill, consumed);
        clipped.input = consumed;
        taken.push(clipped);
        input += consumed;
    }
    (input >= target).then(|| FillPath::new(taken))
}
