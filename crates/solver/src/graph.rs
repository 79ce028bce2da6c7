use cosmwasm_std::Uint128;
use fillroute_types::{Fill, NativeOrder, Side, SourceSamples};
use rust_decimal::prelude::*;
use tracing::debug;

use crate::Objective;

/// Assembles the flat fill arena the optimizer searches over.
///
/// Native orders become root fills scaled to their fillable amounts; each
/// venue's cumulative samples become a chain of marginal fills linked through
/// `parent`. The arena is sorted by effective-price desirability for the
/// requested side before indices are assigned, so the greedy-first branch of
/// the search is the likely optimum.
pub fn build_fills(
    orders: &[NativeOrder],
    fillable: &[Uint128],
    sources: &[SourceSamples],
    side: Side,
    target: Uint128,
    dust_fraction: Decimal,
    no_conflicts: bool,
) -> Vec<Fill> {
    let objective = Objective::from_side(side);
    let dust_threshold = dust_threshold(target, dust_fraction);

    let mut fills = Vec::new();
    let mut dust_dropped = 0usize;

    for (order, &available) in orders.iter().zip(fillable) {
        let (full_input, full_output) = match side {
            Side::Sell => (order.taker_amount, order.maker_amount),
            Side::Buy => (order.maker_amount, order.taker_amount),
        };
        let available = available.min(full_input);
        if available.is_zero() {
            continue;
        }
        if available < dust_threshold {
            dust_dropped += 1;
            continue;
        }
        let full = Fill::native(order.clone(), full_input, full_output);
        let output = objective.interpolate(&full, available);
        fills.push(Fill::native(order.clone(), available, output));
    }
    let native_count = fills.len();

    for source in sources {
        let mut prev_input = Uint128::zero();
        let mut prev_output = Uint128::zero();
        let mut chain_tail: Option<usize> = None;
        for sample in &source.samples {
            let input = sample.input.saturating_sub(prev_input);
            let output = sample.output.saturating_sub(prev_output);
            prev_input = sample.input;
            prev_output = sample.output;
            if input.is_zero() {
                // Zero-width bucket (saturated or repeated sample); the
                // chain continues from the same tail.
                continue;
            }
            let mut fill = Fill::venue(source.venue, input, output);
            fill.parent = chain_tail;
            if no_conflicts {
                fill.exclusion_mask = source.venue.conflicts();
            }
            fills.push(fill);
            chain_tail = Some(fills.len() - 1);
        }
    }

    debug!(
        "built fill graph: {} native, {} venue fills ({} dust-dropped)",
        native_count,
        fills.len() - native_count,
        dust_dropped
    );

    sort_by_desirability(fills, side)
}

/// Floor of `target * dust_fraction`; native fills below it are not worth
/// the fixed cost of an extra order.
fn dust_threshold(target: Uint128, dust_fraction: Decimal) -> Uint128 {
    let threshold = Decimal::from(target.u128()) * dust_fraction;
    Uint128::new(threshold.floor().to_u128().unwrap_or(0))
}

/// Stable sort with parent links rewritten to the sorted positions. Sells
/// want the highest output per unit input first; buys pay `output`, so the
/// lowest rate comes first.
fn sort_by_desirability(fills: Vec<Fill>, side: Side) -> Vec<Fill> {
    let mut order: Vec<usize> = (0..fills.len()).collect();
    match side {
        Side::Sell => order.sort_by(|&a, &b| fills[b].rate().cmp(&fills[a].rate())),
        Side::Buy => order.sort_by(|&a, &b| fills[a].rate().cmp(&fills[b].rate())),
    }

    let mut new_position = vec![0usize; fills.len()];
    for (position, &index) in order.iter().enumerate() {
        new_position[index] = position;
    }

    let mut sorted: Vec<Fill> = Vec::with_capacity(fills.len());
    for &index in &order {
        let mut fill = fills[index].clone();
        if let Some(parent) = fill.parent {
            fill.parent = Some(new_position[parent]);
        }
        sorted.push(fill);
    }
    sorted
}
