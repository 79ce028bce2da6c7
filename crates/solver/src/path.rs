use cosmwasm_std::Uint128;
use fillroute_types::{BridgeOrder, Fill, FillPath, FillSource, Order, OrderDomain, Side};
use rust_decimal::prelude::*;

/// Merges runs of consecutive venue fills from the same venue into one
/// aggregate fill, summing amounts. Native fills never merge. Total
/// economics are unchanged; the only effect is fewer orders downstream.
pub fn simplify(path: FillPath) -> FillPath {
    let mut merged: Vec<Fill> = Vec::with_capacity(path.fills.len());
    for fill in path.fills {
        match (merged.last_mut(), fill.source.venue()) {
            (Some(previous), Some(venue)) if previous.source.venue() == Some(venue) => {
                previous.input += fill.input;
                previous.output += fill.output;
            }
            _ => merged.push(fill),
        }
    }
    FillPath::new(merged)
}

/// Turns a simplified path into executable orders.
///
/// Native fills pass the original signed order through untouched. Venue
/// fills become bridge orders with the slippage buffer applied to the side
/// the engine guarantees: a sell promises less output, a buy commits more
/// input, and both adjustments round up so the guarantee always favors the
/// filler.
pub fn materialize(
    path: FillPath,
    side: Side,
    slippage_buffer: Decimal,
    domain: &OrderDomain,
) -> Vec<Order> {
    path.fills
        .into_iter()
        .map(|fill| match fill.source {
            FillSource::Native { order } => Order::Native(order),
            FillSource::Venue { venue } => {
                let (taker_amount, maker_amount) = match side {
                    Side::Sell => (
                        fill.input,
                        scale_ceil(fill.output, Decimal::ONE - slippage_buffer),
                    ),
                    Side::Buy => (
                        scale_ceil(fill.output, Decimal::ONE + slippage_buffer),
                        fill.input,
                    ),
                };
                Order::Bridge(BridgeOrder {
                    venue,
                    taker_amount,
                    maker_amount,
                    domain: domain.clone(),
                })
            }
        })
        .collect()
}

/// `amount * factor`, rounded up.
fn scale_ceil(amount: Uint128, factor: Decimal) -> Uint128 {
    let scaled = Decimal::from(amount.u128()) * factor;
    Uint128::new(scaled.ceil().to_u128().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Binary;
    use fillroute_types::{DexVenue, NativeOrder};
    use std::str::FromStr;

    fn test_domain() -> OrderDomain {
        OrderDomain {
            chain_id: "osmosis-1".to_string(),
            verifying_contract: "settlement".to_string(),
        }
    }

    fn test_order(id: &str, taker_amount: u128, maker_amount: u128) -> NativeOrder {
        NativeOrder {
            id: id.to_string(),
            maker: "maker".to_string(),
            taker_amount: Uint128::new(taker_amount),
            maker_amount: Uint128::new(maker_amount),
            signature: Binary::from(b"sig".as_slice()),
            domain: test_domain(),
        }
    }

    fn native(id: &str, input: u128, output: u128) -> Fill {
        Fill::native(
            test_order(id, input, output),
            Uint128::new(input),
            Uint128::new(output),
        )
    }

    fn venue(venue: DexVenue, input: u128, output: u128) -> Fill {
        Fill::venue(venue, Uint128::new(input), Uint128::new(output))
    }

    // ==================== Simplify ====================

    #[test]
    fn test_simplify_merges_contiguous_same_venue_runs() {
        let path = FillPath::new(vec![
            venue(DexVenue::Osmosis, 10, 11),
            venue(DexVenue::Osmosis, 10, 9),
            venue(DexVenue::Astroport, 5, 5),
        ]);
        let simplified = simplify(path);

        assert_eq!(simplified.len(), 2);
        assert_eq!(simplified.fills[0].input, Uint128::new(20));
        assert_eq!(simplified.fills[0].output, Uint128::new(20));
        assert_eq!(simplified.fills[1].input, Uint128::new(5));
    }

    #[test]
    fn test_simplify_preserves_totals() {
        let path = FillPath::new(vec![
            venue(DexVenue::Osmosis, 10, 11),
            venue(DexVenue::Osmosis, 7, 6),
            native("a", 5, 5),
            venue(DexVenue::Osmosis, 3, 2),
        ]);
        let before_input = path.total_input();
        let before_output = path.total_output();
        let simplified = simplify(path);

        assert_eq!(simplified.total_input(), before_input);
        assert_eq!(simplified.total_output(), before_output);
    }

    #[test]
    fn test_simplify_never_merges_native_fills() {
        let path = FillPath::new(vec![native("a", 5, 5), native("b", 5, 6)]);
        let simplified = simplify(path);
        assert_eq!(simplified.len(), 2);
    }

    #[test]
    fn test_simplify_does_not_merge_across_interleaved_sources() {
        let path = FillPath::new(vec![
            venue(DexVenue::Osmosis, 10, 11),
            native("a", 5, 5),
            venue(DexVenue::Osmosis, 3, 2),
        ]);
        let simplified = simplify(path);
        assert_eq!(simplified.len(), 3);
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let path = FillPath::new(vec![
            venue(DexVenue::Osmosis, 10, 11),
            venue(DexVenue::Osmosis, 10, 9),
            native("a", 5, 5),
            venue(DexVenue::SkipGo, 5, 5),
        ]);
        let once = simplify(path);
        let twice = simplify(once.clone());
        assert_eq!(once, twice);
    }

    // ==================== Materialize ====================

    #[test]
    fn test_native_fills_pass_the_signed_order_through() {
        let order = test_order("a", 100, 150);
        let path = FillPath::new(vec![Fill::native(
            order.clone(),
            Uint128::new(40),
            Uint128::new(60),
        )]);
        let orders = materialize(path, Side::Sell, Decimal::ZERO, &test_domain());

        assert_eq!(orders.len(), 1);
        match &orders[0] {
            // The original order, not the clipped amounts
            Order::Native(passed) => assert_eq!(passed, &order),
            other => panic!("expected native order, got {:?}", other),
        }
    }

    #[test]
    fn test_sell_bridge_order_reduces_promised_output() {
        // 1% buffer: maker side becomes ceil(200 * 0.99) = 198
        let path = FillPath::new(vec![venue(DexVenue::Osmosis, 100, 200)]);
        let orders = materialize(
            path,
            Side::Sell,
            Decimal::from_str("0.01").unwrap(),
            &test_domain(),
        );

        match &orders[0] {
            Order::Bridge(bridge) => {
                assert_eq!(bridge.venue, DexVenue::Osmosis);
                assert_eq!(bridge.taker_amount, Uint128::new(100));
                assert_eq!(bridge.maker_amount, Uint128::new(198));
            }
            other => panic!("expected bridge order, got {:?}", other),
        }
    }

    #[test]
    fn test_sell_bridge_reduction_rounds_up() {
        // ceil(55 * 0.999) = ceil(54.945) = 55
        let path = FillPath::new(vec![venue(DexVenue::Osmosis, 100, 55)]);
        let orders = materialize(
            path,
            Side::Sell,
            Decimal::from_str("0.001").unwrap(),
            &test_domain(),
        );
        assert_eq!(orders[0].maker_amount(), Uint128::new(55));
    }

    #[test]
    fn test_buy_bridge_order_increases_committed_input() {
        // Buy-side fills carry the bought amount as input and the cost as
        // output; 1% buffer: taker side becomes ceil(200 * 1.01) = 202
        let path = FillPath::new(vec![venue(DexVenue::Astroport, 100, 200)]);
        let orders = materialize(
            path,
            Side::Buy,
            Decimal::from_str("0.01").unwrap(),
            &test_domain(),
        );

        match &orders[0] {
            Order::Bridge(bridge) => {
                assert_eq!(bridge.maker_amount, Uint128::new(100));
                assert_eq!(bridge.taker_amount, Uint128::new(202));
            }
            other => panic!("expected bridge order, got {:?}", other),
        }
    }

    #[test]
    fn test_domain_copied_into_every_bridge_order() {
        let domain = OrderDomain {
            chain_id: "neutron-1".to_string(),
            verifying_contract: "router".to_string(),
        };
        let path = FillPath::new(vec![
            venue(DexVenue::Osmosis, 10, 10),
            venue(DexVenue::SkipGo, 10, 10),
        ]);
        let orders = materialize(path, Side::Sell, Decimal::ZERO, &domain);

        for order in &orders {
            match order {
                Order::Bridge(bridge) => assert_eq!(bridge.domain, domain),
                other => panic!("expected bridge order, got {:?}", other),
            }
        }
    }
}
