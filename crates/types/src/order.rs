use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

use crate::DexVenue;

/// Verification context copied verbatim into every synthesized order.
/// The engine never inspects these fields.
#[cw_serde]
pub struct OrderDomain {
    /// Chain the orders settle on
    pub chain_id: String,

    /// Settlement contract address
    pub verifying_contract: String,
}

/// A standing off-chain-signed limit order from the native book.
///
/// Native orders carry no execution constraints beyond their amounts: they
/// may be filled partially and combined in any order with other liquidity.
#[cw_serde]
pub struct NativeOrder {
    /// Order identifier assigned by the book
    pub id: String,

    /// Maker address
    pub maker: String,

    /// Amount the taker provides for a full fill
    pub taker_amount: Uint128,

    /// Amount the maker promises for a full fill
    pub maker_amount: Uint128,

    /// Maker signature over the order; passed through unverified
    pub signature: Binary,

    /// Verification context the order was signed under
    pub domain: OrderDomain,
}

/// A synthesized order routing through a sampled venue.
#[cw_serde]
pub struct BridgeOrder {
    /// Venue the fill executes against
    pub venue: DexVenue,

    /// Amount the taker provides
    pub taker_amount: Uint128,

    /// Amount promised to the taker
    pub maker_amount: Uint128,

    /// Verification context copied from the caller
    pub domain: OrderDomain,
}

/// An executable order produced by the router.
#[cw_serde]
pub enum Order {
    /// Original signed order, unchanged
    Native(NativeOrder),

    /// Synthesized venue order with the slippage buffer applied
    Bridge(BridgeOrder),
}

impl Order {
    pub fn is_native(&self) -> bool {
        matches!(self, Order::Native(_))
    }

    pub fn taker_amount(&self) -> Uint128 {
        match self {
            Order::Native(order) => order.taker_amount,
            Order::Bridge(order) => order.taker_amount,
        }
    }

    pub fn maker_amount(&self) -> Uint128 {
        match self {
            Order::Native(order) => order.maker_amount,
            Order::Bridge(order) => order.maker_amount,
        }
    }
}
