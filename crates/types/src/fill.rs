use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use rust_decimal::Decimal;

use crate::{DexVenue, NativeOrder, NATIVE_FLAG};

/// Trade direction relative to the taker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Sell an exact input amount; more output is better
    Sell,
    /// Buy an exact output amount; less paid is better
    Buy,
}

/// Where a fill's liquidity comes from.
#[cw_serde]
pub enum FillSource {
    /// A standing signed limit order; materialization passes it through
    Native { order: NativeOrder },

    /// One sampled bucket of an on-chain venue's price-impact curve
    Venue { venue: DexVenue },
}

impl FillSource {
    pub fn is_native(&self) -> bool {
        matches!(self, FillSource::Native { .. })
    }

    pub fn venue(&self) -> Option<DexVenue> {
        match self {
            FillSource::Venue { venue } => Some(*venue),
            FillSource::Native { .. } => None,
        }
    }
}

/// An atomic increment of liquidity considered by the path search.
///
/// Fills are immutable once the graph is built; the post-processor produces
/// new aggregate values rather than mutating the arena.
#[cw_serde]
pub struct Fill {
    /// Amount consumed when this fill executes in full
    pub input: Uint128,

    /// Amount produced when this fill executes in full
    pub output: Uint128,

    /// Liquidity source backing this increment
    pub source: FillSource,

    /// Bit identifying the source in path bitmasks
    pub flags: u64,

    /// Flag bits that must not co-occur with this fill in one path
    pub exclusion_mask: u64,

    /// Arena index of the fill that must immediately precede this one.
    /// Set only on sampled buckets after the first: bucket k is the marginal
    /// increment over bucket k-1 and cannot execute out of order.
    pub parent: Option<usize>,
}

impl Fill {
    /// Root fill backed by a native order, scaled to its fillable amounts.
    pub fn native(order: NativeOrder, input: Uint128, output: Uint128) -> Self {
        Self {
            input,
            output,
            source: FillSource::Native { order },
            flags: NATIVE_FLAG,
            exclusion_mask: 0,
            parent: None,
        }
    }

    /// Marginal fill for one sampled venue bucket.
    pub fn venue(venue: DexVenue, input: Uint128, output: Uint128) -> Self {
        Self {
            input,
            output,
            source: FillSource::Venue { venue },
            flags: venue.flag(),
            exclusion_mask: 0,
            parent: None,
        }
    }

    /// Effective price of this increment (output per unit input).
    pub fn rate(&self) -> Decimal {
        if self.input.is_zero() {
            return Decimal::ZERO;
        }
        Decimal::from(self.output.u128()) / Decimal::from(self.input.u128())
    }
}

/// An ordered, constraint-satisfying sequence of fills.
#[cw_serde]
#[derive(Default)]
pub struct FillPath {
    pub fills: Vec<Fill>,
}

impl FillPath {
    pub fn new(fills: Vec<Fill>) -> Self {
        Self { fills }
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    pub fn total_input(&self) -> Uint128 {
        self.fills.iter().map(|f| f.input).sum()
    }

    pub fn total_output(&self) -> Uint128 {
        self.fills.iter().map(|f| f.output).sum()
    }
}
