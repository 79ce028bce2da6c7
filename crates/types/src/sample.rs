use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::DexVenue;

/// One cumulative point on a venue's price-impact curve.
///
/// `input` is measured in the trade's target dimension (taker token for a
/// sell, maker token for a buy); `output` is the counter amount the venue
/// quotes for consuming that much in one swap.
#[cw_serde]
#[derive(Copy)]
pub struct DexSample {
    /// Cumulative input at this point
    pub input: Uint128,

    /// Cumulative output quoted for that input
    pub output: Uint128,
}

impl DexSample {
    pub fn new(input: u128, output: u128) -> Self {
        Self {
            input: Uint128::new(input),
            output: Uint128::new(output),
        }
    }
}

/// A venue's sampled curve, length-aligned with the requested thresholds.
#[cw_serde]
pub struct SourceSamples {
    pub venue: DexVenue,
    pub samples: Vec<DexSample>,
}

impl SourceSamples {
    pub fn new(venue: DexVenue, samples: Vec<DexSample>) -> Self {
        Self { venue, samples }
    }
}
