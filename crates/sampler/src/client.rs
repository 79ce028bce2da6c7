use async_trait::async_trait;
use cosmwasm_std::Uint128;
use fillroute_types::{DexVenue, NativeOrder, SourceSamples};

use crate::SampleError;

/// Liquidity snapshot returned by the quoting boundary.
#[derive(Clone, Debug)]
pub struct SampledLiquidity {
    /// Currently fillable amount of each native order, order-aligned.
    /// Measured in the trade's target dimension: taker token for a sell,
    /// maker token for a buy.
    pub fillable_amounts: Vec<Uint128>,

    /// One sampled curve per requested venue
    pub source_samples: Vec<SourceSamples>,
}

impl SampledLiquidity {
    /// Rejects responses that violate the quoting contract. The search
    /// assumes well-formed monotonic curves, so a malformed response is a
    /// backend fault surfaced immediately, not an input to tolerate.
    pub fn validate(
        &self,
        orders: usize,
        venues: usize,
        num_samples: usize,
    ) -> Result<(), SampleError> {
        if self.fillable_amounts.len() != orders {
            return Err(SampleError::FillableCountMismatch {
                orders,
                amounts: self.fillable_amounts.len(),
            });
        }
        if self.source_samples.len() != venues {
            return Err(SampleError::SourceCountMismatch {
                got: self.source_samples.len(),
                expected: venues,
            });
        }
        for source in &self.source_samples {
            if source.samples.len() != num_samples {
                return Err(SampleError::SampleCountMismatch {
                    venue: source.venue.name().to_string(),
                    got: source.samples.len(),
                    expected: num_samples,
                });
            }
            for (i, pair) in source.samples.windows(2).enumerate() {
                if pair[1].input < pair[0].input || pair[1].output < pair[0].output {
                    return Err(SampleError::NonMonotonicSamples {
                        venue: source.venue.name().to_string(),
                        index: i + 1,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Quoting boundary the router suspends on once per call.
///
/// Implementations snapshot on-chain state: how much of each native order is
/// still fillable, and the cumulative output each venue quotes at the given
/// input thresholds. Both dimensions of every curve must be monotonically
/// non-decreasing.
#[async_trait]
pub trait QuoteSampler: Send + Sync {
    /// Quote a sell: thresholds are taker-token inputs, outputs are the maker
    /// token received.
    async fn sample_sell(
        &self,
        orders: &[NativeOrder],
        sample_amounts: &[Uint128],
        venues: &[DexVenue],
    ) -> Result<SampledLiquidity, SampleError>;

    /// Quote a buy: thresholds are maker-token amounts to acquire, outputs
    /// are the taker token paid.
    async fn sample_buy(
        &self,
        orders: &[NativeOrder],
        sample_amounts: &[Uint128],
        venues: &[DexVenue],
    ) -> Result<SampledLiquidity, SampleError>;
}
