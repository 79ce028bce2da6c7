use std::collections::HashMap;

use async_trait::async_trait;
use cosmwasm_std::Uint128;
use fillroute_types::{DexSample, DexVenue, NativeOrder, Side, SourceSamples};
use rust_decimal::prelude::*;

use crate::{QuoteSampler, SampleError, SampledLiquidity};

/// Deterministic sampler over simulated liquidity, for tests and local runs.
///
/// A venue is backed either by a fixed curve (returned exactly as
/// configured, whatever the thresholds) or by a simulated constant-product
/// pool sampled at the requested thresholds. Unconfigured venues quote an
/// empty curve. Native orders are fully fillable unless overridden per
/// order id.
pub struct MockSampler {
    venues: HashMap<DexVenue, VenueLiquidity>,
    fillable_overrides: HashMap<String, Uint128>,
}

#[derive(Clone, Debug)]
enum VenueLiquidity {
    Fixed(Vec<DexSample>),
    Pool {
        /// Reserve of the token the taker pays
        input_reserve: Uint128,
        /// Reserve of the token the taker receives
        output_reserve: Uint128,
        fee_rate: Decimal,
    },
}

impl MockSampler {
    pub fn new() -> Self {
        Self {
            venues: HashMap::new(),
            fillable_overrides: HashMap::new(),
        }
    }

    /// Back `venue` with a fixed cumulative curve.
    pub fn with_curve(mut self, venue: DexVenue, points: &[(u128, u128)]) -> Self {
        let samples = points.iter().map(|&(i, o)| DexSample::new(i, o)).collect();
        self.venues.insert(venue, VenueLiquidity::Fixed(samples));
        self
    }

    /// Back `venue` with a constant-product pool.
    pub fn with_pool(
        mut self,
        venue: DexVenue,
        input_reserve: u128,
        output_reserve: u128,
        fee_rate: Decimal,
    ) -> Self {
        self.venues.insert(
            venue,
            VenueLiquidity::Pool {
                input_reserve: Uint128::new(input_reserve),
                output_reserve: Uint128::new(output_reserve),
                fee_rate,
            },
        );
        self
    }

    /// Limit how much of one order is fillable, in the sampled dimension.
    pub fn with_fillable(mut self, order_id: impl Into<String>, amount: u128) -> Self {
        self.fillable_overrides
            .insert(order_id.into(), Uint128::new(amount));
        self
    }

    async fn sample(
        &self,
        orders: &[NativeOrder],
        sample_amounts: &[Uint128],
        venues: &[DexVenue],
        side: Side,
    ) -> Result<SampledLiquidity, SampleError> {
        let fillable_amounts = orders
            .iter()
            .map(|order| {
                self.fillable_overrides
                    .get(&order.id)
                    .copied()
                    .unwrap_or(match side {
                        Side::Sell => order.taker_amount,
                        Side::Buy => order.maker_amount,
                    })
            })
            .collect();

        let quotes = futures::future::join_all(
            venues
                .iter()
                .map(|venue| self.quote_venue(*venue, sample_amounts, side)),
        )
        .await;
        let source_samples = quotes.into_iter().collect::<Result<Vec<_>, _>>()?;

        Ok(SampledLiquidity {
            fillable_amounts,
            source_samples,
        })
    }

    async fn quote_venue(
        &self,
        venue: DexVenue,
        sample_amounts: &[Uint128],
        side: Side,
    ) -> Result<SourceSamples, SampleError> {
        let samples = match self.venues.get(&venue) {
            None => sample_amounts
                .iter()
                .map(|_| DexSample::new(0, 0))
                .collect(),
            Some(VenueLiquidity::Fixed(samples)) => samples.clone(),
            Some(VenueLiquidity::Pool {
                input_reserve,
                output_reserve,
                fee_rate,
            }) => {
                let mut samples = Vec::with_capacity(sample_amounts.len());
                for &threshold in sample_amounts {
                    let sample = match side {
                        Side::Sell => DexSample {
                            input: threshold,
                            output: pool_sell_output(
                                *input_reserve,
                                *output_reserve,
                                *fee_rate,
                                threshold,
                            )?,
                        },
                        Side::Buy => {
                            match pool_buy_input(*input_reserve, *output_reserve, *fee_rate, threshold)? {
                                Some(cost) => DexSample {
                                    input: threshold,
                                    output: cost,
                                },
                                // Pool cannot produce this much; the curve
                                // saturates at its last reachable point.
                                None => samples.last().copied().unwrap_or(DexSample::new(0, 0)),
                            }
                        }
                    };
                    samples.push(sample);
                }
                samples
            }
        };
        Ok(SourceSamples::new(venue, samples))
    }
}

impl Default for MockSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Constant-product output for selling `dx` into the pool, fee on input.
fn pool_sell_output(
    input_reserve: Uint128,
    output_reserve: Uint128,
    fee_rate: Decimal,
    dx: Uint128,
) -> Result<Uint128, SampleError> {
    let dx = Decimal::from(dx.u128()) * (Decimal::ONE - fee_rate);
    let r_in = Decimal::from(input_reserve.u128());
    let r_out = Decimal::from(output_reserve.u128());
    if (r_in + dx).is_zero() {
        return Ok(Uint128::zero());
    }
    let out = r_out * dx / (r_in + dx);
    let out = out
        .floor()
        .to_u128()
        .ok_or_else(|| SampleError::Backend("pool output out of range".to_string()))?;
    Ok(Uint128::new(out))
}

/// Constant-product cost of buying `dy` out of the pool, or `None` when the
/// pool cannot produce that much.
fn pool_buy_input(
    input_reserve: Uint128,
    output_reserve: Uint128,
    fee_rate: Decimal,
    dy: Uint128,
) -> Result<Option<Uint128>, SampleError> {
    if dy >= output_reserve {
        return Ok(None);
    }
    let dy = Decimal::from(dy.u128());
    let r_in = Decimal::from(input_reserve.u128());
    let r_out = Decimal::from(output_reserve.u128());
    let cost = r_in * dy / (r_out - dy) / (Decimal::ONE - fee_rate);
    let cost = cost
        .ceil()
        .to_u128()
        .ok_or_else(|| SampleError::Backend("pool cost out of range".to_string()))?;
    Ok(Some(Uint128::new(cost)))
}

#[async_trait]
impl QuoteSampler for MockSampler {
    async fn sample_sell(
        &self,
        orders: &[NativeOrder],
        sample_amounts: &[Uint128],
        venues: &[DexVenue],
    ) -> Result<SampledLiquidity, SampleError> {
        self.sample(orders, sample_amounts, venues, Side::Sell).await
    }

    async fn sample_buy(
        &self,
        orders: &[NativeOrder],
        sample_amounts: &[Uint128],
        venues: &[DexVenue],
    ) -> Result<SampledLiquidity, SampleError> {
        self.sample(orders, sample_amounts, venues, Side::Buy).await
    }
}
