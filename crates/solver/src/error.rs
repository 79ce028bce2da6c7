use cosmwasm_std::Uint128;
use fillroute_sampler::SampleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no native orders provided")]
    NoOrders,

    #[error("insufficient liquidity: target {target}, available {available}")]
    NoFeasiblePath { target: Uint128, available: Uint128 },

    #[error("invalid router options: {reason}")]
    InvalidOptions { reason: String },

    #[error("quote sampling failed: {0}")]
    Sample(#[from] SampleError),
}
