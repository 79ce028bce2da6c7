//! Liquidity aggregation for token swaps.
//!
//! fillroute combines a native book of signed limit orders with sampled
//! on-chain venue liquidity, searches for the best combination of partial
//! fills covering a requested amount, and returns executable orders.

pub use fillroute_sampler as sampler;
pub use fillroute_solver as solver;
pub use fillroute_types as types;

pub use fillroute_sampler::{sample_amounts, MockSampler, QuoteSampler, SampleError, SampledLiquidity};
pub use fillroute_solver::{optimize, simplify, Objective, RouteError, Router, RouterOptions};
pub use fillroute_types::{
    BridgeOrder, DexSample, DexVenue, Fill, FillPath, FillSource, NativeOrder, Order, OrderDomain,
    Side, SourceSamples,
};
