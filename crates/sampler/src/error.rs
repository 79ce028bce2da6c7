use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("fillable amounts misaligned: {orders} orders, {amounts} amounts returned")]
    FillableCountMismatch { orders: usize, amounts: usize },

    #[error("sampled {got} venues, {expected} were requested")]
    SourceCountMismatch { got: usize, expected: usize },

    #[error("venue {venue} returned {got} samples, expected {expected}")]
    SampleCountMismatch {
        venue: String,
        got: usize,
        expected: usize,
    },

    #[error("venue {venue} samples not monotonic at index {index}")]
    NonMonotonicSamples { venue: String, index: usize },

    #[error("sampler backend failed: {0}")]
    Backend(String),
}
