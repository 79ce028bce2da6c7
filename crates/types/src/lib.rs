pub mod fill;
pub mod order;
pub mod sample;
pub mod source;

pub use fill::*;
pub use order::*;
pub use sample::*;
pub use source::*;
