pub mod amounts;
pub mod client;
pub mod error;
pub mod mock;

pub use amounts::*;
pub use client::*;
pub use error::*;
pub use mock::*;
