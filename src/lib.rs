#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod types;
pub mod utils;

pub use types::*;
pub use utils::*;
