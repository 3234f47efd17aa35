//! Domain layer: pure numeric logic and input validation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod cubes;
pub mod error;
pub mod factorial;
pub mod units;
pub mod validate;

pub use error::Rejection;
