//! Infrastructure layer: real console I/O
//!
//! This layer implements the I/O boundary trait the interactive session
//! runs against.

pub mod console;

pub use console::{Console, StdConsole};
