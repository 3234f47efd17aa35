//! Application layer: the interactive session and its commands
//!
//! This layer orchestrates domain logic and depends on the console
//! boundary trait.

pub mod commands;
pub mod error;
pub mod prompt;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use prompt::{PromptOutcome, Prompter};
pub use session::Session;
