//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Why a validator rejected a raw input line.
///
/// Parse failures and out-of-range values are both plain rejections, not
/// program errors. The variants exist so the prompt loop can name the
/// violated bound when it asks again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("not a whole number")]
    NotAnInteger,

    #[error("must be a whole number between {min} and {max}")]
    IntegerOutOfRange { min: u32, max: u32 },

    #[error("not a number")]
    NotANumber,

    #[error("must be at least {floor}")]
    BelowMinimum { floor: f64 },

    #[error("enter a number between 1 and {count}")]
    ChoiceOutOfRange { count: usize },

    #[error("answer y or n")]
    NotYesNo,
}
