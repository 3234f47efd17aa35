//! Input validators for raw console lines
//!
//! Every validator is pure: the same raw string and bounds always yield
//! the same verdict. Callers re-prompt on rejection and render the
//! rejection as the retry message.

use std::num::IntErrorKind;

use crate::domain::error::Rejection;

/// Parse a whole number within an inclusive range.
///
/// Overflowing literals (a 40-digit number, say) count as out-of-range
/// rather than non-numeric: the user typed a number, just not an
/// acceptable one.
pub fn parse_natural_in_range(raw: &str, min: u32, max: u32) -> Result<u32, Rejection> {
    match raw.parse::<i64>() {
        Ok(value) if (i64::from(min)..=i64::from(max)).contains(&value) => Ok(value as u32),
        Ok(_) => Err(Rejection::IntegerOutOfRange { min, max }),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(Rejection::IntegerOutOfRange { min, max })
            }
            _ => Err(Rejection::NotAnInteger),
        },
    }
}

/// Parse a real number with an inclusive lower bound.
///
/// Non-finite values (`inf`, `NaN`) are rejected as non-numeric.
pub fn parse_decimal_at_least(raw: &str, floor: f64) -> Result<f64, Rejection> {
    let value: f64 = raw.parse().map_err(|_| Rejection::NotANumber)?;
    if !value.is_finite() {
        return Err(Rejection::NotANumber);
    }
    if value < floor {
        return Err(Rejection::BelowMinimum { floor });
    }
    Ok(value)
}

/// Parse a 1-based menu selection among `option_count` entries.
pub fn parse_menu_choice(raw: &str, option_count: usize) -> Result<usize, Rejection> {
    let choice = raw.parse::<usize>().map_err(|_| Rejection::ChoiceOutOfRange {
        count: option_count,
    })?;
    if (1..=option_count).contains(&choice) {
        Ok(choice)
    } else {
        Err(Rejection::ChoiceOutOfRange {
            count: option_count,
        })
    }
}
