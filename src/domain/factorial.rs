//! Factorial-sum evaluator over arbitrary-precision integers

use num_bigint::BigUint;
use num_traits::One;

/// Largest accepted value for a single factorial term.
pub const MAX_TERM: u32 = i32::MAX as u32;

/// Number of terms a factorial-sum run collects.
pub const TERM_COUNT: usize = 3;

/// n! by iterative accumulation; 0! and 1! are both 1.
///
/// One big-integer multiplication per step, so terms anywhere near
/// [`MAX_TERM`] will not finish in practical time. There is no internal
/// timeout; the caller owns that risk.
pub fn factorial(n: u32) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

/// a! + b! + c! for the collected terms.
pub fn factorial_sum(terms: &[u32; TERM_COUNT]) -> BigUint {
    terms.iter().map(|&t| factorial(t)).sum()
}

/// Render the sum with its digit count, truncating past `digit_cap`.
///
/// Full form: `a! + b! + c! = 9 (1 digit)`. Truncated form names the
/// digit count and shows only the leading `digit_cap` digits.
pub fn render_sum(terms: &[u32; TERM_COUNT], sum: &BigUint, digit_cap: usize) -> String {
    let digits = sum.to_string();
    let count = digits.len();
    if count > digit_cap {
        format!(
            "{}! + {}! + {}! has {} digits; the first {} are {}...",
            terms[0], terms[1], terms[2], count, digit_cap, &digits[..digit_cap]
        )
    } else {
        let noun = if count == 1 { "digit" } else { "digits" };
        format!(
            "{}! + {}! + {}! = {} ({} {})",
            terms[0], terms[1], terms[2], digits, count, noun
        )
    }
}
