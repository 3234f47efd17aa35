//! Sum-of-cubes evaluator

/// Smallest accepted n for the cube-sum prompt.
pub const MIN_N: u32 = 1;

/// Largest accepted n for the cube-sum prompt.
///
/// 92681 is the largest n whose triangular number n(n+1)/2 still fits in
/// 32 bits; the squared result stays comfortably inside `u128`.
pub const MAX_N: u32 = 92_681;

/// Sum of the first `n` cubes via the closed form (n(n+1)/2)^2.
///
/// Constant-time arithmetic in `u128`; no intermediate can overflow for
/// any `n` up to [`MAX_N`].
pub fn sum_of_cubes(n: u32) -> u128 {
    let triangular = u128::from(n) * (u128::from(n) + 1) / 2;
    triangular * triangular
}
