//! Arithmetic primitives.
//!
//! Most functions come in two flavours: a form that leans on the standard
//! library (or plain recursion) and an `_iterative` form that spells the
//! algorithm out with explicit loops. Each pair agrees on every supported
//! input; the pairs exist so they can be tested against each other.
//!
//! # Algorithms
//!
//! - **Square root**: Babylonian (Newton) iteration `g ← (g + a/g) / 2`.
//! - **Cube root**: Newton iteration `g ← (2g + a/g²) / 3`.
//!
//! Both iterations stop when two successive guesses are bit-for-bit
//! equal, not when they fall within an epsilon. See [`MAX_NEWTON_ITERATIONS`].

use tracing::{trace, warn};

use crate::error::{NumError, NumResult};

/// Upper bound on Newton steps for [`square_root_iterative`] and
/// [`cube_root_iterative`].
///
/// Inputs near `f64::MAX` need roughly 1200 steps for the cube root
/// before the quadratic phase kicks in, so the cap sits well above that.
pub const MAX_NEWTON_ITERATIONS: usize = 4096;

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
/// [`NumError::DivisionByZero`] if `b == 0` (either signed zero).
///
/// # Examples
/// ```
/// use u_numkit::arithmetic::divide;
/// use u_numkit::NumError;
/// assert_eq!(divide(10.0, 2.0), Ok(5.0));
/// assert_eq!(divide(10.0, 0.0), Err(NumError::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> NumResult<f64> {
    if b == 0.0 {
        return Err(NumError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `base` to a non-negative integer power by recursion.
///
/// Recursion depth equals `exponent`; very large exponents can exhaust
/// the stack. Use [`power_iterative`] there.
///
/// # Examples
/// ```
/// use u_numkit::arithmetic::power;
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert_eq!(power(7.5, 0), 1.0);
/// ```
pub fn power(base: f64, exponent: u32) -> f64 {
    if exponent == 0 {
        return 1.0;
    }
    base * power(base, exponent - 1)
}

/// Raises `base` to a non-negative integer power with a multiply loop.
pub fn power_iterative(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Square root via [`f64::sqrt`].
///
/// # Errors
/// [`NumError::NegativeInput`] if `num < 0`.
pub fn square_root(num: f64) -> NumResult<f64> {
    if num < 0.0 {
        return Err(NumError::NegativeInput {
            operation: "square_root",
        });
    }
    Ok(num.sqrt())
}

/// Square root via Babylonian (Newton) iteration.
///
/// # Algorithm
/// Starting from `num / 2` (or `1.0` when `num < 1`, so subnormal input
/// never yields a zero guess), repeats `g ← (g + num/g) / 2` until a
/// step leaves the guess unchanged. A step that returns to the guess
/// from two steps earlier also ends the loop, since rounding can make
/// the iteration alternate between two adjacent floats.
///
/// `0`, `+∞` and NaN are returned as-is without iterating.
///
/// # Errors
/// [`NumError::NegativeInput`] if `num < 0`.
///
/// # Examples
/// ```
/// use u_numkit::arithmetic::square_root_iterative;
/// assert_eq!(square_root_iterative(16.0), Ok(4.0));
/// assert_eq!(square_root_iterative(0.0), Ok(0.0));
/// assert!(square_root_iterative(-1.0).is_err());
/// ```
pub fn square_root_iterative(num: f64) -> NumResult<f64> {
    if num < 0.0 {
        return Err(NumError::NegativeInput {
            operation: "square_root_iterative",
        });
    }
    if num == 0.0 || !num.is_finite() {
        return Ok(num);
    }
    let seed = if num >= 1.0 { num / 2.0 } else { 1.0 };
    Ok(newton_fixed_point("square_root_iterative", num, seed, |g| {
        (g + num / g) / 2.0
    }))
}

/// Cube root via [`f64::cbrt`]. Defined for every real input.
pub fn cube_root(num: f64) -> f64 {
    num.cbrt()
}

/// Cube root via Newton iteration `g ← (2g + num/g²) / 3`.
///
/// Seeds from `num / 3`, or `±1.0` when `|num| < 1`. Shares the
/// stopping rule of [`square_root_iterative`]. Negative input is fine:
/// the iteration is odd-symmetric.
///
/// # Examples
/// ```
/// use u_numkit::arithmetic::cube_root_iterative;
/// assert!((cube_root_iterative(27.0) - 3.0).abs() < 1e-12);
/// assert!((cube_root_iterative(-8.0) + 2.0).abs() < 1e-12);
/// ```
pub fn cube_root_iterative(num: f64) -> f64 {
    if num == 0.0 || !num.is_finite() {
        return num;
    }
    let seed = if num.abs() >= 1.0 {
        num / 3.0
    } else {
        num.signum()
    };
    newton_fixed_point("cube_root_iterative", num, seed, |g| {
        (2.0 * g + num / (g * g)) / 3.0
    })
}

/// Runs `step` from `seed` until it reaches a fixed point or a two-cycle.
fn newton_fixed_point(
    operation: &'static str,
    num: f64,
    seed: f64,
    step: impl Fn(f64) -> f64,
) -> f64 {
    let mut guess = seed;
    let mut previous = f64::NAN;
    for iterations in 1..=MAX_NEWTON_ITERATIONS {
        let next = step(guess);
        if next == guess || next == previous {
            trace!(operation, num, iterations, "newton iteration converged");
            return next;
        }
        previous = guess;
        guess = next;
    }
    warn!(
        operation,
        num,
        max_iterations = MAX_NEWTON_ITERATIONS,
        "newton iteration hit the step limit"
    );
    guess
}

/// Absolute value via [`f64::abs`].
pub fn absolute_value(num: f64) -> f64 {
    num.abs()
}

/// Absolute value by branching on the sign bit.
pub fn absolute_value_iterative(num: f64) -> f64 {
    if num.is_sign_negative() {
        -num
    } else {
        num
    }
}

/// Rounds to the nearest integer, ties towards +∞.
///
/// This differs from [`f64::round`] on negative ties: `-2.5` rounds to
/// `-2`, not `-3`.
///
/// # Examples
/// ```
/// use u_numkit::arithmetic::round;
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -2.0);
/// assert_eq!(round(-2.6), -3.0);
/// ```
pub fn round(num: f64) -> f64 {
    let rounded = num.round();
    if rounded - num == -0.5 {
        // negative tie: f64::round went away from zero
        (rounded + 1.0).copysign(num)
    } else {
        rounded
    }
}

/// Rounds by comparing the fractional part against one half.
pub fn round_iterative(num: f64) -> f64 {
    let down = num.floor();
    if num - down < 0.5 {
        down
    } else {
        num.ceil()
    }
}

/// Smallest integer `>= num`.
pub fn ceil(num: f64) -> f64 {
    num.ceil()
}

/// [`ceil`] with exact integers passed through untouched.
pub fn ceil_iterative(num: f64) -> f64 {
    if num % 1.0 == 0.0 {
        return num;
    }
    let up = num.floor() + 1.0;
    // (-1, 0) rounds up to negative zero
    if up == 0.0 {
        -0.0
    } else {
        up
    }
}

/// Largest integer `<= num`.
pub fn floor(num: f64) -> f64 {
    num.floor()
}

/// [`floor`] with exact integers passed through untouched.
pub fn floor_iterative(num: f64) -> f64 {
    if num % 1.0 == 0.0 {
        num
    } else {
        num.floor()
    }
}

/// Largest value in `data`, folding with [`f64::max`].
///
/// Returns `f64::NEG_INFINITY` for an empty slice (the fold identity).
/// NaN elements are skipped, as [`f64::max`] does.
///
/// # Examples
/// ```
/// use u_numkit::arithmetic::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), 5.0);
/// assert_eq!(max(&[]), f64::NEG_INFINITY);
/// ```
pub fn max(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest value in `data`, folding with [`f64::min`].
///
/// Returns `f64::INFINITY` for an empty slice.
pub fn min(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Sum of `data`, left to right from `0.0`.
pub fn sum(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Largest value in `data` by a linear scan.
///
/// Returns `None` for an empty slice: this primitive performs no
/// emptiness check of its own, unlike the `stats` functions built on it.
pub fn max_iterative(data: &[f64]) -> Option<f64> {
    let (&first, rest) = data.split_first()?;
    let mut largest = first;
    for &x in rest {
        if x > largest {
            largest = x;
        }
    }
    Some(largest)
}

/// Smallest value in `data` by a linear scan. `None` when empty.
pub fn min_iterative(data: &[f64]) -> Option<f64> {
    let (&first, rest) = data.split_first()?;
    let mut smallest = first;
    for &x in rest {
        if x < smallest {
            smallest = x;
        }
    }
    Some(smallest)
}

/// Sum of `data` with an explicit index loop.
#[allow(clippy::needless_range_loop)]
pub fn sum_iterative(data: &[f64]) -> f64 {
    let mut total = 0.0;
    for i in 0..data.len() {
        total += data[i];
    }
    total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
