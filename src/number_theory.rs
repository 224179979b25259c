//! Integer predicates and recursions.
//!
//! Parity, primality, factorial, Fibonacci, GCD and LCM, each with a
//! recursive (or naive) form and an `_iterative` (or optimized) form.
//!
//! Results are exact `u64` values. Where the exact result would not fit,
//! the functions report [`NumError::Overflow`] rather than wrap.

use crate::error::{NumError, NumResult};

/// Largest `n` with `n!` representable in a `u64` (`20! ≈ 2.4 × 10¹⁸`).
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Largest `n` with `F(n)` representable in a `u64` (`F(93) ≈ 1.2 × 10¹⁹`).
pub const MAX_FIBONACCI_INPUT: u64 = 93;

/// Returns `true` if `n` is divisible by two.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Returns `true` if `n` is not divisible by two. Works for negatives.
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Primality by trial division against every integer in `2..num`.
///
/// # Complexity
/// Time: O(n). Prefer [`is_prime_optimized`] outside of tests.
///
/// # Examples
/// ```
/// use u_numkit::number_theory::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(100));
/// ```
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    for i in 2..num {
        if num % i == 0 {
            return false;
        }
    }
    true
}

/// Primality by 6k ± 1 trial division up to `√num`.
///
/// # Algorithm
/// Every prime above 3 has the form `6k ± 1`. After ruling out 2 and 3,
/// only candidates `i` and `i + 2` for `i = 5, 11, 17, …` need testing,
/// and only while `i² <= num`.
///
/// # Complexity
/// Time: O(√n), Space: O(1)
pub fn is_prime_optimized(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }
    let mut i = 5;
    // i <= num / i is i * i <= num without the overflow
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// `n!` by recursion.
///
/// Recursion depth is bounded by [`MAX_FACTORIAL_INPUT`]: larger inputs
/// are rejected before recursing.
///
/// # Errors
/// - [`NumError::NegativeInput`] if `n < 0`.
/// - [`NumError::Overflow`] if `n > 20`.
///
/// # Examples
/// ```
/// use u_numkit::number_theory::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> NumResult<u64> {
    let n = non_negative(n, "factorial")?;
    if n > MAX_FACTORIAL_INPUT {
        return Err(NumError::Overflow {
            operation: "factorial",
        });
    }
    Ok(factorial_recursive(n))
}

fn factorial_recursive(n: u64) -> u64 {
    if n == 0 {
        return 1;
    }
    n * factorial_recursive(n - 1)
}

/// `n!` with an accumulating loop.
///
/// # Errors
/// - [`NumError::NegativeInput`] if `n < 0`.
/// - [`NumError::Overflow`] as soon as the running product leaves `u64`.
pub fn factorial_iterative(n: i64) -> NumResult<u64> {
    let n = non_negative(n, "factorial_iterative")?;
    let mut result: u64 = 1;
    for i in 1..=n {
        result = result.checked_mul(i).ok_or(NumError::Overflow {
            operation: "factorial_iterative",
        })?;
    }
    Ok(result)
}

/// The `n`-th Fibonacci number by naive double recursion.
///
/// No memoization: time grows as O(φⁿ), so this is only practical for
/// small `n` (a few dozen). [`fibonacci_iterative`] is linear.
///
/// # Errors
/// - [`NumError::NegativeInput`] if `n < 0`.
/// - [`NumError::Overflow`] if `n > 93`.
///
/// # Examples
/// ```
/// use u_numkit::number_theory::fibonacci;
/// assert_eq!(fibonacci(0), Ok(0));
/// assert_eq!(fibonacci(1), Ok(1));
/// assert_eq!(fibonacci(10), Ok(55));
/// ```
pub fn fibonacci(n: i64) -> NumResult<u64> {
    let n = non_negative(n, "fibonacci")?;
    if n > MAX_FIBONACCI_INPUT {
        return Err(NumError::Overflow {
            operation: "fibonacci",
        });
    }
    Ok(fibonacci_recursive(n))
}

fn fibonacci_recursive(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2),
    }
}

/// The `n`-th Fibonacci number by iterating the pair `(F(i-1), F(i))`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn fibonacci_iterative(n: i64) -> NumResult<u64> {
    let n = non_negative(n, "fibonacci_iterative")?;
    if n < 2 {
        return Ok(n);
    }
    let (mut a, mut b): (u64, u64) = (0, 1);
    for _ in 2..=n {
        let next = a.checked_add(b).ok_or(NumError::Overflow {
            operation: "fibonacci_iterative",
        })?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Greatest common divisor by recursive Euclid. `gcd(a, 0) == a`.
///
/// # Examples
/// ```
/// use u_numkit::number_theory::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        return a;
    }
    gcd(b, a % b)
}

/// Greatest common divisor by looping Euclid.
pub fn gcd_iterative(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple, `a · b / gcd(a, b)`.
///
/// Divides before multiplying, so the intermediate never exceeds the
/// result.
///
/// # Errors
/// - [`NumError::DivisionByZero`] if `a == 0 && b == 0` (the GCD is zero).
/// - [`NumError::Overflow`] if the result does not fit in a `u64`.
///
/// # Examples
/// ```
/// use u_numkit::number_theory::lcm;
/// assert_eq!(lcm(4, 6), Ok(12));
/// assert_eq!(lcm(0, 5), Ok(0));
/// assert!(lcm(0, 0).is_err());
/// ```
pub fn lcm(a: u64, b: u64) -> NumResult<u64> {
    lcm_with(a, b, gcd(a, b), "lcm")
}

/// [`lcm`] on top of [`gcd_iterative`].
pub fn lcm_iterative(a: u64, b: u64) -> NumResult<u64> {
    lcm_with(a, b, gcd_iterative(a, b), "lcm_iterative")
}

fn lcm_with(a: u64, b: u64, divisor: u64, operation: &'static str) -> NumResult<u64> {
    if divisor == 0 {
        return Err(NumError::DivisionByZero);
    }
    (a / divisor)
        .checked_mul(b)
        .ok_or(NumError::Overflow { operation })
}

fn non_negative(n: i64, operation: &'static str) -> NumResult<u64> {
    u64::try_from(n).map_err(|_| NumError::NegativeInput { operation })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
