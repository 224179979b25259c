//! # u-numkit
//!
//! Arithmetic, number-theory and descriptive statistics primitives.
//!
//! Every function is pure and synchronous. Most ship twice: once in a
//! form that leans on the standard library or plain recursion, and once
//! as an `_iterative` form written with explicit loops. The two forms of
//! a pair agree on every supported input, which makes them useful for
//! differential testing.
//!
//! ## Modules
//!
//! - [`arithmetic`] — add/divide/power, Newton square and cube roots,
//!   rounding, and the `max`/`min`/`sum` reductions
//! - [`number_theory`] — parity, primality, factorial, Fibonacci, GCD/LCM
//! - [`stats`] — average, median, mode, range, population variance and
//!   standard deviation
//!
//! ## Errors
//!
//! Precondition violations are returned as [`NumError`], never as NaN:
//! empty input to a statistic, a negative argument to factorial,
//! Fibonacci or square root, a zero divisor, or an integer result too
//! large for `u64`.
//!
//! ## Logging
//!
//! Newton iterations emit `tracing` events (`trace` on convergence,
//! `warn` if the step limit is reached). The crate never installs a
//! subscriber.

pub mod arithmetic;
pub mod error;
pub mod number_theory;
pub mod stats;

pub use arithmetic::*;
pub use error::{NumError, NumResult};
pub use number_theory::*;
pub use stats::*;
