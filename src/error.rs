//! Error taxonomy shared by every function family.
//!
//! Preconditions are checked at the call site of the violated input and
//! reported through [`NumError`]. No error is ever turned into a NaN
//! sentinel.

use thiserror::Error;

/// Reasons a numeric operation refuses its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumError {
    /// An aggregate or statistics function received zero values.
    #[error("no numbers provided")]
    EmptyInput,

    /// A function defined only on non-negative input received a negative one.
    #[error("negative input is not allowed for {operation}")]
    NegativeInput { operation: &'static str },

    /// An explicit zero divisor, or a zero GCD inside `lcm`.
    #[error("division by zero")]
    DivisionByZero,

    /// The exact integer result does not fit in a `u64`.
    #[error("{operation} overflowed u64")]
    Overflow { operation: &'static str },
}

pub type NumResult<T> = Result<T, NumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(NumError::EmptyInput.to_string(), "no numbers provided");
        assert_eq!(NumError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumError::NegativeInput {
                operation: "factorial"
            }
            .to_string(),
            "negative input is not allowed for factorial"
        );
        assert_eq!(
            NumError::Overflow { operation: "lcm" }.to_string(),
            "lcm overflowed u64"
        );
    }
}
