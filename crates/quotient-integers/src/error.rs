//! Errors raised by exact arithmetic.

use thiserror::Error;

/// Errors that can occur during exact integer and rational arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A value could not be constructed from the given parts.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    /// Division by, or inversion of, an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The value has no exact integer representation.
    #[error("{0} cannot be represented as an integer")]
    NonIntegral(String),

    /// The value has no finite decimal expansion.
    #[error("{0} cannot be represented as a finite decimal")]
    NonTerminating(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            ArithmeticError::NonIntegral("1/3".into()).to_string(),
            "1/3 cannot be represented as an integer"
        );
        assert_eq!(
            ArithmeticError::NonTerminating("2/3".into()).to_string(),
            "2/3 cannot be represented as a finite decimal"
        );
    }
}
