//! Errors raised by the transcendental functions.

use thiserror::Error;

/// A transcendental function was evaluated outside its domain.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The logarithm of zero.
    #[error("log(0) is undefined")]
    LogOfZero,

    /// A logarithm to base one.
    #[error("log base 1 is undefined")]
    LogBaseOne,

    /// The argument is a pole of the function.
    #[error("{0} is undefined")]
    Pole(String),

    /// The zeroth root.
    #[error("the 0th root is undefined")]
    ZerothRoot,
}
