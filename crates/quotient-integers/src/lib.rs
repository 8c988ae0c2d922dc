//! # quotient-integers
//!
//! Exact arbitrary precision integer and rational arithmetic.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals that stay unreduced until asked (`Rational`)
//! - Exact and rounded conversion to decimals (`dashu::float::DBig`)
//!
//! ## Reduction
//!
//! Arithmetic on `Rational` never cancels common factors. Call
//! `Rational::reduce` for the canonical form; comparison, equality and
//! hashing are by value either way.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimal;
pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use dashu::float::DBig;
pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;
