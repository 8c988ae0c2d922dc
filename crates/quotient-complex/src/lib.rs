//! # quotient-complex
//!
//! Complex numbers on top of `quotient-integers`.
//!
//! - `ComplexRational`: exact complex numbers with `Rational` parts
//! - `Complex`: approximate complex numbers, a thin wrapper over `num_complex::Complex64`
//! - `math`: exp, log, roots, trigonometric and hyperbolic functions on `Complex`
//!
//! The exact type can be approximated with `ComplexRational::to_complex`;
//! nothing converts the other way implicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod complex_rational;
pub mod error;
pub mod math;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
pub use complex_rational::ComplexRational;
pub use error::DomainError;
