//! # Quotient
//!
//! Exact rational and complex rational arithmetic on arbitrary precision
//! integers, with an approximate `f64` complex type alongside.
//!
//! ## Features
//!
//! - **Exact Rationals**: fractions of big integers that stay unreduced
//!   until `reduce` is called, compared and hashed by value
//! - **Exact Complex Rationals**: `a + bi` with rational parts, integer
//!   powers by squaring and constant-time powers of `±1` and `±i`
//! - **Decimal Conversion**: exact when the expansion terminates, rounded
//!   to a chosen number of significant digits otherwise
//! - **Approximate Complex**: `f64` pairs with exp, log, roots and
//!   trigonometric functions
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::prelude::*;
//!
//! let half = Rational::from_i64(1, 2)?;
//! let sum = &half + &Rational::from_i64(1, 3)?;
//! assert_eq!(sum.to_string(), "5/6");
//!
//! let z = ComplexRational::from_i64(3, 5).conjugate();
//! assert_eq!(z.to_string(), "3 - 5i");
//! assert_eq!(ComplexRational::i().powi(2)?, -ComplexRational::one());
//! # Ok::<(), ArithmeticError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_complex as complex;
pub use quotient_complex::math;
pub use quotient_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_traits::{One, Zero};
    pub use quotient_complex::{Complex, ComplexRational, DomainError};
    pub use quotient_integers::{ArithmeticError, Integer, Rational};
}
