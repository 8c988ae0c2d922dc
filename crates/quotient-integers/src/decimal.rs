//! Conversion of rationals to decimal floating point.
//!
//! A fraction has a finite decimal expansion exactly when its reduced
//! denominator is of the form `2^a * 5^b`; such values convert without
//! loss through [`Rational::to_decimal`]. Everything else goes through
//! [`Rational::round_to_decimal`], which rounds half away from zero to a
//! requested number of significant digits.

use dashu::float::round::mode::HalfAway;
use dashu::float::{Context, DBig};
use num_traits::{One, Zero};

use crate::{ArithmeticError, Integer, Rational};

impl Rational {
    /// Converts to an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonTerminating`] if the reduced denominator
    /// has a prime factor other than 2 and 5.
    pub fn to_decimal(&self) -> Result<DBig, ArithmeticError> {
        let reduced = self.reduce();

        let mut rest = reduced.denominator().clone();
        let twos = strip_factor(&mut rest, 2);
        let fives = strip_factor(&mut rest, 5);
        if !rest.is_one() {
            return Err(ArithmeticError::NonTerminating(self.to_string()));
        }

        // d divides 10^scale, so the significand is exact.
        let scale = twos.max(fives);
        let significand = reduced.numerator() * &Integer::power_of_ten(scale) / reduced.denominator();
        Ok(DBig::from_parts(significand.into_inner(), -(scale as isize)))
    }

    /// Rounds to a decimal with `precision` significant digits.
    ///
    /// Ties round away from zero. A precision of 0 is treated as 1.
    #[must_use]
    pub fn round_to_decimal(&self, precision: usize) -> DBig {
        if self.is_zero() {
            return DBig::ZERO;
        }

        let numerator = DBig::from(self.numerator().as_inner().clone());
        let denominator = DBig::from(self.denominator().as_inner().clone());
        Context::<HalfAway>::new(precision.max(1))
            .div(numerator.repr(), denominator.repr())
            .value()
    }
}

/// Divides out every factor `factor` from `value`, returning how many.
fn strip_factor(value: &mut Integer, factor: i64) -> usize {
    let factor = Integer::new(factor);
    let mut count = 0;
    while !value.is_zero() && (&*value % &factor).is_zero() {
        *value = &*value / &factor;
        count += 1;
    }
    count
}
