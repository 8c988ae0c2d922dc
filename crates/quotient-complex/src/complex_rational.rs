//! Exact complex numbers with rational parts.
//!
//! Arithmetic is exact and, like [`Rational`], never reduces on its own.
//! Division and inversion share the squared magnitude `c² + d²` as a
//! single rational divisor.

use num_traits::{One, Zero};
use quotient_integers::{ArithmeticError, Integer, Rational};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

use crate::Complex;

/// An exact complex number `real + imaginary·i`.
///
/// Equality compares both parts by value. Zero is both real and imaginary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexRational {
    real: Rational,
    imaginary: Rational,
}

impl ComplexRational {
    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub fn new(real: Rational, imaginary: Rational) -> Self {
        Self { real, imaginary }
    }

    /// Creates a real complex number (imaginary part = 0).
    #[must_use]
    pub fn from_real(real: Rational) -> Self {
        Self::new(real, Rational::zero())
    }

    /// Creates a complex number from integer real and imaginary parts.
    #[must_use]
    pub fn from_i64(real: i64, imaginary: i64) -> Self {
        Self::new(Rational::from(real), Rational::from(imaginary))
    }

    /// Creates a complex number from float parts.
    ///
    /// Each part goes through [`Rational::from_f64`].
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidConstruction`] if either part is
    /// not finite.
    pub fn from_f64(real: f64, imaginary: f64) -> Result<Self, ArithmeticError> {
        Ok(Self::new(
            Rational::from_f64(real)?,
            Rational::from_f64(imaginary)?,
        ))
    }

    /// Creates a real complex number from a float.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidConstruction`] if `real` is not
    /// finite.
    pub fn from_real_f64(real: f64) -> Result<Self, ArithmeticError> {
        Rational::from_f64(real).map(Self::from_real)
    }

    /// The imaginary unit `i`, where `i² = -1`.
    #[must_use]
    pub fn i() -> Self {
        Self::new(Rational::zero(), Rational::one())
    }

    /// The constant 2.
    #[must_use]
    pub fn two() -> Self {
        Self::from_real(Rational::two())
    }

    /// The constant 10.
    #[must_use]
    pub fn ten() -> Self {
        Self::from_real(Rational::ten())
    }

    /// The constant 1/2.
    #[must_use]
    pub fn one_half() -> Self {
        Self::from_real(Rational::one_half())
    }

    /// The constant 1/10.
    #[must_use]
    pub fn one_tenth() -> Self {
        Self::from_real(Rational::one_tenth())
    }

    /// Returns the real part.
    #[must_use]
    pub fn real(&self) -> &Rational {
        &self.real
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn imaginary(&self) -> &Rational {
        &self.imaginary
    }

    /// Returns true if the imaginary part is zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.imaginary.signum() == 0
    }

    /// Returns true if the real part is zero.
    #[must_use]
    pub fn is_imaginary(&self) -> bool {
        self.real.signum() == 0
    }

    /// Returns `a² + b²` as an unreduced rational.
    #[must_use]
    pub fn norm_sqr(&self) -> Rational {
        &self.real * &self.real + &self.imaginary * &self.imaginary
    }

    /// Returns the complex conjugate `a - bi`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -&self.imaginary)
    }

    /// Reduces both parts to lowest terms.
    #[must_use]
    pub fn reduce(&self) -> Self {
        Self::new(self.real.reduce(), self.imaginary.reduce())
    }

    /// Returns `1/(a+bi) = (a - bi)/(a² + b²)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if this number is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        let norm = self.norm_sqr();
        if norm.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::new(
            self.real.checked_div(&norm)?,
            -self.imaginary.checked_div(&norm)?,
        ))
    }

    /// Divides by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        let norm = divisor.norm_sqr();
        if norm.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&divisor.real, &divisor.imaginary);
        Ok(Self::new(
            (a * c + b * d).checked_div(&norm)?,
            (b * c - a * d).checked_div(&norm)?,
        ))
    }

    /// Raises this number to an integer power.
    ///
    /// Uses exponentiation by squaring. The exponent 0 and the bases 0, 1,
    /// -1, `i` and `-i` are answered in constant time; powers of `±i` cycle
    /// with period four. A negative exponent inverts first. The result is
    /// never reduced.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when zero is raised to a
    /// negative power.
    pub fn pow(&self, exponent: &Integer) -> Result<Self, ArithmeticError> {
        match exponent.signum() {
            0 => return Ok(Self::one()),
            -1 => return self.recip()?.pow(&-exponent),
            _ => {}
        }

        if self.is_zero() {
            trace!("zero base");
            return Ok(Self::zero());
        }
        if self.is_real() {
            if self.real.is_one() {
                trace!("unit base");
                return Ok(Self::one());
            }
            if self.real == -Rational::one() {
                trace!("negative unit base");
                return Ok(if exponent.is_even() {
                    Self::one()
                } else {
                    -Self::one()
                });
            }
        } else if self.is_imaginary() {
            if self.imaginary.is_one() {
                trace!("imaginary unit base");
                return Ok(Self::quarter_turns(exponent, false));
            }
            if self.imaginary == -Rational::one() {
                trace!("negative imaginary unit base");
                return Ok(Self::quarter_turns(exponent, true));
            }
        }

        let mut base = self.clone();
        let mut exp = exponent.clone();
        let mut result = Self::one();

        while exp.signum() > 0 {
            if exp.is_odd() {
                result = &result * &base;
            }
            exp = exp >> 1;
            if !exp.is_zero() {
                base = &base * &base;
            }
        }

        Ok(result)
    }

    /// Raises this number to an `i64` power. See [`ComplexRational::pow`].
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when zero is raised to a
    /// negative power.
    pub fn powi(&self, exponent: i64) -> Result<Self, ArithmeticError> {
        self.pow(&Integer::new(exponent))
    }

    // (±i)^e for positive e.
    fn quarter_turns(exponent: &Integer, negative: bool) -> Self {
        let turns = (exponent % &Integer::new(4)).to_i64().unwrap_or_default();
        match (turns, negative) {
            (0, _) => Self::one(),
            (2, _) => -Self::one(),
            (1, false) | (3, true) => Self::i(),
            _ => -Self::i(),
        }
    }

    /// Returns the nearest approximate complex number.
    #[must_use]
    pub fn to_complex(&self) -> Complex {
        Complex::new(self.real.to_f64(), self.imaginary.to_f64())
    }
}

impl Zero for ComplexRational {
    fn zero() -> Self {
        Self::from_real(Rational::zero())
    }

    fn is_zero(&self) -> bool {
        self.is_real() && self.is_imaginary()
    }
}

impl One for ComplexRational {
    fn one() -> Self {
        Self::from_real(Rational::one())
    }
}

impl fmt::Display for ComplexRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = Rational::one();
        let minus_one = -Rational::one();

        if self.is_real() {
            write!(f, "{}", self.real)
        } else if self.is_imaginary() {
            if self.imaginary == one {
                write!(f, "i")
            } else if self.imaginary == minus_one {
                write!(f, "-i")
            } else {
                write!(f, "{}i", self.imaginary)
            }
        } else if self.imaginary.is_negative() {
            write!(f, "{} - ", self.real)?;
            if self.imaginary != minus_one {
                write!(f, "{}", -&self.imaginary)?;
            }
            write!(f, "i")
        } else {
            write!(f, "{} + ", self.real)?;
            if self.imaginary != one {
                write!(f, "{}", self.imaginary)?;
            }
            write!(f, "i")
        }
    }
}

// Arithmetic operations
impl Add for &ComplexRational {
    type Output = ComplexRational;

    fn add(self, rhs: Self) -> Self::Output {
        ComplexRational::new(&self.real + &rhs.real, &self.imaginary + &rhs.imaginary)
    }
}

impl Add for ComplexRational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &ComplexRational {
    type Output = ComplexRational;

    fn sub(self, rhs: Self) -> Self::Output {
        ComplexRational::new(&self.real - &rhs.real, &self.imaginary - &rhs.imaginary)
    }
}

impl Sub for ComplexRational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &ComplexRational {
    type Output = ComplexRational;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&rhs.real, &rhs.imaginary);
        ComplexRational::new(a * c - b * d, a * d + b * c)
    }
}

impl Mul for ComplexRational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for ComplexRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl Neg for &ComplexRational {
    type Output = ComplexRational;

    fn neg(self) -> Self::Output {
        ComplexRational::new(-&self.real, -&self.imaginary)
    }
}

impl From<Rational> for ComplexRational {
    fn from(real: Rational) -> Self {
        Self::from_real(real)
    }
}

impl From<Integer> for ComplexRational {
    fn from(n: Integer) -> Self {
        Self::from_real(Rational::from(n))
    }
}

impl From<i64> for ComplexRational {
    fn from(n: i64) -> Self {
        Self::from_real(Rational::from(n))
    }
}

impl From<i32> for ComplexRational {
    fn from(n: i32) -> Self {
        Self::from_real(Rational::from(n))
    }
}

impl TryFrom<f64> for ComplexRational {
    type Error = ArithmeticError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_real_f64(value)
    }
}
