//! Approximate complex numbers over `f64`.
//!
//! `Complex` wraps [`num_complex::Complex64`] and mirrors the arithmetic
//! surface of [`ComplexRational`](crate::ComplexRational) with plain IEEE
//! semantics: nothing here is exact and nothing fails. Dividing by zero
//! yields whatever the float division yields.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;

/// An approximate complex number `real + imaginary·i` of two `f64`s.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Complex(Complex64);

impl Complex {
    /// A constant `Complex` 0.
    pub const ZERO: Self = Self::from_real(0.0);

    /// A constant `Complex` 1/2.
    pub const ONE_HALF: Self = Self::from_real(0.5);

    /// A constant `Complex` 1/10.
    pub const ONE_TENTH: Self = Self::from_real(0.1);

    /// A constant `Complex` 1.
    pub const ONE: Self = Self::from_real(1.0);

    /// A constant `Complex` 2.
    pub const TWO: Self = Self::from_real(2.0);

    /// A constant `Complex` 10.
    pub const TEN: Self = Self::from_real(10.0);

    /// Euler's number.
    pub const E: Self = Self::from_real(std::f64::consts::E);

    /// Archimedes' constant.
    pub const PI: Self = Self::from_real(std::f64::consts::PI);

    /// A constant `Complex` _i_, the imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a new complex number from real and imaginary parts
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self(Complex64::new(real, imaginary))
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// Create a new complex number from a magnitude and angle in radians
    #[must_use]
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self(Complex64::from_polar(magnitude, angle))
    }

    /// Consumes self and returns the inner `Complex64`.
    #[must_use]
    pub const fn into_inner(self) -> Complex64 {
        self.0
    }

    /// Returns a reference to the inner `Complex64`.
    #[must_use]
    pub const fn as_inner(&self) -> &Complex64 {
        &self.0
    }

    /// Get the real part
    #[must_use]
    pub const fn real(self) -> f64 {
        self.0.re
    }

    /// Get the imaginary part
    #[must_use]
    pub const fn imaginary(self) -> f64 {
        self.0.im
    }

    /// Returns true if the imaginary part is zero.
    #[must_use]
    pub fn is_real(self) -> bool {
        self.0.im == 0.0
    }

    /// Returns true if the real part is zero.
    #[must_use]
    pub fn is_imaginary(self) -> bool {
        self.0.re == 0.0
    }

    /// Returns `re² + im²`.
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.0.norm_sqr()
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self(self.0.conj())
    }

    /// Get 1 / self
    #[must_use]
    pub fn recip(self) -> Self {
        Self(self.0.inv())
    }

    /// Raises this number to an integer power by repeated squaring.
    ///
    /// The bases 0, ±1 and ±i are answered in constant time.
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        match exponent.signum() {
            0 => Self::ONE,
            -1 => self.recip().powu(exponent.unsigned_abs()),
            _ => self.powu(exponent.unsigned_abs()),
        }
    }

    // Positive exponents only.
    fn powu(self, exponent: u32) -> Self {
        if self == Self::ZERO {
            return Self::ZERO;
        }
        if self == Self::ONE {
            return Self::ONE;
        }
        if self == -Self::ONE {
            return if exponent % 2 == 0 { Self::ONE } else { self };
        }
        if self == Self::I || self == -Self::I {
            let unit = match exponent % 4 {
                0 => Self::ONE,
                1 => Self::I,
                2 => -Self::ONE,
                _ => -Self::I,
            };
            return if self == Self::I || exponent % 2 == 0 {
                unit
            } else {
                -unit
            };
        }

        Self(self.0.powu(exponent))
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.real(), self.imaginary());
        if self.is_real() {
            write!(f, "{re}")
        } else if self.is_imaginary() {
            match im {
                im if im == 1.0 => write!(f, "i"),
                im if im == -1.0 => write!(f, "-i"),
                im => write!(f, "{im}i"),
            }
        } else if im < 0.0 {
            write!(f, "{re} - ")?;
            if im != -1.0 {
                write!(f, "{}", -im)?;
            }
            write!(f, "i")
        } else {
            write!(f, "{re} + ")?;
            if im != 1.0 {
                write!(f, "{im}")?;
            }
            write!(f, "i")
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Self(value)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let x = Complex::new(1.0, 2.0);
        let y = Complex::new(3.0, -1.0);

        assert_eq!(x + y, Complex::new(4.0, 1.0));
        assert_eq!(x - y, Complex::new(-2.0, 3.0));
        assert_eq!(x * y, Complex::new(5.0, 5.0));
        assert_eq!(Complex::new(5.0, 5.0) / y, x);
        assert_eq!(-x, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let q = Complex::ONE / Complex::ZERO;
        assert!(q.real().is_nan() || q.real().is_infinite());
    }

    #[test]
    fn test_recip_and_conjugate() {
        assert_eq!(Complex::new(1.0, 1.0).recip(), Complex::new(0.5, -0.5));
        assert_eq!(Complex::new(3.0, 5.0).conjugate(), Complex::new(3.0, -5.0));
    }

    #[test]
    fn test_powi() {
        assert_eq!(Complex::I.powi(2), -Complex::ONE);
        assert_eq!(Complex::I.powi(4), Complex::ONE);
        assert_eq!(Complex::I.powi(-1), -Complex::I);
        assert_eq!((-Complex::I).powi(3), Complex::I);
        assert_eq!((-Complex::ONE).powi(7), -Complex::ONE);
        assert_eq!(Complex::new(1.0, 1.0).powi(8), Complex::new(16.0, 0.0));
        assert_eq!(Complex::TWO.powi(-2), Complex::new(0.25, 0.0));
        assert_eq!(Complex::new(7.0, 3.0).powi(0), Complex::ONE);
        assert_eq!(Complex::TWO.powi(i32::MIN), Complex::ZERO);
    }

    #[test]
    fn test_wraps_num_complex() {
        let z = Complex::from(Complex64::new(1.5, -2.0));
        assert_eq!(z.real(), 1.5);
        assert_eq!(z.imaginary(), -2.0);
        assert_eq!(Complex64::from(z), Complex64::new(1.5, -2.0));
        assert_eq!(z.as_inner().norm_sqr(), z.norm_sqr());
    }

    #[test]
    fn test_predicates() {
        assert!(Complex::ZERO.is_real() && Complex::ZERO.is_imaginary());
        assert!(Complex::I.is_imaginary() && !Complex::I.is_real());
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(3.0, -5.0).to_string(), "3 - 5i");
        assert_eq!(Complex::new(1.5, 1.0).to_string(), "1.5 + i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::new(0.0, 2.5).to_string(), "2.5i");
        assert_eq!(Complex::ONE_HALF.to_string(), "0.5");
    }
}
