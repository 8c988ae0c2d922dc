//! Arbitrary precision rational numbers.
//!
//! A [`Rational`] is a fraction of two [`Integer`]s that is *not* kept in
//! lowest terms. Addition, subtraction, multiplication and division build
//! the textbook cross products and leave any common factor in place;
//! [`Rational::reduce`] is the explicit step that produces the canonical
//! form. Equality, ordering and hashing all work on the value, so `2/4`
//! and `1/2` are equal and hash alike.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

use crate::{ArithmeticError, Integer};

/// An arbitrary precision rational number.
///
/// The denominator is never zero. Either component may carry the sign; the
/// sign of the value is the product of both component signs.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(Integer, Integer)", into = "(Integer, Integer)")
)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The fraction is stored as given, without reduction.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidConstruction`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::InvalidConstruction(
                "rational numbers must not have a denominator of zero".into(),
            ));
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    // Callers guarantee a non-zero denominator.
    fn from_parts(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self::from_parts(n, Integer::one())
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidConstruction`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from two decimal integer literals.
    ///
    /// `Rational::from_str_parts("7", "10")` is the fraction 7/10.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidConstruction`] if either literal is
    /// not an integer or the denominator is zero.
    pub fn from_str_parts(numerator: &str, denominator: &str) -> Result<Self, ArithmeticError> {
        Self::new(numerator.parse()?, denominator.parse()?)
    }

    /// Creates the rational with the exact value of the shortest decimal
    /// string that round-trips to `value`.
    ///
    /// The float is rendered with Rust's `Display`, which never switches to
    /// exponent notation. With `k` digits after the point the result is the
    /// digit string over `10^k`, so `0.33` becomes `33/100`. Extreme
    /// magnitudes yield long digit strings: `1e-300` has a denominator of
    /// `10^300`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidConstruction`] for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self, ArithmeticError> {
        if !value.is_finite() {
            return Err(ArithmeticError::InvalidConstruction(format!(
                "{value} is not a finite number"
            )));
        }

        let rendered = value.to_string();
        let (integer_digits, fraction_digits) =
            rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        trace!(value, fraction_digits = fraction_digits.len(), "decomposing float");

        let numerator: Integer = format!("{integer_digits}{fraction_digits}").parse()?;
        Ok(Self::from_parts(
            numerator,
            Integer::power_of_ten(fraction_digits.len()),
        ))
    }

    /// The constant 2.
    #[must_use]
    pub fn two() -> Self {
        Self::from(2)
    }

    /// The constant 10.
    #[must_use]
    pub fn ten() -> Self {
        Self::from(10)
    }

    /// The constant 1/2.
    #[must_use]
    pub fn one_half() -> Self {
        Self::from_parts(Integer::one(), Integer::new(2))
    }

    /// The constant 1/10.
    #[must_use]
    pub fn one_tenth() -> Self {
        Self::from_parts(Integer::one(), Integer::new(10))
    }

    /// Returns the stored numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the stored denominator.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Splits the rational into its stored numerator and denominator.
    #[must_use]
    pub fn into_parts(self) -> (Integer, Integer) {
        (self.numerator, self.denominator)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum() * self.denominator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if this rational has an integer value.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Returns the canonical form: lowest terms with a positive denominator.
    ///
    /// `(-4)/(-2)` reduces to `2/1` and `3/(-6)` to `-1/2`.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        let magnitude = self.numerator.abs() / &gcd;
        let numerator = if self.is_negative() {
            -magnitude
        } else {
            magnitude
        };
        Self::from_parts(numerator, self.denominator.abs() / &gcd)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the reciprocal (1/x) by swapping numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::from_parts(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Divides by `divisor`, returning `(a*d)/(b*c)` unreduced.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::from_parts(
            &self.numerator * &divisor.denominator,
            &self.denominator * &divisor.numerator,
        ))
    }

    /// Raises this rational to an integer power.
    ///
    /// Uses exponentiation by squaring, so the cost is O(log |exponent|)
    /// multiplications. The exponent 0 and the bases 0, 1 and -1 are
    /// answered in constant time. A negative exponent inverts first. The
    /// result is never reduced.
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
        if self.is_one() {
            trace!("unit base");
            return Ok(Self::one());
        }
        if *self == -Self::one() {
            trace!("negative unit base");
            return Ok(if exponent.is_even() {
                Self::one()
            } else {
                -Self::one()
            });
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

    /// Raises this rational to an `i64` power. See [`Rational::pow`].
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when zero is raised to a
    /// negative power.
    pub fn powi(&self, exponent: i64) -> Result<Self, ArithmeticError> {
        self.pow(&Integer::new(exponent))
    }

    /// Converts to an integer if the value is integral.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonIntegral`] otherwise.
    pub fn to_integer(&self) -> Result<Integer, ArithmeticError> {
        if self.is_integer() {
            Ok(self.trunc())
        } else {
            Err(ArithmeticError::NonIntegral(self.to_string()))
        }
    }

    /// Rounds toward zero, like a float-to-int cast.
    #[must_use]
    pub fn trunc(&self) -> Integer {
        &self.numerator / &self.denominator
    }

    /// Truncates toward zero and converts to an i64.
    ///
    /// Returns `None` if the truncated value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    /// Returns the nearest `f64`.
    ///
    /// The quotient is formed with 62 to 63 significant bits before a single
    /// rounding to `f64`, so values in the normal range are within one ulp.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let numerator = self.numerator.abs();
        let denominator = self.denominator.abs();
        let shift = numerator.bit_len() as i64 - denominator.bit_len() as i64 - 62;

        let quotient = if shift >= 0 {
            numerator / (denominator << shift as usize)
        } else {
            (numerator << shift.unsigned_abs() as usize) / denominator
        };
        let mantissa = quotient.to_i64().map_or(i64::MAX as f64, |q| q as f64);

        let shift = shift.clamp(-4000, 4000) as i32;
        let half = shift / 2;
        let magnitude = mantissa * 2f64.powi(half) * 2f64.powi(shift - half);

        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Compares by the sign of `self - other`, computed from cross products.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        let sign = (lhs - rhs).signum() * self.denominator.signum() * other.denominator.signum();
        sign.cmp(&0)
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator.is_zero() {
            return write!(f, "0");
        }

        let (numerator, denominator) = if self.denominator.is_negative() {
            (-&self.numerator, -&self.denominator)
        } else {
            (self.numerator.clone(), self.denominator.clone())
        };

        if denominator.is_one() {
            write!(f, "{numerator}")
        } else {
            write!(f, "{numerator}/{denominator}")
        }
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::from_parts(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::from_parts(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::from_parts(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.numerator, self.denominator)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational::from_parts(-&self.numerator, self.denominator.clone())
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

impl TryFrom<f64> for Rational {
    type Error = ArithmeticError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<(Integer, Integer)> for Rational {
    type Error = ArithmeticError;

    fn try_from((numerator, denominator): (Integer, Integer)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<Rational> for (Integer, Integer) {
    fn from(r: Rational) -> Self {
        r.into_parts()
    }
}
