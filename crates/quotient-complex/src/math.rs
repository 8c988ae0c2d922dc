//! Transcendental functions on approximate complex numbers.
//!
//! The evaluation is done by `num-complex` on principal branches, with
//! arg in (-π, π]. This module adds the exact fast paths and turns the
//! points outside a function's domain into a [`DomainError`]:
//!
//! - ln(0) and z^w for a zero base with Re w ≤ 0,
//! - log to base 1,
//! - the poles of tan, tanh and atan.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{Complex, DomainError};

// Past this |Re z|, tanh(z) is ±1 to f64 precision and cosh(2·Re z)
// overflows.
const TANH_SATURATION: f64 = 20.0;

/// Raises `base` to a complex power.
///
/// # Errors
///
/// Returns [`DomainError::LogOfZero`] for a zero base unless the exponent
/// has a positive real part.
pub fn pow(base: Complex, exponent: Complex) -> Result<Complex, DomainError> {
    if exponent == Complex::ZERO || base == Complex::ONE {
        return Ok(Complex::ONE);
    }
    if base == Complex::E {
        return Ok(exp(exponent));
    }
    if base == Complex::ZERO {
        return if exponent.real() > 0.0 {
            Ok(Complex::ZERO)
        } else {
            Err(DomainError::LogOfZero)
        };
    }

    Ok(base.as_inner().powc(exponent.into_inner()).into())
}

/// The principal square root.
///
/// Real arguments stay on the axes: `sqrt(-4) = 2i`.
#[must_use]
pub fn sqrt(z: Complex) -> Complex {
    if z.is_real() {
        return if z.real() >= 0.0 {
            Complex::from_real(z.real().sqrt())
        } else {
            Complex::new(0.0, (-z.real()).sqrt())
        };
    }

    principal_root(2, z)
}

/// The principal cube root.
#[must_use]
pub fn cbrt(z: Complex) -> Complex {
    principal_root(3, z)
}

/// The principal `n`th root. The root of zero is zero.
///
/// # Errors
///
/// Returns [`DomainError::ZerothRoot`] if `n` is zero.
pub fn nth_root(n: u32, z: Complex) -> Result<Complex, DomainError> {
    match n {
        0 => Err(DomainError::ZerothRoot),
        2 => Ok(sqrt(z)),
        _ => Ok(principal_root(n, z)),
    }
}

fn principal_root(n: u32, z: Complex) -> Complex {
    if z == Complex::ZERO {
        return Complex::ZERO;
    }
    let z = z.into_inner();
    let root = match n {
        2 => z.sqrt(),
        3 => z.cbrt(),
        _ => z.powf(f64::from(n).recip()),
    };
    root.into()
}

/// The complex exponential.
///
/// Purely imaginary arguments go through Euler's formula, which is exact
/// at multiples of π/2.
#[must_use]
pub fn exp(z: Complex) -> Complex {
    if z == Complex::ZERO {
        return Complex::ONE;
    }
    if z == Complex::ONE {
        return Complex::E;
    }
    if z.is_imaginary() {
        return euler(z.imaginary());
    }

    z.as_inner().exp().into()
}

// e^(ix)
fn euler(x: f64) -> Complex {
    let turn = x % TAU;
    if turn == 0.0 {
        Complex::ONE
    } else if turn == FRAC_PI_2 {
        Complex::I
    } else if turn == PI {
        -Complex::ONE
    } else if turn == 1.5 * PI {
        -Complex::I
    } else {
        Complex::new(x.cos(), x.sin())
    }
}

/// The principal natural logarithm.
///
/// # Errors
///
/// Returns [`DomainError::LogOfZero`] if `z` is zero.
pub fn ln(z: Complex) -> Result<Complex, DomainError> {
    if z == Complex::ZERO {
        return Err(DomainError::LogOfZero);
    }
    Ok(z.as_inner().ln().into())
}

/// The logarithm of `z` to a complex `base`.
///
/// # Errors
///
/// Returns [`DomainError::LogBaseOne`] if `base` is one, and
/// [`DomainError::LogOfZero`] if `base` or `z` is zero.
pub fn log(base: Complex, z: Complex) -> Result<Complex, DomainError> {
    if base == Complex::ONE {
        return Err(DomainError::LogBaseOne);
    }
    Ok(ln(z)? / ln(base)?)
}

/// The magnitude |z|.
#[must_use]
pub fn abs(z: Complex) -> f64 {
    z.as_inner().norm()
}

/// The argument of `z` in (-π, π].
#[must_use]
pub fn arg(z: Complex) -> f64 {
    z.as_inner().arg()
}

/// The complex sine.
#[must_use]
pub fn sin(z: Complex) -> Complex {
    z.as_inner().sin().into()
}

/// The complex cosine.
#[must_use]
pub fn cos(z: Complex) -> Complex {
    z.as_inner().cos().into()
}

/// The complex tangent, evaluated as `-i·tanh(iz)`.
///
/// # Errors
///
/// Returns [`DomainError::Pole`] where `cos 2x + cosh 2y` vanishes.
pub fn tan(z: Complex) -> Result<Complex, DomainError> {
    hyperbolic_tangent(Complex::I * z)
        .map(|t| -Complex::I * t)
        .ok_or_else(|| DomainError::Pole(format!("tan({z})")))
}

/// The principal arcsine.
#[must_use]
pub fn asin(z: Complex) -> Complex {
    z.as_inner().asin().into()
}

/// The principal arccosine.
#[must_use]
pub fn acos(z: Complex) -> Complex {
    z.as_inner().acos().into()
}

/// The principal arctangent.
///
/// # Errors
///
/// Returns [`DomainError::Pole`] at `±i`.
pub fn atan(z: Complex) -> Result<Complex, DomainError> {
    if z == Complex::I || z == -Complex::I {
        return Err(DomainError::Pole(format!("atan({z})")));
    }
    Ok(z.as_inner().atan().into())
}

/// The complex hyperbolic sine.
#[must_use]
pub fn sinh(z: Complex) -> Complex {
    z.as_inner().sinh().into()
}

/// The complex hyperbolic cosine.
#[must_use]
pub fn cosh(z: Complex) -> Complex {
    z.as_inner().cosh().into()
}

/// The complex hyperbolic tangent, `(sinh 2x + i sin 2y) / (cosh 2x + cos 2y)`.
///
/// For large |x| the value saturates to `±1` instead of overflowing.
///
/// # Errors
///
/// Returns [`DomainError::Pole`] where the denominator vanishes.
pub fn tanh(z: Complex) -> Result<Complex, DomainError> {
    hyperbolic_tangent(z).ok_or_else(|| DomainError::Pole(format!("tanh({z})")))
}

// None at a pole.
fn hyperbolic_tangent(z: Complex) -> Option<Complex> {
    let (x, y) = (z.real(), z.imaginary());
    if x.abs() > TANH_SATURATION {
        // Im tanh(z) ~ 2·sin 2y·e^(-2|x|)
        let imaginary = 4.0 * y.sin() * y.cos() * (-2.0 * x.abs()).exp();
        return Some(Complex::new(x.signum(), imaginary));
    }
    if (2.0 * x).cosh() + (2.0 * y).cos() == 0.0 {
        return None;
    }
    Some(z.as_inner().tanh().into())
}
