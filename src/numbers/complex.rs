use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;

use crate::error::{MathError, Result};

/// Polar coordinates a complex number was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Polar {
    rho: f64,
    theta: f64,
}

/// Complex number `a+bi`.
///
/// A number built from polar coordinates keeps its exact `rho` and `theta`:
/// `norm()` and `argument()` return them and `Display` uses the trigonometric
/// form. Its algebraic parts are rounded to a fixed number of decimals, so
/// that `from_polar(1, π/2)` really is `i`. Any arithmetic result is algebraic.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    re: f64,
    im: f64,
    polar: Option<Polar>,
}

impl Complex {
    /// Decimals kept on the algebraic parts of a polar-built number.
    pub const DEFAULT_PRECISION: i32 = 5;

    pub const fn new(re: f64, im: f64) -> Self {
        Complex {
            re,
            im,
            polar: None,
        }
    }

    pub fn from_polar(rho: f64, theta: f64) -> Result<Self> {
        Self::from_polar_with_precision(rho, theta, Self::DEFAULT_PRECISION)
    }

    pub fn from_polar_with_precision(rho: f64, theta: f64, precision: i32) -> Result<Self> {
        if !rho.is_finite() || !theta.is_finite() {
            return Err(MathError::invalid("Rho and theta must be finite numbers"));
        }
        if rho < 0.0 {
            return Err(MathError::invalid("Rho must be positive or null"));
        }

        Ok(Complex {
            re: round_to(rho * theta.cos(), precision),
            im: round_to(rho * theta.sin(), precision),
            polar: Some(Polar { rho, theta }),
        })
    }

    #[inline(always)]
    pub fn re(&self) -> f64 {
        self.re
    }

    #[inline(always)]
    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn norm(&self) -> f64 {
        match self.polar {
            Some(polar) => polar.rho,
            None => self.re.hypot(self.im),
        }
    }

    pub fn modulus(&self) -> f64 {
        self.norm()
    }

    pub fn argument(&self) -> f64 {
        match self.polar {
            Some(polar) => polar.theta,
            None => self.im.atan2(self.re),
        }
    }

    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    pub fn negative(&self) -> Complex {
        Complex::new(-self.re, -self.im)
    }

    /// Compares the algebraic parts, promoting a real operand first.
    pub fn equal(&self, rhs: impl Into<Complex>) -> bool {
        *self == rhs.into()
    }

    pub fn checked_div(self, rhs: impl Into<Complex>) -> Result<Complex> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            return Err(MathError::runtime("Division by zero"));
        }
        Ok(self / rhs)
    }
}

fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    let rounded = (value * factor).round() / factor;
    // no negative zero out of a rounding
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Writes a real the way matrices and complex numbers print it: `2`, `2.5`,
/// never `-0`.
pub(crate) fn fmt_real(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        return write!(f, "0");
    }
    write!(f, "{}", value)
}

struct Real(f64);

impl Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_real(f, self.0)
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Complex {
        Complex::new(value, 0.0)
    }
}

impl PartialEq for Complex {
    fn eq(&self, rhs: &Complex) -> bool {
        self.re == rhs.re && self.im == rhs.im
    }
}

impl PartialEq<f64> for Complex {
    fn eq(&self, rhs: &f64) -> bool {
        self.re == *rhs && self.im == 0.0
    }
}

impl ops::Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl ops::Add<f64> for Complex {
    type Output = Complex;

    fn add(self, rhs: f64) -> Complex {
        self + Complex::from(rhs)
    }
}

impl ops::Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        self + rhs.negative()
    }
}

impl ops::Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, rhs: f64) -> Complex {
        self - Complex::from(rhs)
    }
}

impl ops::Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + rhs.re * self.im,
        )
    }
}

impl ops::Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Complex {
        self * Complex::from(rhs)
    }
}

impl ops::Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let den = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / den,
            (self.im * rhs.re - self.re * rhs.im) / den,
        )
    }
}

impl ops::Div<f64> for Complex {
    type Output = Complex;

    fn div(self, rhs: f64) -> Complex {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

impl ops::Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negative()
    }
}

impl Zero for Complex {
    fn zero() -> Complex {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Complex {
        Complex::new(1.0, 0.0)
    }
}

impl std::iter::Sum<Complex> for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::zero(), |acc, z| acc + z)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(polar) = self.polar {
            if polar.rho == 0.0 {
                return write!(f, "0");
            }
            if polar.rho == 1.0 {
                return write!(f, "cos {0:.6} + i⋅sin {0:.6}", polar.theta);
            }
            return write!(f, "{:.6}(cos {1:.6} + i⋅sin {1:.6})", polar.rho, polar.theta);
        }

        if self.im == 0.0 {
            return fmt_real(f, self.re);
        }

        if self.re == 0.0 {
            if self.im.abs() == 1.0 {
                return write!(f, "{}i", if self.im < 0.0 { "-" } else { "" });
            }
            return write!(f, "{}i", Real(self.im));
        }

        let sign = if self.im > 0.0 { '+' } else { '-' };
        write!(f, "{}{}", Real(self.re), sign)?;
        if self.im.abs() == 1.0 {
            write!(f, "i")
        } else {
            write!(f, "{}i", Real(self.im.abs()))
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
