use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;

use crate::numbers::complex::{fmt_real, Complex};

/// A matrix cell: either a plain real or a complex number.
///
/// Every operator dispatches on the pair of variants. Two reals use `f64`
/// arithmetic; as soon as one side is complex the other side is promoted and
/// the result is complex. Equality compares values after promotion, so
/// `Real(2)` equals `Complex(2+0i)`.
#[derive(Debug, Clone, Copy)]
pub enum Element {
    Real(f64),
    Complex(Complex),
}

use self::Element::{Complex as Cplx, Real};

impl Element {
    pub fn is_complex(&self) -> bool {
        matches!(self, Cplx(_))
    }

    pub fn re(&self) -> f64 {
        match self {
            Real(x) => *x,
            Cplx(z) => z.re(),
        }
    }

    pub fn im(&self) -> f64 {
        match self {
            Real(_) => 0.0,
            Cplx(z) => z.im(),
        }
    }

    /// The element as a complex number, promoting a real.
    pub fn to_complex(&self) -> Complex {
        match self {
            Real(x) => Complex::from(*x),
            Cplx(z) => *z,
        }
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Element {
        Real(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Element {
        Real(value as f64)
    }
}

impl From<Complex> for Element {
    fn from(value: Complex) -> Element {
        Cplx(value)
    }
}

impl ops::Add for Element {
    type Output = Element;

    fn add(self, rhs: Element) -> Element {
        match (self, rhs) {
            (Real(a), Real(b)) => Real(a + b),
            (Cplx(z), Real(x)) | (Real(x), Cplx(z)) => Cplx(z + x),
            (Cplx(a), Cplx(b)) => Cplx(a + b),
        }
    }
}

impl ops::Sub for Element {
    type Output = Element;

    fn sub(self, rhs: Element) -> Element {
        match (self, rhs) {
            (Real(a), Real(b)) => Real(a - b),
            (Cplx(z), Real(x)) => Cplx(z - x),
            (Real(x), Cplx(z)) => Cplx(Complex::from(x) - z),
            (Cplx(a), Cplx(b)) => Cplx(a - b),
        }
    }
}

impl ops::Mul for Element {
    type Output = Element;

    fn mul(self, rhs: Element) -> Element {
        match (self, rhs) {
            (Real(a), Real(b)) => Real(a * b),
            (Cplx(z), Real(x)) | (Real(x), Cplx(z)) => Cplx(z * x),
            (Cplx(a), Cplx(b)) => Cplx(a * b),
        }
    }
}

impl ops::Div for Element {
    type Output = Element;

    fn div(self, rhs: Element) -> Element {
        match (self, rhs) {
            (Real(a), Real(b)) => Real(a / b),
            (Cplx(z), Real(x)) => Cplx(z / x),
            (Real(x), Cplx(z)) => Cplx(Complex::from(x) / z),
            (Cplx(a), Cplx(b)) => Cplx(a / b),
        }
    }
}

impl ops::Neg for Element {
    type Output = Element;

    fn neg(self) -> Element {
        match self {
            Real(x) => Real(-x),
            Cplx(z) => Cplx(-z),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, rhs: &Element) -> bool {
        match (self, rhs) {
            (Real(a), Real(b)) => a == b,
            _ => self.to_complex() == rhs.to_complex(),
        }
    }
}

impl PartialEq<f64> for Element {
    fn eq(&self, rhs: &f64) -> bool {
        *self == Real(*rhs)
    }
}

impl Zero for Element {
    fn zero() -> Element {
        Real(0.0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Real(x) => *x == 0.0,
            Cplx(z) => z.is_zero(),
        }
    }
}

impl One for Element {
    fn one() -> Element {
        Real(1.0)
    }
}

impl std::iter::Sum<Element> for Element {
    fn sum<I: Iterator<Item = Element>>(iter: I) -> Element {
        iter.fold(Element::zero(), |acc, x| acc + x)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real(x) => fmt_real(f, *x),
            Cplx(z) => z.fmt(f),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
