use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

use crate::error::{MathError, Result};

/// Exact fraction, kept reduced with a positive denominator.
#[derive(Debug, Clone)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let (num, den) = (num.into(), den.into());
        if den.is_zero() {
            return Err(MathError::invalid("Denominator cannot be zero"));
        }
        Ok(Self::reduced(num, den))
    }

    pub fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split('/');
        let num = parts
            .next()
            .ok_or_else(|| MathError::invalid("No number"))?;
        let den = parts.next().unwrap_or("1");
        if parts.next().is_some() {
            return Err(MathError::invalid(format!("Invalid fraction: {s}")));
        }

        let parse = |part: &str| {
            BigInt::parse_bytes(part.trim().as_bytes(), 10)
                .ok_or_else(|| MathError::invalid(format!("Invalid number: {part}")))
        };
        Rational::new(parse(num)?, parse(den)?)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    // `den` must be non zero
    fn reduced(num: BigInt, den: BigInt) -> Self {
        let g = num.gcd(&den);
        let (num, den) = (num / &g, den / &g);
        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Rational {
        Rational {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        if self.den == rhs.den {
            return Rational::reduced(self.num + rhs.num, self.den);
        }

        Rational::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::reduced(self.num * rhs.num, self.den * rhs.den)
    }
}

/// Panics when dividing by zero, like integer division.
impl ops::Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        assert!(!rhs.num.is_zero(), "Division by zero");
        Rational::reduced(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl One for Rational {
    fn one() -> Rational {
        Rational::from(1)
    }
}

impl Zero for Rational {
    fn zero() -> Rational {
        Rational::from(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Rational> for Rational {
    fn eq(&self, rhs: &Rational) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Rational> for Rational {
    fn partial_cmp(&self, rhs: &Rational) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Rational {}
impl Ord for Rational {
    fn cmp(&self, rhs: &Rational) -> Ordering {
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Rational> for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
