use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{MathError, Result};
use crate::numbers::complex::Complex;

/// Closed-open interval `[min, max)` a random part is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    fn new(min: f64, max: f64) -> Result<Range> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MathError::invalid("Min and max values must be valid numbers"));
        }
        if min >= max {
            return Err(MathError::invalid("Max value must be greater than min value"));
        }
        Ok(Range { min, max })
    }
}

/// Random complex numbers with parts drawn from configured ranges.
///
/// Ranges are given either for the algebraic form (`r`, `i`) or for the
/// polar form (`rho`, `theta`), never both: switching form requires a
/// `reset`. A part without a range is zero (`theta` included).
///
///     use rust_math::random_complex::RandomComplex;
///
///     let mut rc = RandomComplex::new();
///     rc.r(2.0, 6.5)?.i(-2.0, 5.0)?;
///     let z = rc.get()?;
///     assert!(z.re() >= 2.0 && z.re() < 6.5);
///     # Ok::<(), rust_math::error::MathError>(())
#[derive(Debug, Clone)]
pub struct RandomComplex<R: Rng = ThreadRng> {
    rng: R,
    rho: Option<Range>,
    theta: Option<Range>,
    r: Option<Range>,
    i: Option<Range>,
}

impl RandomComplex<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomComplex<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomComplex<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomComplex {
            rng,
            rho: None,
            theta: None,
            r: None,
            i: None,
        }
    }

    fn is_algebraic(&self) -> bool {
        self.r.is_some() || self.i.is_some()
    }

    fn is_polar(&self) -> bool {
        self.rho.is_some() || self.theta.is_some()
    }

    pub fn rho(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        let range = Range::new(min, max)?;
        if min < 0.0 {
            return Err(MathError::invalid("Rho value must be a positive number"));
        }
        if self.is_algebraic() {
            return Err(MathError::runtime(
                "Cannot set rho range: algebraic form is in use",
            ));
        }
        self.rho = Some(range);
        Ok(self)
    }

    pub fn theta(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        let range = Range::new(min, max)?;
        if self.is_algebraic() {
            return Err(MathError::runtime(
                "Cannot set theta range: algebraic form is in use",
            ));
        }
        self.theta = Some(range);
        Ok(self)
    }

    pub fn r(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        let range = Range::new(min, max)?;
        if self.is_polar() {
            return Err(MathError::runtime(
                "Cannot set real part range: polar form is in use",
            ));
        }
        self.r = Some(range);
        Ok(self)
    }

    pub fn i(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        let range = Range::new(min, max)?;
        if self.is_polar() {
            return Err(MathError::runtime(
                "Cannot set imaginary part range: polar form is in use",
            ));
        }
        self.i = Some(range);
        Ok(self)
    }

    pub fn rho_range(&self) -> Option<Range> {
        self.rho
    }

    pub fn theta_range(&self) -> Option<Range> {
        self.theta
    }

    pub fn r_range(&self) -> Option<Range> {
        self.r
    }

    pub fn i_range(&self) -> Option<Range> {
        self.i
    }

    fn sample(&mut self, range: Option<Range>) -> f64 {
        match range {
            Some(Range { min, max }) => self.rng.gen_range(min..max),
            None => 0.0,
        }
    }

    pub fn get(&mut self) -> Result<Complex> {
        if self.is_algebraic() {
            let re = self.sample(self.r);
            let im = self.sample(self.i);
            return Ok(Complex::new(re, im));
        }
        if self.is_polar() {
            let rho = self.sample(self.rho);
            let theta = self.sample(self.theta);
            return Complex::from_polar(rho, theta);
        }
        Err(MathError::runtime("No range defined to draw a complex number"))
    }

    pub fn get_many(&mut self, n: usize) -> Result<Vec<Complex>> {
        if n < 2 {
            return Err(MathError::invalid("You must take 2 or more items"));
        }
        (0..n).map(|_| self.get()).collect()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.rho = None;
        self.theta = None;
        self.r = None;
        self.i = None;
        self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
