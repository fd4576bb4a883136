use num_bigint::BigUint;
use num_traits::One;
use std::fmt;

/// `n!`, computed once at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorial {
    n: u32,
    result: BigUint,
}

impl Factorial {
    pub fn new(n: u32) -> Self {
        let result = (1..=n).fold(BigUint::one(), |acc, i| acc * i);
        Factorial { n, result }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn result(&self) -> &BigUint {
        &self.result
    }
}

impl fmt::Display for Factorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
