use super::BigInt;
use std::ops;

impl BigInt {
    /// Returns a new value with the opposite sign. Zero negates to zero.
    pub fn negate(&self) -> BigInt {
        BigInt::from_magnitude(!self.sign, self.magnitude.clone())
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_magnitude(!self.sign, self.magnitude)
    }
}

impl ops::Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}
