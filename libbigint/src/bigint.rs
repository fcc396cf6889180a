use crate::errors::{ArgumentError, BigIntError, FormatError};
use num_traits::One;
use rand::Rng;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Implements a binary operator and its compound assignment for every pairing of owned and
/// borrowed operands, forwarding to a function over two borrowed values.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident => $op:ident) => {
        impl std::ops::$trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $op(self, rhs)
            }
        }

        impl std::ops::$trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $op(self, &rhs)
            }
        }

        impl std::ops::$trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $op(&self, rhs)
            }
        }

        impl std::ops::$trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $op(&self, &rhs)
            }
        }

        impl std::ops::$assign_trait<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = $op(self, rhs);
            }
        }

        impl std::ops::$assign_trait<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = $op(self, &rhs);
            }
        }
    };
}

mod add;
mod compare;
mod convert;
mod mul;
mod negate;
mod sub;
mod utils;

pub use add::add;
pub use mul::multiply;
pub use sub::subtract;

use utils::{to_char, trim_leading_zeros};

/// Number of digits [BigInt::random] callers use when they have no better choice.
pub const DEFAULT_RANDOM_DIGITS: usize = 32;

const PLUS: char = '+';
const MINUS: char = '-';

/// A signed integer of unbounded magnitude, stored as a sign and its decimal digits.
///
/// Values are always normalized: the magnitude carries no leading zeros, and zero is
/// non-negative. Equality is therefore equality of sign and digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// `true` for non-negative values.
    sign: bool,
    // digits with the MSB first, e.g. the magnitude of -120 is [1, 2, 0].
    magnitude: Vec<u8>,
}

impl BigInt {
    /// Parses an optionally signed string of decimal digits.
    ///
    /// Only the first character may be a sign (`+` or `-`); every other character must be an
    /// ASCII digit. Leading zeros are dropped, and `-0` is zero.
    pub fn from_digits(input: &str) -> Result<BigInt, BigIntError> {
        if input.is_empty() {
            return Err(FormatError::Empty.into());
        }

        let mut sign = true;
        let mut magnitude = Vec::with_capacity(input.len());
        for (position, character) in input.chars().enumerate() {
            match character {
                '0'..='9' => magnitude.push(character as u8 - b'0'),
                PLUS if position == 0 => {}
                MINUS if position == 0 => sign = false,
                _ => return Err(FormatError::IllegalCharacter { character, position }.into()),
            }
        }
        if magnitude.is_empty() {
            return Err(FormatError::NoDigits.into());
        }

        Ok(BigInt::from_magnitude(sign, magnitude))
    }

    /// Builds a normalized value from a sign and MSB-first digits, which may carry leading
    /// zeros.
    pub(crate) fn from_magnitude(sign: bool, magnitude: Vec<u8>) -> BigInt {
        let magnitude = trim_leading_zeros(magnitude);
        let is_zero = magnitude == [0];
        BigInt {
            sign: sign || is_zero,
            magnitude,
        }
    }

    /// Draws a value with exactly `digits` decimal digits and a uniformly chosen sign.
    ///
    /// The leading digit of a multi-digit value is never zero, so the digit count survives
    /// normalization. A single digit may be `0`, which is then non-negative.
    pub fn random<R: Rng>(rng: &mut R, digits: usize) -> Result<BigInt, BigIntError> {
        if digits == 0 {
            return Err(ArgumentError::ZeroDigits.into());
        }

        let mut magnitude = Vec::with_capacity(digits);
        if digits > 1 {
            magnitude.push(rng.gen_range(1..10));
        }
        while magnitude.len() < digits {
            magnitude.push(rng.gen_range(0..10));
        }

        Ok(BigInt::from_magnitude(rng.gen_bool(0.5), magnitude))
    }

    /// Replaces this value with the one parsed from `input`. On error the value is unchanged.
    pub fn set_value(&mut self, input: &str) -> Result<(), BigIntError> {
        *self = BigInt::from_digits(input)?;
        Ok(())
    }

    /// Sets the sign; `true` is non-negative. Zero stays non-negative.
    pub fn set_sign(&mut self, sign: bool) {
        self.sign = sign || self.is_zero();
    }

    /// Sets the sign from a `+` or `-` character.
    pub fn set_sign_char(&mut self, sign: char) -> Result<(), BigIntError> {
        match sign {
            PLUS => self.set_sign(true),
            MINUS => self.set_sign(false),
            _ => return Err(ArgumentError::IllegalSign(sign).into()),
        }
        Ok(())
    }

    pub fn make_positive(&mut self) -> &mut Self {
        self.set_sign(true);
        self
    }

    pub fn make_negative(&mut self) -> &mut Self {
        self.set_sign(false);
        self
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: true,
            magnitude: self.magnitude.clone(),
        }
    }

    /// `true` for non-negative values.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Zero counts as positive.
    pub fn is_positive(&self) -> bool {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == [0]
    }

    /// Number of decimal digits, not counting the sign.
    pub fn digit_count(&self) -> usize {
        self.magnitude.len()
    }

    /// Adds one in place and returns the new value.
    pub fn increment(&mut self) -> &mut Self {
        *self = add(self, &BigInt::one());
        self
    }

    /// Adds one in place and returns the value held before.
    pub fn post_increment(&mut self) -> BigInt {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtracts one in place and returns the new value.
    pub fn decrement(&mut self) -> &mut Self {
        *self = subtract(self, &BigInt::one());
        self
    }

    /// Subtracts one in place and returns the value held before.
    pub fn post_decrement(&mut self) -> BigInt {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt {
            sign: true,
            magnitude: vec![0],
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        BigInt::from_digits(input)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        BigInt::from_digits(input)
    }
}

impl TryFrom<String> for BigInt {
    type Error = BigIntError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        BigInt::from_digits(&input)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = String::with_capacity(self.magnitude.len() + 1);
        if self.is_negative() {
            result.push(MINUS);
        }
        result.extend(self.magnitude.iter().map(|&digit| to_char(digit)));
        f.pad(&result)
    }
}
