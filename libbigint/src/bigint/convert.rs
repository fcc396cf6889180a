use super::{BigInt, MINUS};
use crate::errors::BigIntError;
use num_traits::{Bounded, One, ToPrimitive, Zero};
use std::str::FromStr;

macro_rules! impl_from_integer {
    ($($int:ty)*) => {$(
        impl From<$int> for BigInt {
            fn from(n: $int) -> Self {
                let rendered = n.to_string();
                let (sign, digits) = match rendered.strip_prefix(MINUS) {
                    Some(digits) => (false, digits),
                    None => (true, rendered.as_str()),
                };
                BigInt::from_magnitude(sign, digits.bytes().map(|b| b - b'0').collect())
            }
        }
    )*};
}

impl_from_integer! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

impl BigInt {
    /// Converts to a fixed-width integer, failing with
    /// [OutOfRange](crate::BigIntError::OutOfRange) when the value lies outside
    /// `[T::min_value(), T::max_value()]`.
    ///
    /// ```
    /// use libbigint::BigInt;
    ///
    /// let small: BigInt = "-128".parse().unwrap();
    /// assert_eq!(small.get_value::<i8>(), Ok(-128));
    /// assert!(small.get_value::<u8>().is_err());
    /// ```
    pub fn get_value<T>(&self) -> Result<T, BigIntError>
    where
        T: Bounded + FromStr,
        BigInt: From<T>,
    {
        let min = BigInt::from(T::min_value());
        let max = BigInt::from(T::max_value());
        let out_of_range = || BigIntError::OutOfRange {
            value: self.to_string(),
            target: std::any::type_name::<T>(),
            min: min.to_string(),
            max: max.to_string(),
        };

        if *self < min || *self > max {
            return Err(out_of_range());
        }
        self.to_string().parse().map_err(|_| out_of_range())
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude == [0]
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt {
            sign: true,
            magnitude: vec![1],
        }
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.get_value().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.get_value().ok()
    }

    fn to_i128(&self) -> Option<i128> {
        self.get_value().ok()
    }

    fn to_u128(&self) -> Option<u128> {
        self.get_value().ok()
    }
}
