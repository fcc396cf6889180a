//! Arbitrary-precision signed decimal integers, plus a small command layer that applies named
//! arithmetic operators to them.
//!
//! [BigInt](crate::BigInt) is a sign-magnitude value type. Every value is kept normalized: the
//! magnitude has no leading zeros and zero is never negative. Arithmetic is schoolbook
//! arithmetic over decimal digits, exposed both as the named functions [add](crate::add),
//! [subtract](crate::subtract) and [multiply](crate::multiply) and as the usual operators.
//!
//! ```
//! use libbigint::BigInt;
//!
//! let a: BigInt = "111111111".parse().unwrap();
//! let b: BigInt = "-111111111".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "-12345678987654321");
//! ```

pub mod diagnostics;

mod errors;
pub use errors::{ArgumentError, BigIntError, FormatError};

mod bigint;
pub use bigint::{add, multiply, subtract, BigInt, DEFAULT_RANDOM_DIGITS};

mod command;
pub use command::{Command, CommandError, Operator};

mod executor;
pub use executor::{CommandExecutor, Step};
