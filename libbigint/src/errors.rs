//! Errors produced while building or converting a [BigInt](crate::BigInt).

use thiserror::Error;

/// Any failure of a [BigInt](crate::BigInt) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// The text is not a decimal integer.
    #[error(transparent)]
    InvalidFormat(#[from] FormatError),
    /// An argument other than a number was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    /// A narrowing conversion was asked for a value the target type cannot hold.
    #[error("{value} does not fit in {target}, whose range is [{min}, {max}]")]
    OutOfRange {
        value: String,
        target: &'static str,
        min: String,
        max: String,
    },
}

/// Why a string is not a decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("an empty string is not a number; use \"0\" for zero")]
    Empty,
    #[error("a sign must be followed by at least one digit")]
    NoDigits,
    /// `position` counts characters, not bytes.
    #[error("character '{character}' at position {position} cannot be used in a number")]
    IllegalCharacter { character: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("'{0}' is not a sign; use '+' or '-'")]
    IllegalSign(char),
    #[error("a random number needs at least one digit")]
    ZeroDigits,
}
