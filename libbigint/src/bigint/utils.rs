//! Digit-level helpers shared by the arithmetic modules. Magnitudes are MSB-first slices of
//! decimal digits; only [trim_leading_zeros] guarantees a normalized result.

use std::cmp::Ordering;

pub fn to_char(digit: u8) -> char {
    (b'0' + digit) as char
}

/// Drops leading zeros, keeping a single `0` for a zero magnitude.
pub fn trim_leading_zeros(mut digits: Vec<u8>) -> Vec<u8> {
    let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
    if zeros == digits.len() {
        digits.clear();
        digits.push(0);
    } else {
        digits.drain(..zeros);
    }
    digits
}

/// Compares two normalized magnitudes: the longer one is larger, and equally long ones compare
/// digit by digit from the MSB.
pub fn cmp_magnitudes(lhs: &[u8], rhs: &[u8]) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

/// Adds two magnitudes right-aligned, propagating the carry from the least significant digit.
pub fn add_magnitudes(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
    // make `longer` the operand that drives the loop
    let (longer, shorter) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let padding = longer.len() - shorter.len();

    // one extra slot in front for a final carry
    let mut result = vec![0; longer.len() + 1];
    let mut carry: u8 = 0;
    for i in (0..longer.len()).rev() {
        let addend = if i >= padding { shorter[i - padding] } else { 0 };
        let sum = longer[i] + addend + carry;
        carry = sum / 10;
        result[i + 1] = sum % 10;
    }
    result[0] = carry;

    trim_leading_zeros(result)
}

/// Subtracts `subtrahend` from `minuend` right-aligned, borrowing from the next more
/// significant digit whenever a digit difference drops below zero.
///
/// `minuend` must not be smaller than `subtrahend`.
pub fn sub_magnitudes(minuend: &[u8], subtrahend: &[u8]) -> Vec<u8> {
    debug_assert_ne!(cmp_magnitudes(minuend, subtrahend), Ordering::Less);

    let padding = minuend.len() - subtrahend.len();
    let mut result = vec![0; minuend.len()];
    let mut borrow: i8 = 0;
    for i in (0..minuend.len()).rev() {
        let subtrahend_digit = if i >= padding {
            subtrahend[i - padding] as i8
        } else {
            0
        };
        let mut difference = minuend[i] as i8 - subtrahend_digit - borrow;
        borrow = (difference < 0) as i8;
        difference += borrow * 10;
        result[i] = difference as u8;
    }

    trim_leading_zeros(result)
}
