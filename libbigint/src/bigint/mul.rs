use super::utils::{add_magnitudes, cmp_magnitudes};
use super::BigInt;
use std::cmp::Ordering;

/// Returns `lhs * rhs` by schoolbook long multiplication.
///
/// The operand with the larger magnitude is the multiplicand. Each digit of the multiplier,
/// least significant first, yields a partial product shifted by the digit's position, and the
/// partial products are summed into a running total.
pub fn multiply(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.is_zero() || rhs.is_zero() {
        return BigInt::default();
    }

    let (multiplicand, multiplier) = match cmp_magnitudes(&lhs.magnitude, &rhs.magnitude) {
        Ordering::Less => (&rhs.magnitude, &lhs.magnitude),
        _ => (&lhs.magnitude, &rhs.magnitude),
    };

    let mut total = vec![0];
    for (shift, &digit) in multiplier.iter().rev().enumerate() {
        if digit == 0 {
            continue;
        }
        total = add_magnitudes(&total, &partial_product(multiplicand, digit, shift));
    }

    BigInt::from_magnitude(lhs.sign == rhs.sign, total)
}

/// `multiplicand * digit * 10^shift`, MSB first. May carry one leading zero.
fn partial_product(multiplicand: &[u8], digit: u8, shift: usize) -> Vec<u8> {
    let mut partial = Vec::with_capacity(multiplicand.len() + 1 + shift);
    let mut carry = 0;
    // built LSB first, reversed below
    for &multiplicand_digit in multiplicand.iter().rev() {
        let product = multiplicand_digit * digit + carry;
        partial.push(product % 10);
        carry = product / 10;
    }
    partial.push(carry);
    partial.reverse();
    partial.resize(partial.len() + shift, 0);
    partial
}

forward_binop!(Mul, mul, MulAssign, mul_assign => multiply);
