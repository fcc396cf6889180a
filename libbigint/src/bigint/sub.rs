use super::add::add;
use super::utils::{cmp_magnitudes, sub_magnitudes};
use super::BigInt;
use std::cmp::Ordering;

/// Returns `lhs - rhs`.
///
/// Digit-wise subtraction only ever runs on two positive values with the larger one first;
/// the other sign combinations are reduced to additions or to a negated subtraction.
pub fn subtract(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if rhs.is_zero() {
        return lhs.clone();
    }
    if lhs.is_zero() {
        return -rhs;
    }

    match (lhs.is_positive(), rhs.is_positive()) {
        (true, true) => match cmp_magnitudes(&lhs.magnitude, &rhs.magnitude) {
            // 5 - 10 = -(10 - 5)
            Ordering::Less => {
                BigInt::from_magnitude(false, sub_magnitudes(&rhs.magnitude, &lhs.magnitude))
            }
            _ => BigInt::from_magnitude(true, sub_magnitudes(&lhs.magnitude, &rhs.magnitude)),
        },
        // 5 - -10 = 5 + 10
        (true, false) => add(lhs, &rhs.abs()),
        // -5 - 10 = -(10 + 5)
        (false, true) => -add(rhs, &lhs.abs()),
        // -5 - -10 = -(5 - 10)
        (false, false) => -subtract(&lhs.abs(), &rhs.abs()),
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign => subtract);
