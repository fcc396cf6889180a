use super::sub::subtract;
use super::utils::add_magnitudes;
use super::BigInt;

/// Returns `lhs + rhs`.
///
/// Only two positive values are added digit by digit; every other sign combination is reduced
/// to a subtraction or to the addition of the absolute values.
pub fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if rhs.is_zero() {
        return lhs.clone();
    }
    if lhs.is_zero() {
        return rhs.clone();
    }

    match (lhs.is_positive(), rhs.is_positive()) {
        (true, true) => BigInt::from_magnitude(true, add_magnitudes(&lhs.magnitude, &rhs.magnitude)),
        // 10 + -4 = 10 - 4
        (true, false) => subtract(lhs, &rhs.abs()),
        // -10 + 5 = 5 - 10
        (false, true) => subtract(rhs, &lhs.abs()),
        // -10 + -5 = -(10 + 5)
        (false, false) => -add(&lhs.abs(), &rhs.abs()),
    }
}

forward_binop!(Add, add, AddAssign, add_assign => add);
