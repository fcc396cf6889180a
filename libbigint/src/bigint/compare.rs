use super::utils::cmp_magnitudes;
use super::BigInt;
use std::cmp::Ordering;

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => cmp_magnitudes(&self.magnitude, &other.magnitude),
            // the larger magnitude is the smaller negative number
            (false, false) => cmp_magnitudes(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
