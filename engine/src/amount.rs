use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Monetary value in minor currency units (whole cents).
///
/// All pot arithmetic runs on integer cents; shares are floored and the
/// remainder redistributed explicitly, so pool totals are conserved exactly.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Self { Amount(cents) }
    pub fn cents(self) -> i64 { self.0 }

    pub fn is_positive(self) -> bool { self.0 > 0 }
    pub fn is_negative(self) -> bool { self.0 < 0 }

    pub fn abs(self) -> Amount { Amount(self.0.abs()) }
    pub fn min(self, other: Amount) -> Amount { Amount(self.0.min(other.0)) }
}

impl Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Amount) -> Amount { Amount(self.0 + rhs.0) }
}

impl Sub for Amount {
    type Output = Amount;
    fn sub(self, rhs: Amount) -> Amount { Amount(self.0 - rhs.0) }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) { self.0 += rhs.0; }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) { self.0 -= rhs.0; }
}

impl Neg for Amount {
    type Output = Amount;
    fn neg(self) -> Amount { Amount(-self.0) }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        Amount(iter.map(|a| a.0).sum())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}
