use serde::{Deserialize, Serialize};
use std::fmt;

/// An abstract, non-negative monetary amount.
///
/// Fees, tenders and change are whole units; there is no currency and no
/// fractional part.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns `self - rhs`, or `None` when `rhs` is larger.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Money> for u64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sub() {
        assert_eq!(Money::new(200).checked_sub(Money::new(100)), Some(Money::new(100)));
        assert_eq!(Money::new(100).checked_sub(Money::new(100)), Some(Money::ZERO));
        assert_eq!(Money::new(1000).checked_sub(Money::new(1500)), None);
    }

    #[test]
    fn test_money_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::new(150)).unwrap();
        assert_eq!(json, "150");
        let back: Money = serde_json::from_str("150").unwrap();
        assert_eq!(back, Money::new(150));
    }
}
