//! Currency amounts as whole cents.
//!
//! Balances are summed and compared exactly, so `1000.00 + 500.00 - 200.00`
//! is always `1300.00` and never `1299.9999999`.

use std::fmt;

use serde::Deserialize;

use crate::error::MoneyError;

const CENTS_PER_DOLLAR: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "f64")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole dollars; saturates instead of overflowing.
    pub const fn dollars(dollars: i64) -> Self {
        Money(dollars.saturating_mul(CENTS_PER_DOLLAR))
    }

    /// Rounds to the nearest cent.
    pub fn from_dollars(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NotFinite(amount));
        }
        let cents = (amount * CENTS_PER_DOLLAR as f64).round();
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(MoneyError::OutOfRange(amount));
        }
        Ok(Money(cents as i64))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::from_dollars(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_dollar = CENTS_PER_DOLLAR.unsigned_abs();
        let rendered = format!("{sign}${}.{:02}", abs / per_dollar, abs % per_dollar);
        f.pad(&rendered)
    }
}
