use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;
use thiserror::Error;

/// Menu prices are in South African rand.
pub const CURRENCY_SYMBOL: &str = "R";

/// A non-negative currency amount, held in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("Amount is empty")]
    Empty,
    #[error("Amount cannot be negative: {0}")]
    Negative(String),
    #[error("Amount is not a number: {0}")]
    Malformed(String),
    #[error("Amount has more than two decimals: {0}")]
    TooPrecise(String),
    #[error("Amount is too large: {0}")]
    Overflow(String),
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn from_rands(rands: u64) -> Self {
        Self { cents: rands * 100 }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Arithmetic mean of `count` amounts summing to `total`, rounded half-up
    /// to the cent. Zero when `count` is zero.
    pub fn mean(total: Money, count: usize) -> Money {
        if count == 0 {
            return Money::ZERO;
        }
        let count = count as u64;
        Money::from_cents(total.cents.saturating_add(count / 2) / count)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{:02}", CURRENCY_SYMBOL, self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses what a person types into a price field: `85`, `85.5`, `85.50`,
    /// optionally prefixed with the currency symbol.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input.trim();
        let text = raw.strip_prefix(CURRENCY_SYMBOL).unwrap_or(raw).trim();
        if text.is_empty() {
            return Err(MoneyError::Empty);
        }
        if text.starts_with('-') {
            return Err(MoneyError::Negative(raw.to_string()));
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyError::Malformed(raw.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyError::TooPrecise(raw.to_string()));
        }

        let overflow = || MoneyError::Overflow(raw.to_string());
        let rands: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse().map_err(|_| overflow())?,
        };

        rands
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money::from_cents)
            .ok_or_else(overflow)
    }
}
