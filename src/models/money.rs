//! Money type for expense amounts
//!
//! Amounts are stored as an integer count of minor currency units (i64), so
//! there is no NaN and no rounding drift when amounts are summed for display.
//! Sums go through [`Money::checked_add`], so an overflowing total is visible
//! to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from minor units
    ///
    /// # Examples
    /// ```
    /// use warikan::models::Money;
    /// let lunch = Money::from_minor(1250); // 12.50
    /// assert_eq!(lunch.minor(), 1250);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create an amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount from user input
    ///
    /// Accepts "12", "12.5", "12.50", "-3.25", and a leading currency symbol
    /// ("$12", "¥1200"). More than two decimal places is an error.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let s = input.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.trim().to_string());

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.trim_start_matches(|c: char| matches!(c, '$' | '¥' | '€' | '£'));

        if s.is_empty() || s.starts_with(['-', '+']) {
            return Err(invalid());
        }

        let minor = match s.split_once('.') {
            Some((whole, frac)) => {
                let digits_ok = frac.len() <= 2 && frac.chars().all(|c| c.is_ascii_digit());
                if !digits_ok || (whole.is_empty() && frac.is_empty()) {
                    return Err(invalid());
                }
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                let frac: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac.parse().map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(frac))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Sum of two amounts, or `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(minor) => Some(Self(minor)),
            None => None,
        }
    }

    /// Decimal form without a symbol, e.g. "12.50" or "-3.25"
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.fraction())
    }

    /// Format with a currency symbol, e.g. "¥12.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.fraction())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.fraction())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
