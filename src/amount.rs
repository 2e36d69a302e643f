//! Monetary amount type backed by `rust_decimal`.
//!
//! Amounts keep the precision they were created with. Rounding only happens
//! when rendering for display via [`Amount::to_currency`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// A signed decimal quantity of currency units.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_account_proxy::Amount;
///
/// let amount = Amount::from_str(" 1,250.5 ").unwrap();
/// assert_eq!(amount.to_currency(), "$1,250.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Largest representable amount.
    pub const MAX: Self = Amount(Decimal::MAX);

    /// Smallest (most negative) representable amount.
    pub const MIN: Self = Amount(Decimal::MIN);

    /// Places kept when formatting as currency.
    pub const CURRENCY_DP: u32 = 2;

    /// Wraps a `Decimal` without changing its scale.
    pub const fn from_decimal(value: Decimal) -> Self {
        Amount(value)
    }

    /// Adds `rhs`, returning `None` if the result is out of range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Subtracts `rhs`, returning `None` if the result is out of range.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Returns `true` if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Renders the amount as a dollar figure, e.g. `$1,234.50` or `-$5.00`.
    ///
    /// Rounds half away from zero to two places and groups thousands with
    /// commas. A value that rounds to zero is shown without a sign.
    pub fn to_currency(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (idx, ch) in whole.chars().enumerate() {
            if idx > 0 && (whole.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}${}.{}", sign, grouped, cents)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Decimal::from(value))
    }
}

/// Parses free-text input such as `"  1,000.50 "` or `"-20"`.
///
/// Surrounding whitespace and `,` group separators are ignored. Only digits,
/// a decimal point and a sign are accepted; exponents and `_` are not.
impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
        if let Some(bad) = cleaned
            .chars()
            .find(|c| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        {
            return Err(rust_decimal::Error::ErrorString(format!(
                "Invalid decimal: unexpected character '{}'",
                bad
            )));
        }
        let decimal = Decimal::from_str(&cleaned)?;
        let decimal = Decimal::from_str(&cleaned)?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Panics on overflow; use [`Amount::checked_add`] for untrusted input.
impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

/// Panics on overflow; use [`Amount::checked_sub`] for untrusted input.
impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}
