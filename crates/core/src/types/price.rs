//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront sells in a single currency, so a [`Price`] is just a
//! decimal amount in major units (rupees, not paise). It serializes as a
//! string to preserve precision.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of major units.
    #[must_use]
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// `percent`% of this amount, unrounded.
    #[must_use]
    pub fn percent(&self, percent: u8) -> Self {
        Self(self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    /// Whole-number discount percentage relative to `original` (e.g. `13` for
    /// 4500 vs 5200). Zero when there is no discount.
    #[must_use]
    pub fn discount_percent_from(&self, original: Self) -> u32 {
        if original.0 <= self.0 || original.0.is_zero() {
            return 0;
        }
        let ratio = (Decimal::ONE - self.0 / original.0) * Decimal::ONE_HUNDRED;
        ratio
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }

    /// Format for display with the currency prefix and thousands grouping
    /// (e.g. `Rs.4,500` or `Rs.1,279.50`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", CurrencyCode::INR.symbol(), group_thousands(self.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// ISO 4217 currency codes the storefront knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
}

impl CurrencyCode {
    /// Display prefix used on price labels.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "Rs.",
        }
    }
}

fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, frac) = text.split_once('.').map_or((text.as_str(), None), |(w, f)| (w, Some(f)));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac:0<2}"),
        None => format!("{sign}{grouped}"),
    }
}
