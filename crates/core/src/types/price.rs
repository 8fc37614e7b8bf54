//! Rupee amounts using decimal arithmetic.
//!
//! Catalog prices are whole rupees, but derived amounts (tax) can carry
//! paise. All arithmetic stays in [`Decimal`]; rounding happens only through
//! [`Price::round_to_paise`], which uses banker's rounding (half to even).

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount of Indian rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest representable amount, used as an open upper bound.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Number of decimal places in the minor unit (paise).
    pub const MINOR_UNIT_DIGITS: u32 = 2;

    /// Create a price from an exact decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of rupees.
    #[must_use]
    pub fn from_rupees(rupees: u64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a whole count (quantity or rental days).
    #[must_use]
    pub fn times(self, count: u32) -> Self {
        Self(self.0 * Decimal::from(count))
    }

    /// Multiply by a rate such as a tax percentage, without rounding.
    #[must_use]
    pub fn scale(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }

    /// Round half-to-even to whole paise.
    #[must_use]
    pub fn round_to_paise(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(Self::MINOR_UNIT_DIGITS, RoundingStrategy::MidpointNearestEven),
        )
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Formats as `₹` with Indian digit grouping (`₹1,49,990`).
///
/// Paise are shown only when non-zero (`₹12.50`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_paise().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let rupees = rounded.trunc().abs().to_string();
        let paise = (rounded.fract().abs() * Decimal::ONE_HUNDRED).trunc();

        write!(f, "{sign}₹{}", group_indian(&rupees))?;
        if !paise.is_zero() {
            write!(f, ".{:0>2}", paise.to_string())?;
        }
        Ok(())
    }
}

/// Insert separators the Indian way: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::from_rupees(42_000).to_string(), "₹42,000");
        assert_eq!(Price::from_rupees(200).to_string(), "₹200");
        assert_eq!(Price::from_rupees(0).to_string(), "₹0");
    }

    #[test]
    fn test_display_uses_lakh_grouping() {
        assert_eq!(Price::from_rupees(149_990).to_string(), "₹1,49,990");
        assert_eq!(Price::from_rupees(12_345_678).to_string(), "₹1,23,45,678");
    }

    #[test]
    fn test_display_shows_paise_when_present() {
        let price = Price::new(Decimal::new(123_450, 2));
        assert_eq!(price.to_string(), "₹1,234.50");
    }

    #[test]
    fn test_round_to_paise_is_half_even() {
        assert_eq!(
            Price::new(Decimal::new(10_125, 3)).round_to_paise(),
            Price::new(Decimal::new(1_012, 2))
        );
        assert_eq!(
            Price::new(Decimal::new(10_135, 3)).round_to_paise(),
            Price::new(Decimal::new(1_014, 2))
        );
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_rupees(1_500).times(3), Price::from_rupees(500)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_rupees(5_000));
    }

    #[test]
    fn test_group_indian_short_values() {
        assert_eq!(group_indian("1"), "1");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
    }
}
