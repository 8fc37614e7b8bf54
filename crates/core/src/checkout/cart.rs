//! Cart line items.

use core::num::NonZeroU32;

use chrono::NaiveDate;

use crate::types::{CartLineId, Price};

/// Errors building a [`RentalPeriod`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RentalPeriodError {
    /// The end date is on or before the start date.
    #[error("rental must end after it starts ({start} to {end})")]
    EndNotAfterStart {
        /// Requested first day.
        start: NaiveDate,
        /// Requested return day.
        end: NaiveDate,
    },
}

/// A rental from `start` to `end`, with `end` strictly after `start`.
///
/// The rental lasts `end - start` days: 15 to 18 July is three days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl RentalPeriod {
    /// # Errors
    ///
    /// Returns [`RentalPeriodError::EndNotAfterStart`] unless `end > start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RentalPeriodError> {
        if end <= start {
            return Err(RentalPeriodError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of rental days; always at least one.
    #[must_use]
    pub fn days(&self) -> u32 {
        let days = (self.end - self.start).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// Whether a line is bought or rented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Purchase { quantity: NonZeroU32 },
    /// Rentals are always a single unit; the unit price is per day.
    Rental { period: RentalPeriod },
}

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: CartLineId,
    pub name: String,
    pub image_url: String,
    /// Purchase price per unit, or rental price per day.
    pub unit_price: Price,
    pub kind: LineKind,
}

impl CartLine {
    /// Units on the line; rentals count as one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        match self.kind {
            LineKind::Purchase { quantity } => quantity.get(),
            LineKind::Rental { .. } => 1,
        }
    }

    #[must_use]
    pub const fn rental_period(&self) -> Option<&RentalPeriod> {
        match &self.kind {
            LineKind::Purchase { .. } => None,
            LineKind::Rental { period } => Some(period),
        }
    }

    #[must_use]
    pub const fn is_rental(&self) -> bool {
        matches!(self.kind, LineKind::Rental { .. })
    }

    /// `unit_price × quantity` for purchases, `unit_price × days` for rentals.
    #[must_use]
    pub fn line_total(&self) -> Price {
        match &self.kind {
            LineKind::Purchase { quantity } => self.unit_price.times(quantity.get()),
            LineKind::Rental { period } => self.unit_price.times(period.days()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rental_period_counts_nights() {
        let period = RentalPeriod::new(date(2023, 7, 15), date(2023, 7, 18)).unwrap();
        assert_eq!(period.days(), 3);
    }

    #[test]
    fn test_rental_period_across_month_end() {
        let period = RentalPeriod::new(date(2024, 2, 28), date(2024, 3, 2)).unwrap();
        assert_eq!(period.days(), 3);
    }

    #[test]
    fn test_rental_period_rejects_same_day_and_reversed() {
        assert!(matches!(
            RentalPeriod::new(date(2023, 7, 15), date(2023, 7, 15)),
            Err(RentalPeriodError::EndNotAfterStart { .. })
        ));
        assert!(RentalPeriod::new(date(2023, 7, 18), date(2023, 7, 15)).is_err());
    }

    #[test]
    fn test_line_total_purchase_uses_quantity() {
        let line = CartLine {
            id: CartLineId::new("1"),
            name: "Memory card".to_string(),
            image_url: String::new(),
            unit_price: Price::from_rupees(2_499),
            kind: LineKind::Purchase {
                quantity: NonZeroU32::new(2).unwrap(),
            },
        };
        assert_eq!(line.line_total(), Price::from_rupees(4_998));
        assert_eq!(line.quantity(), 2);
        assert!(!line.is_rental());
    }

    #[test]
    fn test_line_total_rental_uses_days() {
        let line = CartLine {
            id: CartLineId::new("3"),
            name: "Sony Alpha A7 III".to_string(),
            image_url: String::new(),
            unit_price: Price::from_rupees(1_500),
            kind: LineKind::Rental {
                period: RentalPeriod::new(date(2023, 7, 15), date(2023, 7, 18)).unwrap(),
            },
        };
        assert_eq!(line.line_total(), Price::from_rupees(4_500));
        assert_eq!(line.quantity(), 1);
        assert!(line.is_rental());
    }
}
