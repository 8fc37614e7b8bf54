//! Order totals.

use rust_decimal::Decimal;

use super::CartLine;
use crate::types::Price;

/// GST applied to the subtotal (18%).
pub const TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Flat delivery charge in rupees, independent of delivery method.
pub const DELIVERY_CHARGE_RUPEES: u64 = 200;

/// Subtotal, tax, delivery and total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    /// `subtotal × 18%`, rounded half-to-even to whole paise.
    pub tax: Price,
    pub delivery: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Price a cart. An empty cart still pays delivery.
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let subtotal: Price = lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal.scale(TAX_RATE).round_to_paise();
        let delivery = Price::from_rupees(DELIVERY_CHARGE_RUPEES);

        Self {
            subtotal,
            tax,
            delivery,
            total: subtotal + tax + delivery,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use core::num::NonZeroU32;

    use chrono::NaiveDate;

    use super::*;
    use crate::checkout::{LineKind, RentalPeriod};
    use crate::types::CartLineId;

    fn purchase(id: &str, name: &str, price: u64, quantity: u32) -> CartLine {
        CartLine {
            id: CartLineId::new(id),
            name: name.to_string(),
            image_url: String::new(),
            unit_price: Price::from_rupees(price),
            kind: LineKind::Purchase {
                quantity: NonZeroU32::new(quantity).unwrap(),
            },
        }
    }

    fn rental(id: &str, name: &str, per_day: u64, start: NaiveDate, end: NaiveDate) -> CartLine {
        CartLine {
            id: CartLineId::new(id),
            name: name.to_string(),
            image_url: String::new(),
            unit_price: Price::from_rupees(per_day),
            kind: LineKind::Rental {
                period: RentalPeriod::new(start, end).unwrap(),
            },
        }
    }

    #[test]
    fn test_sample_cart_totals() {
        let lines = [
            purchase("1", "Canon EOS 1500D", 35_000, 1),
            purchase("2", "Tripod Stand", 2_500, 1),
            rental(
                "3",
                "Sony Alpha A7 III",
                1_500,
                NaiveDate::from_ymd_opt(2023, 7, 15).unwrap(),
                NaiveDate::from_ymd_opt(2023, 7, 18).unwrap(),
            ),
        ];

        let summary = OrderSummary::from_lines(&lines);

        assert_eq!(summary.subtotal, Price::from_rupees(42_000));
        assert_eq!(summary.tax, Price::from_rupees(7_560));
        assert_eq!(summary.delivery, Price::from_rupees(200));
        assert_eq!(summary.total, Price::from_rupees(49_760));
        assert_eq!(summary.total.to_string(), "₹49,760");
    }

    #[test]
    fn test_quantity_multiplies_unit_price() {
        let summary = OrderSummary::from_lines(&[purchase("1", "SD Card", 2_499, 3)]);
        assert_eq!(summary.subtotal, Price::from_rupees(7_497));
    }

    #[test]
    fn test_tax_rounds_to_paise() {
        // 18% of 1,001 is 180.18 exactly; 18% of 3 is 0.54.
        let summary = OrderSummary::from_lines(&[purchase("1", "Lens cloth", 1_001, 1)]);
        assert_eq!(summary.tax, Price::new(Decimal::new(18_018, 2)));
        assert_eq!(summary.tax.to_string(), "₹180.18");

        let summary = OrderSummary::from_lines(&[purchase("2", "Sticker", 3, 1)]);
        assert_eq!(summary.tax, Price::new(Decimal::new(54, 2)));
    }

    #[test]
    fn test_empty_cart_pays_delivery_only() {
        let summary = OrderSummary::from_lines(&[]);
        assert_eq!(summary.subtotal, Price::ZERO);
        assert_eq!(summary.tax, Price::ZERO);
        assert_eq!(summary.total, Price::from_rupees(200));
    }
}
