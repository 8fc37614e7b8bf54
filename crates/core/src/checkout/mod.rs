//! Checkout: cart lines, order pricing and the step wizard.

mod address;
mod cart;
mod step;
mod summary;

pub use address::{AddressError, AddressInput, DeliveryMethod, PaymentMethod, ShippingAddress};
pub use cart::{CartLine, LineKind, RentalPeriod, RentalPeriodError};
pub use step::CheckoutStep;
pub use summary::{DELIVERY_CHARGE_RUPEES, OrderSummary, TAX_RATE};
