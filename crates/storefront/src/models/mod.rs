//! Session-stored models for storefront.

pub mod session;

pub use session::{CheckoutSession, PlacedOrder, WizardError, keys};
