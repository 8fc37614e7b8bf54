//! Session-related types.
//!
//! The checkout wizard is a per-visitor state machine stored in the session
//! under [`keys::CHECKOUT`]. Handlers load it, apply one transition, and
//! write it back.

use serde::{Deserialize, Serialize};
use shutterhive_core::checkout::{
    AddressError, AddressInput, CheckoutStep, DeliveryMethod, PaymentMethod, ShippingAddress,
};
use thiserror::Error;

/// Session keys.
pub mod keys {
    /// Key for the checkout wizard state.
    pub const CHECKOUT: &str = "checkout";
}

/// A transition that is not allowed from the current step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The form belongs to a different step than the one the visitor is on.
    #[error("expected the {expected} step, but checkout is at {actual}")]
    WrongStep {
        expected: &'static str,
        actual: &'static str,
    },

    /// The address form had invalid fields.
    #[error("address has {} invalid field(s)", .0.len())]
    InvalidAddress(Vec<AddressError>),
}

/// The visitor's checkout progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub step: CheckoutStep,
    /// Set once the address step has been passed.
    pub address: Option<ShippingAddress>,
    pub payment: PaymentMethod,
    pub delivery: DeliveryMethod,
}

/// What the confirmation page shows after an order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub address: ShippingAddress,
    pub payment: PaymentMethod,
    pub delivery: DeliveryMethod,
}

impl CheckoutSession {
    /// Validate the address form and advance to payment.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::WrongStep`] unless the wizard is at the address
    /// step, or [`WizardError::InvalidAddress`] with every field problem.
    pub fn submit_address(&mut self, input: &AddressInput) -> Result<(), WizardError> {
        self.expect_step(CheckoutStep::Address)?;
        let address = input.validate().map_err(WizardError::InvalidAddress)?;
        self.address = Some(address);
        self.step = self.step.next();
        Ok(())
    }

    /// Record the payment and delivery choice and advance to review.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::WrongStep`] unless the wizard is at the payment
    /// step with an address on file.
    pub fn submit_payment(
        &mut self,
        payment: PaymentMethod,
        delivery: DeliveryMethod,
    ) -> Result<(), WizardError> {
        self.expect_step(CheckoutStep::Payment)?;
        if self.address.is_none() {
            return Err(self.wrong_step(CheckoutStep::Address));
        }
        self.payment = payment;
        self.delivery = delivery;
        self.step = self.step.next();
        Ok(())
    }

    /// Go back one step. Entered data is kept so forms stay filled in.
    pub const fn back(&mut self) {
        self.step = self.step.previous();
    }

    /// Finish checkout, resetting the wizard to a fresh address step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::WrongStep`] unless the wizard is at review with
    /// an address on file.
    pub fn place_order(&mut self) -> Result<PlacedOrder, WizardError> {
        self.expect_step(CheckoutStep::Review)?;
        let Some(address) = self.address.clone() else {
            return Err(self.wrong_step(CheckoutStep::Address));
        };
        let order = PlacedOrder {
            address,
            payment: self.payment,
            delivery: self.delivery,
        };
        *self = Self::default();
        Ok(order)
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.wrong_step(expected))
        }
    }

    const fn wrong_step(&self, expected: CheckoutStep) -> WizardError {
        WizardError::WrongStep {
            expected: expected.label(),
            actual: self.step.label(),
        }
    }
}
