//! Shipping details and payment choices collected by the wizard.

use serde::{Deserialize, Serialize};

use crate::types::{Email, EmailError, Phone, PhoneError, Pincode, PincodeError};

/// A single problem with the submitted address form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A required text field is blank.
    #[error("{field} is required")]
    Required {
        /// Human-readable field name.
        field: &'static str,
    },
    #[error(transparent)]
    Phone(#[from] PhoneError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Pincode(#[from] PincodeError),
}

impl AddressError {
    /// The form field this error belongs to.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Required { field } => *field,
            Self::Phone(_) => "Phone Number",
            Self::Email(_) => "Email",
            Self::Pincode(_) => "Pincode",
        }
    }
}

/// Raw address form fields, as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub landmark: String,
}

impl AddressInput {
    /// Validate every field, collecting all problems instead of stopping at
    /// the first.
    ///
    /// # Errors
    ///
    /// Returns one [`AddressError`] per invalid field, in form order.
    pub fn validate(&self) -> Result<ShippingAddress, Vec<AddressError>> {
        let mut errors = Vec::new();

        let full_name = required(&self.full_name, "Full Name", &mut errors);
        let phone = Phone::parse(&self.phone)
            .map_err(|e| errors.push(e.into()))
            .ok();
        let email = Email::parse(&self.email)
            .map_err(|e| errors.push(e.into()))
            .ok();
        let pincode = Pincode::parse(&self.pincode)
            .map_err(|e| errors.push(e.into()))
            .ok();
        let address = required(&self.address, "Address", &mut errors);
        let city = required(&self.city, "City", &mut errors);
        let state = required(&self.state, "State", &mut errors);
        let landmark = Some(self.landmark.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_owned);

        match (full_name, phone, email, pincode, address, city, state) {
            (
                Some(full_name),
                Some(phone),
                Some(email),
                Some(pincode),
                Some(address),
                Some(city),
                Some(state),
            ) if errors.is_empty() => Ok(ShippingAddress {
                full_name,
                phone,
                email,
                pincode,
                address,
                city,
                state,
                landmark,
            }),
            _ => Err(errors),
        }
    }
}

/// Trimmed non-empty text, or a `Required` error.
fn required(value: &str, field: &'static str, errors: &mut Vec<AddressError>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(AddressError::Required { field });
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// A validated delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: Phone,
    pub email: Email,
    pub pincode: Pincode,
    pub address: String,
    pub city: String,
    pub state: String,
    pub landmark: Option<String>,
}

impl ShippingAddress {
    /// Turn a validated address back into form fields for editing.
    #[must_use]
    pub fn to_input(&self) -> AddressInput {
        AddressInput {
            full_name: self.full_name.clone(),
            phone: self.phone.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
            pincode: self.pincode.as_str().to_owned(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            landmark: self.landmark.clone().unwrap_or_default(),
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "upi")]
    Upi,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "netbanking")]
    NetBanking,
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::Upi, Self::Card, Self::NetBanking, Self::CashOnDelivery];

    /// Form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::Card => "card",
            Self::NetBanking => "netbanking",
            Self::CashOnDelivery => "cod",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Card => "Credit / Debit Card",
            Self::NetBanking => "Net Banking",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Home,
    Pickup,
}

impl DeliveryMethod {
    pub const ALL: [Self; 2] = [Self::Home, Self::Pickup];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Pickup => "pickup",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home Delivery",
            Self::Pickup => "Pick-up from Store",
        }
    }
}
