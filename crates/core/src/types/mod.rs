//! Core types for ShutterHive.
//!
//! This module provides validated wrappers for identifiers, money and the
//! contact details collected at checkout.

pub mod email;
pub mod id;
pub mod phone;
pub mod pincode;
pub mod price;

pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use pincode::{Pincode, PincodeError};
pub use price::Price;
