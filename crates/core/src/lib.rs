//! ShutterHive Core - Domain types and pricing logic.
//!
//! This crate provides the pieces of the camera store that do not depend on
//! HTTP or storage:
//! - `catalog` - Products and the search/filter/sort pipeline
//! - `checkout` - Cart lines, order pricing and the checkout wizard
//! - `admin` - Admin-facing records and product form validation
//! - `repository` - Data access traits implemented by the storefront
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no I/O,
//! no HTTP, no global state. Every derived value (filtered catalog, order
//! totals, wizard progress) is a function of its inputs.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod repository;
pub mod types;

pub use types::*;
