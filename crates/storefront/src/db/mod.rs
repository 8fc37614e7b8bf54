//! In-memory repositories.
//!
//! The storefront has no database. Each repository trait from
//! `shutterhive_core::repository` is implemented over data held in process,
//! filled from [`seed`] at startup. Nothing is persisted across restarts.

pub mod carts;
pub mod products;
pub mod seed;
pub mod users;

pub use carts::InMemoryCart;
pub use products::InMemoryProducts;
pub use seed::SeedError;
pub use users::InMemoryUsers;
