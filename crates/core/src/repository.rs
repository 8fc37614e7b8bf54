//! Data access traits.
//!
//! The storefront depends on these traits rather than on concrete storage,
//! so the seeded in-memory stores can be replaced by a real backend without
//! touching the page handlers. Implementations must be shareable across
//! request handlers (`Send + Sync`).

use thiserror::Error;

use crate::admin::{NewProduct, UserRecord};
use crate::catalog::Product;
use crate::checkout::CartLine;
use crate::types::ProductId;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with the given identifier.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record, e.g. `"product"`.
        entity: &'static str,
        id: String,
    },

    /// A record with the same identifier already exists.
    #[error("{entity} already exists: {id}")]
    Conflict {
        /// Kind of record, e.g. `"product"`.
        entity: &'static str,
        id: String,
    },

    /// The backing store cannot be used (poisoned lock, lost connection).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Shorthand for a missing product.
    #[must_use]
    pub fn product_not_found(id: &ProductId) -> Self {
        Self::NotFound {
            entity: "product",
            id: id.to_string(),
        }
    }
}

/// Products, in display order.
pub trait ProductRepository: Send + Sync {
    /// All products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// A single product, or `None` if the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Assign a fresh identifier and append the product, as one step.
    ///
    /// Identifiers are never reused, even after the product holding one is
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be written.
    fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    /// Append a product with a caller-chosen identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the ID is already taken.
    fn insert(&self, product: Product) -> Result<(), RepositoryError>;

    /// Replace the product with the same ID, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product has that ID.
    fn update(&self, product: Product) -> Result<(), RepositoryError>;

    /// Remove a product, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product has that ID.
    fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError>;
}

/// The shopper's cart.
pub trait CartRepository: Send + Sync {
    /// Current cart lines in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    fn lines(&self) -> Result<Vec<CartLine>, RepositoryError>;
}

/// Registered customers.
pub trait UserRepository: Send + Sync {
    /// All users in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    fn list(&self) -> Result<Vec<UserRecord>, RepositoryError>;
}
