//! Application state shared across handlers.

use std::sync::Arc;

use shutterhive_core::repository::{CartRepository, ProductRepository, UserRepository};

use crate::config::StorefrontConfig;
use crate::db::{InMemoryCart, InMemoryProducts, InMemoryUsers, SeedError, seed};

/// The data sources behind each page.
///
/// The storefront catalog and the admin product table are separate slots so
/// an admin edit does not change what shoppers see. Pass the same
/// `Arc` for both to share one list.
#[derive(Clone)]
pub struct Repositories {
    pub catalog: Arc<dyn ProductRepository>,
    pub admin_products: Arc<dyn ProductRepository>,
    pub cart: Arc<dyn CartRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// In-memory stores filled with the demo data.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the built-in seed data is malformed.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self {
            catalog: Arc::new(InMemoryProducts::new(seed::catalog_products())),
            admin_products: Arc::new(InMemoryProducts::new(seed::admin_products())),
            cart: Arc::new(InMemoryCart::new(seed::cart_lines()?)),
            users: Arc::new(InMemoryUsers::new(seed::users()?)),
        })
    }
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    repositories: Repositories,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, repositories: Repositories) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                repositories,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Products shown on the home page and product listing.
    #[must_use]
    pub fn catalog(&self) -> &dyn ProductRepository {
        self.inner.repositories.catalog.as_ref()
    }

    /// Products managed from the admin dashboard.
    #[must_use]
    pub fn admin_products(&self) -> &dyn ProductRepository {
        self.inner.repositories.admin_products.as_ref()
    }

    /// Lines in the checkout cart.
    #[must_use]
    pub fn cart(&self) -> &dyn CartRepository {
        self.inner.repositories.cart.as_ref()
    }

    /// Customers listed on the admin users tab.
    #[must_use]
    pub fn users(&self) -> &dyn UserRepository {
        self.inner.repositories.users.as_ref()
    }
}
