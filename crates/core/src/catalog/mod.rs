//! Product catalog.
//!
//! Products come in two shapes: [`Product::Standard`] items that can only be
//! bought, and [`Product::Rentable`] items that also carry a per-day rental
//! rate. The rental-only filter and every price derivation match on the
//! variant, never on an optional flag.

mod facets;
mod query;

pub use facets::CatalogFacets;
pub use query::{CatalogQuery, PriceRange, SortKey};

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product category such as `camera` or `lighting`.
///
/// Categories are an open set. Values are stored trimmed and lowercased so
/// `"Camera "` and `"camera"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Normalize and wrap a category name. Returns `None` for blank input.
    #[must_use]
    pub fn new(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        (!normalized.is_empty()).then_some(Self(normalized))
    }

    /// The normalized category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-cased label for display (`accessory` -> `Accessory`).
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields shared by every product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    /// Display-only bullet points, in order.
    pub features: Vec<String>,
    /// Purchase price in whole rupees.
    pub price: Price,
    pub category: Option<Category>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    /// Available for purchase only.
    Standard { details: ProductDetails },
    /// Available for purchase or rental.
    Rentable {
        details: ProductDetails,
        rental_price_per_day: Price,
    },
}

impl Product {
    /// The shared product fields.
    #[must_use]
    pub const fn details(&self) -> &ProductDetails {
        match self {
            Self::Standard { details } | Self::Rentable { details, .. } => details,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.details().id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.details().name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.details().price
    }

    #[must_use]
    pub const fn category(&self) -> Option<&Category> {
        self.details().category.as_ref()
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.details().features
    }

    /// Per-day rental rate, if the product can be rented.
    #[must_use]
    pub const fn rental_price_per_day(&self) -> Option<Price> {
        match self {
            Self::Standard { .. } => None,
            Self::Rentable {
                rental_price_per_day,
                ..
            } => Some(*rental_price_per_day),
        }
    }

    #[must_use]
    pub const fn is_rentable(&self) -> bool {
        matches!(self, Self::Rentable { .. })
    }
}

/// Remove the product with `id` from `products`, keeping the order of the rest.
///
/// Returns the removed product, or `None` if no product has that ID.
pub fn remove_by_id(products: &mut Vec<Product>, id: &ProductId) -> Option<Product> {
    let index = products.iter().position(|p| p.id() == id)?;
    Some(products.remove(index))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: &str, name: &str, price: u64, category: Option<&str>) -> Product {
        Product::Standard {
            details: details(id, name, price, category),
        }
    }

    pub fn rentable(id: &str, name: &str, price: u64, per_day: u64, category: Option<&str>) -> Product {
        Product::Rentable {
            details: details(id, name, price, category),
            rental_price_per_day: Price::from_rupees(per_day),
        }
    }

    pub fn with_features(mut product: Product, features: &[&str]) -> Product {
        let details = match &mut product {
            Product::Standard { details } | Product::Rentable { details, .. } => details,
        };
        details.features = features.iter().map(|f| (*f).to_owned()).collect();
        product
    }

    fn details(id: &str, name: &str, price: u64, category: Option<&str>) -> ProductDetails {
        ProductDetails {
            id: ProductId::new(id),
            name: name.to_owned(),
            image_url: format!("https://images.example.com/{id}.jpg"),
            features: Vec::new(),
            price: Price::from_rupees(price),
            category: category.and_then(Category::new),
        }
    }
}
