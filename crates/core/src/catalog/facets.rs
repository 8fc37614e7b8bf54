//! Catalog-wide values used to build the filter sidebar.

use super::{Category, PriceRange, Product};

/// The categories and price bounds present in a product list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFacets {
    /// Distinct categories in first-seen order.
    pub categories: Vec<Category>,
    /// Lowest and highest purchase price, or `None` for an empty list.
    pub price_bounds: Option<PriceRange>,
}

impl CatalogFacets {
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        for category in products.iter().filter_map(Product::category) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        let min = products.iter().map(Product::price).min();
        let max = products.iter().map(Product::price).max();
        let price_bounds = min.zip(max).map(|(lo, hi)| PriceRange::new(lo, hi));

        Self {
            categories,
            price_bounds,
        }
    }
}
