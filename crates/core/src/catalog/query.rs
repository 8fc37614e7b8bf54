//! Catalog search, filter and sort.

use std::collections::BTreeSet;

use super::{Category, Product};
use crate::types::Price;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order, unchanged.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Name, lexicographic ascending.
    Name,
}

impl SortKey {
    /// Every sort key, in the order the sort menu lists them.
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Name,
    ];

    /// Parse a query-string value. Unknown values fall back to `Featured`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => Self::PriceLowToHigh,
            "price-high" => Self::PriceHighToLow,
            "name" => Self::Name,
            _ => Self::Featured,
        }
    }

    /// The query-string value for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Name => "Name",
        }
    }

    /// Stable in-place sort of `products` by this key.
    pub fn sort(self, products: &mut [Product]) {
        match self {
            Self::Featured => {}
            Self::PriceLowToHigh => products.sort_by_key(Product::price),
            Self::PriceHighToLow => products.sort_by(|a, b| b.price().cmp(&a.price())),
            Self::Name => products.sort_by(|a, b| a.name().cmp(b.name())),
        }
    }
}

/// Inclusive purchase-price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Create a range; bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(a: Price, b: Price) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[must_use]
    pub const fn min(&self) -> Price {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Price {
        self.max
    }

    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Unbounded: every non-negative price.
impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Price::ZERO,
            max: Price::MAX,
        }
    }
}

/// A full catalog filter configuration.
///
/// The filtered view is recomputed from scratch by [`CatalogQuery::apply`];
/// nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free text; matched case-insensitively against name, features and category.
    pub search: String,
    /// Allowed categories. Empty means any category.
    pub categories: BTreeSet<Category>,
    pub price_range: PriceRange,
    /// Only products that can be rented.
    pub rental_only: bool,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Whether `product` passes the search text.
    #[must_use]
    pub fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(product.name())
            || product.features().iter().any(|f| contains(f))
            || product.category().is_some_and(|c| contains(c.as_str()))
    }

    /// Whether `product` is in one of the selected categories.
    #[must_use]
    pub fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty()
            || product
                .category()
                .is_some_and(|c| self.categories.contains(c))
    }

    #[must_use]
    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price())
    }

    #[must_use]
    pub const fn matches_rental(&self, product: &Product) -> bool {
        !self.rental_only || product.is_rentable()
    }

    /// Whether `product` passes every filter clause.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_rental(product)
    }

    /// Filter then sort `products`, leaving the input untouched.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut selected: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        self.sort.sort(&mut selected);
        selected
    }
}
