//! Product catalog route handlers.
//!
//! The listing page is a plain GET form: every filter control is a query
//! parameter, so a filtered view can be bookmarked or shared.
//!
//! | Parameter   | Meaning                                             |
//! |-------------|-----------------------------------------------------|
//! | `q`         | Search text (name, features, category)              |
//! | `category`  | Allowed category; repeat for several                |
//! | `min_price` | Lower price bound in rupees (default 0)             |
//! | `max_price` | Upper price bound in rupees (default unbounded)     |
//! | `rental`    | `on`, `true` or `1` to show rentable products only  |
//! | `sort`      | `featured`, `price-low`, `price-high` or `name`     |

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{RawQuery, State};
use shutterhive_core::Price;
use shutterhive_core::catalog::{CatalogFacets, CatalogQuery, Category, PriceRange, Product, SortKey};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub features: Vec<String>,
    pub price: String,
    pub category: Option<String>,
    /// Per-day rate, e.g. `₹500/day`, for rentable products.
    pub rental_price: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            image_url: product.details().image_url.clone(),
            features: product.features().to_vec(),
            price: product.price().to_string(),
            category: product.category().map(Category::label),
            rental_price: product.rental_price_per_day().map(|p| format!("{p}/day")),
        }
    }
}

/// A category checkbox in the filter sidebar.
#[derive(Clone)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

/// An entry in the sort menu.
#[derive(Clone)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The filter form as the visitor submitted it, echoed back into the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogForm {
    pub search: String,
    pub min_price: String,
    pub max_price: String,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub total_count: usize,
    pub form: CatalogForm,
    pub categories: Vec<CategoryOption>,
    pub rental_only: bool,
    pub sort_options: Vec<SortOption>,
    /// Cheapest and dearest price in the whole catalog, for input hints.
    pub price_floor: String,
    pub price_ceiling: String,
    pub has_filters: bool,
}

/// Display the product listing page.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<ProductsIndexTemplate> {
    let (query, form) = parse_catalog_query(raw.as_deref().unwrap_or_default());
    let all = state.catalog().list()?;
    let products = query.apply(&all);

    tracing::debug!(
        total = all.len(),
        matched = products.len(),
        sort = query.sort.as_str(),
        "Catalog filtered"
    );

    let facets = CatalogFacets::from_products(&all);
    let categories = facets
        .categories
        .iter()
        .map(|category| CategoryOption {
            value: category.as_str().to_string(),
            label: category.label(),
            checked: query.categories.contains(category),
        })
        .collect();
    let (price_floor, price_ceiling) = facets.price_bounds.map_or_else(
        || (String::new(), String::new()),
        |bounds| (bounds.min().to_string(), bounds.max().to_string()),
    );

    Ok(ProductsIndexTemplate {
        products: products.iter().map(ProductCardView::from).collect(),
        total_count: all.len(),
        has_filters: query != CatalogQuery::default(),
        form,
        categories,
        rental_only: query.rental_only,
        sort_options: sort_options(query.sort),
        price_floor,
        price_ceiling,
    })
}

/// Build the sort menu with `current` selected.
fn sort_options(current: SortKey) -> Vec<SortOption> {
    SortKey::ALL
        .iter()
        .map(|key| SortOption {
            value: key.as_str(),
            label: key.label(),
            selected: *key == current,
        })
        .collect()
}

/// Parse the listing query string.
///
/// Unparseable price bounds are ignored rather than rejected, so a typo in
/// one box never hides the whole catalog.
pub fn parse_catalog_query(raw: &str) -> (CatalogQuery, CatalogForm) {
    let mut query = CatalogQuery::default();
    let mut form = CatalogForm::default();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "q" => form.search = value.trim().to_string(),
            "category" => {
                if let Some(category) = Category::new(&value) {
                    query.categories.insert(category);
                }
            }
            "min_price" => form.min_price = value.trim().to_string(),
            "max_price" => form.max_price = value.trim().to_string(),
            "rental" => query.rental_only = matches!(value.as_ref(), "on" | "true" | "1"),
            "sort" => query.sort = SortKey::parse(&value),
            _ => {}
        }
    }

    query.search.clone_from(&form.search);

    let min = parse_rupees(&form.min_price);
    let max = parse_rupees(&form.max_price);
    if min.is_some() || max.is_some() {
        query.price_range = PriceRange::new(min.unwrap_or(Price::ZERO), max.unwrap_or(Price::MAX));
    }

    (query, form)
}

/// Non-negative whole rupees; digit-group commas and a leading `₹` are allowed.
fn parse_rupees(raw: &str) -> Option<Price> {
    let digits: String = raw
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits.trim().parse::<u64>().ok().map(Price::from_rupees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        let (query, form) = parse_catalog_query("");
        assert_eq!(query, CatalogQuery::default());
        assert_eq!(form, CatalogForm::default());
    }

    #[test]
    fn test_repeated_categories() {
        let (query, _) = parse_catalog_query("category=camera&category=Lighting&category=");
        let names: Vec<_> = query.categories.iter().map(Category::as_str).collect();
        assert_eq!(names, ["camera", "lighting"]);
    }

    #[test]
    fn test_search_is_decoded() {
        let (query, form) = parse_catalog_query("q=mirrorless+camera%21");
        assert_eq!(query.search, "mirrorless camera!");
        assert_eq!(form.search, "mirrorless camera!");
    }

    #[test]
    fn test_price_bounds() {
        let (query, _) = parse_catalog_query("min_price=10%2C000&max_price=50000");
        assert_eq!(query.price_range.min(), Price::from_rupees(10_000));
        assert_eq!(query.price_range.max(), Price::from_rupees(50_000));
    }

    #[test]
    fn test_missing_min_defaults_to_zero() {
        let (query, form) = parse_catalog_query("max_price=15000");
        assert_eq!(query.price_range.min(), Price::ZERO);
        assert_eq!(query.price_range.max(), Price::from_rupees(15_000));
        assert_eq!(form.max_price, "15000");
    }

    #[test]
    fn test_missing_max_is_unbounded() {
        let (query, _) = parse_catalog_query("min_price=100000");
        assert_eq!(query.price_range.max(), Price::MAX);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let (query, _) = parse_catalog_query("min_price=40000&max_price=10000");
        assert_eq!(query.price_range.min(), Price::from_rupees(10_000));
        assert_eq!(query.price_range.max(), Price::from_rupees(40_000));
    }

    #[test]
    fn test_invalid_bounds_are_ignored() {
        let (query, form) = parse_catalog_query("min_price=cheap&max_price=-5");
        assert_eq!(query.price_range, PriceRange::default());
        assert_eq!(form.min_price, "cheap");
    }

    #[test]
    fn test_rental_flag_values() {
        for value in ["on", "true", "1"] {
            let (query, _) = parse_catalog_query(&format!("rental={value}"));
            assert!(query.rental_only, "rental={value}");
        }
        let (query, _) = parse_catalog_query("rental=off");
        assert!(!query.rental_only);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_featured() {
        let (query, _) = parse_catalog_query("sort=popularity");
        assert_eq!(query.sort, SortKey::Featured);
        let (query, _) = parse_catalog_query("sort=price-high");
        assert_eq!(query.sort, SortKey::PriceHighToLow);
    }

    #[test]
    fn test_sort_options_mark_current() {
        let options = sort_options(SortKey::Name);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.value).collect();
        assert_eq!(selected, ["name"]);
        assert_eq!(options.len(), SortKey::ALL.len());
    }

    #[test]
    fn test_card_view_formats_prices() {
        let product = Product::Rentable {
            details: shutterhive_core::catalog::ProductDetails {
                id: shutterhive_core::ProductId::new("2"),
                name: "Sony Alpha a7 III Mirrorless Camera".to_string(),
                image_url: String::new(),
                features: vec!["4K Video Recording".to_string()],
                price: Price::from_rupees(149_990),
                category: Category::new("camera"),
            },
            rental_price_per_day: Price::from_rupees(1_200),
        };

        let view = ProductCardView::from(&product);

        assert_eq!(view.price, "₹1,49,990");
        assert_eq!(view.rental_price.as_deref(), Some("₹1,200/day"));
        assert_eq!(view.category.as_deref(), Some("Camera"));
    }
}
