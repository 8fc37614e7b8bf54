//! Admin dashboard: product and user tables.
//!
//! There is no authentication in front of these routes.

pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use shutterhive_core::admin::UserRecord;
use shutterhive_core::catalog::Product;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Path of the dashboard's products tab, used as the redirect after edits.
pub const PRODUCTS_TAB_PATH: &str = "/admin?tab=products";

/// Which table the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Products,
    Users,
}

impl AdminTab {
    /// Unknown values fall back to the products tab.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("users") => Self::Users,
            _ => Self::Products,
        }
    }
}

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
}

/// Product table row.
#[derive(Debug, Clone)]
pub struct ProductRowView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub features: String,
    pub price: String,
    pub rental_price: Option<String>,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            image_url: product.details().image_url.clone(),
            features: product.features().join(", "),
            price: product.price().to_string(),
            rental_price: product.rental_price_per_day().map(|p| format!("{p}/day")),
        }
    }
}

/// User table row.
#[derive(Debug, Clone)]
pub struct UserRowView {
    pub name: String,
    pub email: String,
    pub joined: String,
    pub order_count: u32,
}

impl From<&UserRecord> for UserRowView {
    fn from(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.to_string(),
            joined: user.joined_on.format("%d %b %Y").to_string(),
            order_count: user.order_count,
        }
    }
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/index.html")]
pub struct DashboardTemplate {
    pub products_tab: bool,
    pub search_query: String,
    pub products: Vec<ProductRowView>,
    pub users: Vec<UserRowView>,
}

/// Display the dashboard with the selected tab.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<DashboardTemplate> {
    let tab = AdminTab::parse(query.tab.as_deref());
    let search_query = query.q.unwrap_or_default().trim().to_string();

    let (products, users) = match tab {
        AdminTab::Products => {
            let products = state.admin_products().list()?;
            let rows = products
                .iter()
                .filter(|p| name_matches(p.name(), &search_query))
                .map(ProductRowView::from)
                .collect();
            (rows, Vec::new())
        }
        AdminTab::Users => {
            let users = state.users().list()?;
            let rows = users
                .iter()
                .filter(|u| name_matches(&u.name, &search_query))
                .map(UserRowView::from)
                .collect();
            (Vec::new(), rows)
        }
    };

    Ok(DashboardTemplate {
        products_tab: tab == AdminTab::Products,
        search_query,
        products,
        users,
    })
}

/// Case-insensitive substring match; an empty search matches everything.
fn name_matches(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}
