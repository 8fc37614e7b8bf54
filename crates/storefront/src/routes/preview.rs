//! Component preview pages.
//!
//! Mounted only when `STOREFRONT_PREVIEW_ROUTES` is on. Each page renders a
//! single component against live data so it can be inspected in isolation.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use shutterhive_core::ProductId;
use shutterhive_core::checkout::OrderSummary;
use tracing::instrument;

use super::checkout::{LineView, SummaryView};
use super::products::ProductCardView;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// A link on the preview index.
#[derive(Clone)]
pub struct PreviewLink {
    pub href: String,
    pub label: String,
}

/// Preview index template.
#[derive(Template, WebTemplate)]
#[template(path = "preview/index.html")]
pub struct PreviewIndexTemplate {
    pub links: Vec<PreviewLink>,
}

/// Single product card preview.
#[derive(Template, WebTemplate)]
#[template(path = "preview/product_card.html")]
pub struct ProductCardPreviewTemplate {
    pub product: ProductCardView,
}

/// Order summary panel preview.
#[derive(Template, WebTemplate)]
#[template(path = "preview/order_summary.html")]
pub struct OrderSummaryPreviewTemplate {
    pub lines: Vec<LineView>,
    pub summary: SummaryView,
}

/// List every previewable component.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>) -> Result<PreviewIndexTemplate> {
    let mut links: Vec<PreviewLink> = state
        .catalog()
        .list()?
        .iter()
        .map(|p| PreviewLink {
            href: format!("/preview/product-card/{}", p.id()),
            label: format!("Product card: {}", p.name()),
        })
        .collect();
    links.push(PreviewLink {
        href: "/preview/order-summary".to_string(),
        label: "Order summary".to_string(),
    });

    Ok(PreviewIndexTemplate { links })
}

/// Render one catalog product's card.
#[instrument(skip(state))]
pub async fn product_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductCardPreviewTemplate> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .get(&id)?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductCardPreviewTemplate {
        product: ProductCardView::from(&product),
    })
}

/// Render the checkout order summary for the current cart.
#[instrument(skip_all)]
pub async fn order_summary(State(state): State<AppState>) -> Result<OrderSummaryPreviewTemplate> {
    let lines = state.cart().lines()?;
    let summary = OrderSummary::from_lines(&lines);

    Ok(OrderSummaryPreviewTemplate {
        lines: lines.iter().map(LineView::from).collect(),
        summary: summary.into(),
    })
}
