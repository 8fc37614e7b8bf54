//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Home page
//! GET  /health                        - Health check
//!
//! # Catalog
//! GET  /products                      - Product listing (search, filter, sort)
//!
//! # Checkout
//! GET  /checkout                      - Wizard at the current step
//! POST /checkout/address              - Submit shipping address
//! POST /checkout/payment              - Submit payment and delivery choice
//! POST /checkout/back                 - Previous step
//! POST /checkout/place-order          - Confirm order
//!
//! # Admin
//! GET  /admin                         - Dashboard (?tab=products|users&q=)
//! GET  /admin/products/new            - Add product form
//! POST /admin/products                - Create product
//! GET  /admin/products/{id}/edit      - Edit product form
//! POST /admin/products/{id}           - Update product
//! POST /admin/products/{id}/delete    - Delete product
//!
//! # Preview (only when STOREFRONT_PREVIEW_ROUTES is on)
//! GET  /preview                       - Component index
//! GET  /preview/product-card/{id}     - One product card
//! GET  /preview/order-summary         - Checkout order summary
//! ```

pub mod admin;
pub mod checkout;
pub mod home;
pub mod preview;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/address", post(checkout::submit_address))
        .route("/payment", post(checkout::submit_payment))
        .route("/back", post(checkout::back))
        .route("/place-order", post(checkout::place_order))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::index))
        .route("/products", post(admin::products::create))
        .route("/products/new", get(admin::products::new_product))
        .route("/products/{id}", post(admin::products::update))
        .route("/products/{id}/edit", get(admin::products::edit))
        .route("/products/{id}/delete", post(admin::products::delete))
}

/// Create the component preview routes router.
pub fn preview_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(preview::index))
        .route("/product-card/{id}", get(preview::product_card))
        .route("/order-summary", get(preview::order_summary))
}

/// Create all routes for the storefront.
///
/// Preview routes are included only when `preview` is true.
pub fn routes(preview: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/products", get(products::index))
        .nest("/checkout", checkout_routes())
        .nest("/admin", admin_routes());

    if preview {
        router.nest("/preview", preview_routes())
    } else {
        router
    }
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
