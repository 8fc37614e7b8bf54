//! Admin product create, edit and delete handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use shutterhive_core::ProductId;
use shutterhive_core::admin::{DraftError, ProductDraft};
use tracing::instrument;

use super::PRODUCTS_TAB_PATH;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Add/edit product form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub heading: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub form: ProductDraft,
    pub error: Option<String>,
}

impl ProductFormTemplate {
    fn new_product(form: ProductDraft, error: Option<&DraftError>) -> Self {
        Self {
            heading: "Add Product",
            action: "/admin/products".to_string(),
            submit_label: "Add Product",
            form,
            error: error.map(ToString::to_string),
        }
    }

    fn edit_product(id: &ProductId, form: ProductDraft, error: Option<&DraftError>) -> Self {
        Self {
            heading: "Edit Product",
            action: format!("/admin/products/{id}"),
            submit_label: "Save Changes",
            form,
            error: error.map(ToString::to_string),
        }
    }
}

/// Display an empty add form.
pub async fn new_product() -> ProductFormTemplate {
    ProductFormTemplate::new_product(ProductDraft::default(), None)
}

/// Create a product and return to the products tab.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Form(draft): Form<ProductDraft>,
) -> Result<Response> {
    let product = match draft.clone().validate() {
        Ok(product) => product,
        Err(e) => {
            tracing::info!(error = %e, "Product form rejected");
            let page = ProductFormTemplate::new_product(draft, Some(&e));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let created = state.admin_products().create(product)?;
    let (id, name) = (created.id(), created.name());

    tracing::info!(product_id = %id, name = %name, "Product created");
    add_breadcrumb(
        "admin",
        "Product created",
        Some(&[("product_id", id.as_str())][..]),
    );
    Ok(Redirect::to(PRODUCTS_TAB_PATH).into_response())
}

/// Display the edit form pre-filled from the stored product.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductFormTemplate> {
    let id = ProductId::new(id);
    let product = state
        .admin_products()
        .get(&id)?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductFormTemplate::edit_product(
        &id,
        ProductDraft::from_product(&product),
        None,
    ))
}

/// Replace a product in place and return to the products tab.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(draft): Form<ProductDraft>,
) -> Result<Response> {
    let id = ProductId::new(id);
    let repo = state.admin_products();
    if repo.get(&id)?.is_none() {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    let product = match draft.clone().into_product(id.clone()) {
        Ok(product) => product,
        Err(e) => {
            tracing::info!(product_id = %id, error = %e, "Product form rejected");
            let page = ProductFormTemplate::edit_product(&id, draft, Some(&e));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    repo.update(product)?;

    tracing::info!(product_id = %id, "Product updated");
    Ok(Redirect::to(PRODUCTS_TAB_PATH).into_response())
}

/// Delete a product and return to the products tab.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect> {
    let id = ProductId::new(id);
    let removed = state.admin_products().delete(&id)?;

    tracing::info!(product_id = %id, name = %removed.name(), "Product deleted");
    add_breadcrumb(
        "admin",
        "Product deleted",
        Some(&[("product_id", id.as_str())][..]),
    );
    Ok(Redirect::to(PRODUCTS_TAB_PATH))
}
