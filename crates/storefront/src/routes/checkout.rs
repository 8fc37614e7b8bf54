//! Checkout wizard route handlers.
//!
//! `GET /checkout` renders whichever step the visitor's session is on. Each
//! step posts to its own endpoint, which applies one transition and
//! redirects back (POST/redirect/GET). A post for a step the visitor is not
//! on is logged and redirected without changing anything.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use shutterhive_core::checkout::{
    AddressError, AddressInput, CartLine, CheckoutStep, DeliveryMethod, OrderSummary,
    PaymentMethod, ShippingAddress, TAX_RATE,
};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::{CheckoutSession, WizardError, keys};
use crate::state::AppState;

const CHECKOUT_PATH: &str = "/checkout";

// =============================================================================
// View Types
// =============================================================================

/// One cart line, pre-formatted.
#[derive(Clone)]
pub struct LineView {
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    /// Unit price, with `/day` for rentals.
    pub unit_price: String,
    /// `15 Jul 2023 to 18 Jul 2023 (3 days)` for rentals.
    pub rental_dates: Option<String>,
    pub line_total: String,
}

impl From<&CartLine> for LineView {
    fn from(line: &CartLine) -> Self {
        let rental_dates = line.rental_period().map(|period| {
            let days = period.days();
            format!(
                "{} to {} ({days} day{})",
                period.start().format("%d %b %Y"),
                period.end().format("%d %b %Y"),
                if days == 1 { "" } else { "s" }
            )
        });
        let unit_price = if line.is_rental() {
            format!("{}/day", line.unit_price)
        } else {
            line.unit_price.to_string()
        };

        Self {
            name: line.name.clone(),
            image_url: line.image_url.clone(),
            quantity: line.quantity(),
            unit_price,
            rental_dates,
            line_total: line.line_total().to_string(),
        }
    }
}

/// Order totals, pre-formatted.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub tax_label: String,
    pub tax: String,
    pub delivery: String,
    pub total: String,
}

impl From<OrderSummary> for SummaryView {
    fn from(summary: OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.to_string(),
            tax_label: format!("GST ({}%)", (TAX_RATE * Decimal::ONE_HUNDRED).normalize()),
            tax: summary.tax.to_string(),
            delivery: summary.delivery.to_string(),
            total: summary.total.to_string(),
        }
    }
}

/// A step in the progress header.
#[derive(Clone)]
pub struct StepView {
    pub number: usize,
    pub label: &'static str,
    pub is_current: bool,
    pub is_done: bool,
}

/// A radio button.
#[derive(Clone)]
pub struct ChoiceView {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// A validation message attached to a form field.
#[derive(Clone)]
pub struct FieldErrorView {
    pub field: &'static str,
    pub message: String,
}

impl From<&AddressError> for FieldErrorView {
    fn from(error: &AddressError) -> Self {
        Self {
            field: error.field_name(),
            message: error.to_string(),
        }
    }
}

/// A validated address laid out for display.
#[derive(Clone)]
pub struct AddressView {
    pub full_name: String,
    pub lines: Vec<String>,
    pub phone: String,
    pub email: String,
}

impl From<&ShippingAddress> for AddressView {
    fn from(address: &ShippingAddress) -> Self {
        let mut lines = vec![address.address.clone()];
        if let Some(landmark) = &address.landmark {
            lines.push(format!("Near {landmark}"));
        }
        lines.push(format!(
            "{}, {} {}",
            address.city, address.state, address.pincode
        ));

        Self {
            full_name: address.full_name.clone(),
            lines,
            phone: address.phone.to_string(),
            email: address.email.to_string(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Checkout wizard page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub progress: u8,
    pub steps: Vec<StepView>,
    pub at_address: bool,
    pub at_payment: bool,
    pub at_review: bool,
    pub form: AddressInput,
    pub errors: Vec<FieldErrorView>,
    pub payment_options: Vec<ChoiceView>,
    pub delivery_options: Vec<ChoiceView>,
    pub address: Option<AddressView>,
    pub payment_label: &'static str,
    pub delivery_label: &'static str,
    pub lines: Vec<LineView>,
    pub summary: SummaryView,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub order_number: String,
    pub address: AddressView,
    pub payment_label: &'static str,
    pub delivery_label: &'static str,
    pub lines: Vec<LineView>,
    pub summary: SummaryView,
}

// =============================================================================
// Form Types
// =============================================================================

/// Payment step form.
#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    #[serde(default)]
    pub payment: PaymentMethod,
    #[serde(default)]
    pub delivery: DeliveryMethod,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the wizard at the visitor's current step.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let checkout = load(&session).await?;
    let form = checkout
        .address
        .as_ref()
        .map(ShippingAddress::to_input)
        .unwrap_or_default();

    Ok(render(&state, &checkout, form, Vec::new())?.into_response())
}

/// Validate the address form and advance to payment.
#[instrument(skip_all)]
pub async fn submit_address(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<AddressInput>,
) -> Result<Response> {
    if state.cart().lines()?.is_empty() {
        return Ok(empty_cart("address"));
    }
    let mut checkout = load(&session).await?;

    match checkout.submit_address(&input) {
        Ok(()) => {
            save(&session, &checkout).await?;
            add_breadcrumb("checkout", "Address accepted", None);
            Ok(Redirect::to(CHECKOUT_PATH).into_response())
        }
        Err(WizardError::InvalidAddress(errors)) => {
            let fields: Vec<&str> = errors.iter().map(AddressError::field_name).collect();
            tracing::info!(?fields, "Address rejected");
            let errors = errors.iter().map(FieldErrorView::from).collect();
            let page = render(&state, &checkout, input, errors)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err @ WizardError::WrongStep { .. }) => Ok(out_of_step(&err)),
    }
}

/// Record the payment and delivery choice and advance to review.
#[instrument(skip_all)]
pub async fn submit_payment(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PaymentForm>,
) -> Result<Response> {
    if state.cart().lines()?.is_empty() {
        return Ok(empty_cart("payment"));
    }
    let mut checkout = load(&session).await?;

    if let Err(err) = checkout.submit_payment(form.payment, form.delivery) {
        return Ok(out_of_step(&err));
    }

    save(&session, &checkout).await?;
    tracing::info!(
        payment = form.payment.as_str(),
        delivery = form.delivery.as_str(),
        "Payment method chosen"
    );
    add_breadcrumb(
        "checkout",
        "Payment method chosen",
        Some(&[("payment", form.payment.as_str())][..]),
    );
    Ok(Redirect::to(CHECKOUT_PATH).into_response())
}

/// Step back. Never validated.
#[instrument(skip_all)]
pub async fn back(session: Session) -> Result<Redirect> {
    let mut checkout = load(&session).await?;
    checkout.back();
    save(&session, &checkout).await?;
    Ok(Redirect::to(CHECKOUT_PATH))
}

/// Place the order and reset the wizard.
#[instrument(skip_all)]
pub async fn place_order(State(state): State<AppState>, session: Session) -> Result<Response> {
    let lines = state.cart().lines()?;
    if lines.is_empty() {
        return Ok(empty_cart("place-order"));
    }
    let mut checkout = load(&session).await?;

    let order = match checkout.place_order() {
        Ok(order) => order,
        Err(err) => return Ok(out_of_step(&err)),
    };
    save(&session, &checkout).await?;

    let summary = OrderSummary::from_lines(&lines);
    let order_number = order_number();

    tracing::info!(
        order_number = %order_number,
        total = %summary.total,
        payment = order.payment.as_str(),
        delivery = order.delivery.as_str(),
        "Order placed"
    );

    Ok(ConfirmationTemplate {
        order_number,
        address: AddressView::from(&order.address),
        payment_label: order.payment.label(),
        delivery_label: order.delivery.label(),
        lines: lines.iter().map(LineView::from).collect(),
        summary: summary.into(),
    }
    .into_response())
}

// =============================================================================
// Helpers
// =============================================================================

async fn load(session: &Session) -> Result<CheckoutSession> {
    Ok(session
        .get::<CheckoutSession>(keys::CHECKOUT)
        .await?
        .unwrap_or_default())
}

async fn save(session: &Session, checkout: &CheckoutSession) -> Result<()> {
    session.insert(keys::CHECKOUT, checkout).await?;
    Ok(())
}

fn out_of_step(err: &WizardError) -> Response {
    tracing::warn!(error = %err, "Checkout form posted out of step");
    Redirect::to(CHECKOUT_PATH).into_response()
}

fn empty_cart(form: &'static str) -> Response {
    tracing::warn!(form, "Checkout form posted with an empty cart");
    Redirect::to(CHECKOUT_PATH).into_response()
}

fn render(
    state: &AppState,
    checkout: &CheckoutSession,
    form: AddressInput,
    errors: Vec<FieldErrorView>,
) -> Result<CheckoutTemplate> {
    let lines = state.cart().lines()?;
    let summary = OrderSummary::from_lines(&lines);

    Ok(CheckoutTemplate {
        progress: checkout.step.progress(),
        steps: step_views(checkout.step),
        at_address: checkout.step == CheckoutStep::Address,
        at_payment: checkout.step == CheckoutStep::Payment,
        at_review: checkout.step.is_last(),
        form,
        errors,
        payment_options: PaymentMethod::ALL
            .iter()
            .map(|m| ChoiceView {
                value: m.as_str(),
                label: m.label(),
                checked: *m == checkout.payment,
            })
            .collect(),
        delivery_options: DeliveryMethod::ALL
            .iter()
            .map(|m| ChoiceView {
                value: m.as_str(),
                label: m.label(),
                checked: *m == checkout.delivery,
            })
            .collect(),
        address: checkout.address.as_ref().map(AddressView::from),
        payment_label: checkout.payment.label(),
        delivery_label: checkout.delivery.label(),
        lines: lines.iter().map(LineView::from).collect(),
        summary: summary.into(),
    })
}

fn step_views(current: CheckoutStep) -> Vec<StepView> {
    CheckoutStep::ALL
        .iter()
        .enumerate()
        .map(|(index, step)| StepView {
            number: index + 1,
            label: step.label(),
            is_current: *step == current,
            is_done: *step < current,
        })
        .collect()
}

/// A short human-friendly order reference such as `SH-1A2B3C4D`.
fn order_number() -> String {
    let id: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    format!("SH-{}", id.to_uppercase())
}
