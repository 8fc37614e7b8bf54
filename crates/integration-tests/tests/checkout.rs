//! The checkout wizard across requests.

use std::sync::Arc;

use axum::http::StatusCode;
use shutterhive_integration_tests::{TestApp, address_form};
use shutterhive_storefront::config::StorefrontConfig;
use shutterhive_storefront::db::InMemoryCart;
use shutterhive_storefront::state::Repositories;

async fn submit_address(app: &mut TestApp) {
    let resp = app.post_form("/checkout/address", &address_form()).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/checkout"));
}

async fn submit_payment(app: &mut TestApp) {
    let resp = app
        .post_form("/checkout/payment", &[("payment", "netbanking"), ("delivery", "pickup")])
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_starts_at_address_with_totals() {
    let mut app = TestApp::new();
    let resp = app.get("/checkout").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Shipping Address"));
    assert!(resp.body.contains(r#"value="33""#));
    assert!(resp.body.contains("₹42,000"));
    assert!(resp.body.contains("₹7,560"));
    assert!(resp.body.contains("₹49,760"));
    assert!(resp.body.contains("15 Jul 2023 to 18 Jul 2023 (3 days)"));
}

#[tokio::test]
async fn test_invalid_address_is_rejected() {
    let mut app = TestApp::new();
    let mut form = address_form();
    for (key, value) in &mut form {
        if *key == "phone" {
            *value = "12345";
        }
        if *key == "city" {
            *value = " ";
        }
    }

    let resp = app.post_form("/checkout/address", &form).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Phone Number"));
    assert!(resp.body.contains("City is required"));
    // Entered values are kept
    assert!(resp.body.contains("john.doe@example.com"));

    let resp = app.get("/checkout").await;
    assert!(resp.body.contains(r#"value="33""#));
}

#[tokio::test]
async fn test_forward_and_back() {
    let mut app = TestApp::new();

    submit_address(&mut app).await;
    let resp = app.get("/checkout").await;
    assert!(resp.body.contains("Payment Method"));
    assert!(resp.body.contains(r#"value="66""#));

    submit_payment(&mut app).await;
    let resp = app.get("/checkout").await;
    assert!(resp.body.contains("Review Your Order"));
    assert!(resp.body.contains(r#"value="100""#));
    assert!(resp.body.contains("Net Banking"));
    assert!(resp.body.contains("Pick-up from Store"));
    assert!(resp.body.contains("Bangalore, Karnataka 560001"));

    let resp = app.post_form("/checkout/back", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    let resp = app.get("/checkout").await;
    assert!(resp.body.contains(r#"value="66""#));
}

#[tokio::test]
async fn test_back_from_payment_keeps_address() {
    let mut app = TestApp::new();
    submit_address(&mut app).await;

    app.post_form("/checkout/back", &[]).await;
    let resp = app.get("/checkout").await;

    assert!(resp.body.contains("Shipping Address"));
    assert!(resp.body.contains(r#"value="John Doe""#));
}

#[tokio::test]
async fn test_out_of_step_post_is_ignored() {
    let mut app = TestApp::new();

    let resp = app
        .post_form("/checkout/payment", &[("payment", "upi"), ("delivery", "home")])
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let resp = app.post_form("/checkout/place-order", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let resp = app.get("/checkout").await;
    assert!(resp.body.contains(r#"value="33""#));
}

#[tokio::test]
async fn test_place_order_confirms_and_resets() {
    let mut app = TestApp::new();
    submit_address(&mut app).await;
    submit_payment(&mut app).await;

    let resp = app.post_form("/checkout/place-order", &[]).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Thank you for your order!"));
    assert!(resp.body.contains("SH-"));
    assert!(resp.body.contains("₹49,760"));

    let resp = app.get("/checkout").await;
    assert!(resp.body.contains("Shipping Address"));
    assert!(resp.body.contains(r#"value="33""#));
}

#[tokio::test]
async fn test_sessions_are_per_visitor() {
    let mut app = TestApp::new();
    submit_address(&mut app).await;

    app.clear_cookies();
    let resp = app.get("/checkout").await;

    assert!(resp.body.contains(r#"value="33""#));
}

#[tokio::test]
async fn test_empty_cart_hides_wizard() {
    let repositories = Repositories {
        cart: Arc::new(InMemoryCart::new(Vec::new())),
        ..Repositories::seeded().expect("seed data is valid")
    };
    let mut app = TestApp::with_repositories(StorefrontConfig::default(), repositories);

    let resp = app.get("/checkout").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Your cart is empty."));
    assert!(!resp.body.contains("Shipping Address"));
}

#[tokio::test]
async fn test_empty_cart_refuses_every_step() {
    let repositories = Repositories {
        cart: Arc::new(InMemoryCart::new(Vec::new())),
        ..Repositories::seeded().expect("seed data is valid")
    };
    let mut app = TestApp::with_repositories(StorefrontConfig::default(), repositories);

    let resp = app.post_form("/checkout/address", &address_form()).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let resp = app
        .post_form("/checkout/payment", &[("payment", "upi"), ("delivery", "home")])
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let resp = app.post_form("/checkout/place-order", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert!(!resp.body.contains("Thank you for your order!"));

    let resp = app.get("/checkout").await;
    assert!(resp.body.contains("Your cart is empty."));
}
