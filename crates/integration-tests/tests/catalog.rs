//! Home page and product listing.

use std::sync::Arc;

use axum::http::StatusCode;
use shutterhive_integration_tests::TestApp;
use shutterhive_storefront::config::StorefrontConfig;
use shutterhive_storefront::db::InMemoryProducts;
use shutterhive_storefront::state::Repositories;

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::new();
    let resp = app.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_security_and_request_id_headers() {
    let mut app = TestApp::new();
    let resp = app.get("/health").await;

    assert_eq!(
        resp.headers.get("x-frame-options").map(|v| v.as_bytes()),
        Some(&b"DENY"[..])
    );
    assert!(resp.headers.contains_key("content-security-policy"));
    assert!(resp.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_home_features_rentable_products() {
    let mut app = TestApp::new();
    let resp = app.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Canon EOS 1500D DSLR Camera"));
    assert!(resp.body.contains("₹500/day"));
    assert!(resp.body.contains("Nikon Z6 II Mirrorless Camera"));
    // Not rentable, so not featured
    assert!(!resp.body.contains("Godox SL-60W LED Video Light"));
}

#[tokio::test]
async fn test_listing_shows_whole_catalog() {
    let mut app = TestApp::new();
    let resp = app.get("/products").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 8 of 8 products"));
    assert!(resp.body.contains("₹1,49,990"));
}

#[tokio::test]
async fn test_search_matches_features() {
    let mut app = TestApp::new();
    let resp = app.get("/products?q=4k").await;

    assert!(resp.body.contains("Showing 2 of 8 products"));
    assert!(resp.body.contains("Sony Alpha a7 III Mirrorless Camera"));
    assert!(resp.body.contains("Nikon Z6 II Mirrorless Camera"));
}

#[tokio::test]
async fn test_category_and_price_filters() {
    let mut app = TestApp::new();
    let resp = app
        .get("/products?category=accessory&min_price=10000&max_price=20000")
        .await;

    assert!(resp.body.contains("Showing 2 of 8 products"));
    assert!(resp.body.contains("Manfrotto Professional Tripod"));
    assert!(resp.body.contains("Lowepro ProTactic 450 AW II Camera Backpack"));
}

#[tokio::test]
async fn test_repeated_category_keys() {
    let mut app = TestApp::new();
    let resp = app.get("/products?category=lighting&category=camera").await;

    assert!(resp.body.contains("Showing 4 of 8 products"));
}

#[tokio::test]
async fn test_rental_only_filter() {
    let mut app = TestApp::new();
    let resp = app.get("/products?rental=on").await;

    assert!(resp.body.contains("Showing 4 of 8 products"));
    assert!(!resp.body.contains("SanDisk Extreme Pro 128GB SD Card"));
}

#[tokio::test]
async fn test_sort_by_price_ascending() {
    let mut app = TestApp::new();
    let resp = app.get("/products?sort=price-low").await;

    let sd_card = resp.body.find("SanDisk Extreme Pro").expect("SD card listed");
    let nikon = resp.body.find("Nikon Z6 II").expect("Nikon listed");
    assert!(sd_card < nikon, "cheapest product should come first");
}

#[tokio::test]
async fn test_empty_state() {
    let mut app = TestApp::new();
    let resp = app.get("/products?q=drone").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("No products found matching your search."));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let mut app = TestApp::new();
    assert_eq!(app.get("/no-such-page").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_catalog() {
    let repositories = Repositories {
        catalog: Arc::new(InMemoryProducts::new(Vec::new())),
        ..Repositories::seeded().expect("seed data is valid")
    };
    let mut app = TestApp::with_repositories(StorefrontConfig::default(), repositories);

    let resp = app.get("/").await;
    assert!(resp.body.contains("No rental gear is available right now."));

    let resp = app.get("/products").await;
    assert!(resp.body.contains("Showing 0 of 0 products"));
}
