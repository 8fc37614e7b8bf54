//! Integration tests for the ShutterHive storefront.
//!
//! Tests drive the full router in process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed:
//!
//! ```bash
//! cargo test -p shutterhive-integration-tests
//! ```
//!
//! [`TestApp`] keeps the session cookie between requests the way a browser
//! would, which is what the checkout wizard tests rely on.

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use shutterhive_storefront::config::StorefrontConfig;
use shutterhive_storefront::state::{AppState, Repositories};
use tower::ServiceExt;

/// A storefront router plus the visitor's cookie.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Default configuration with the seeded demo data.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let repositories = Repositories::seeded().expect("seed data is valid");
        Self::with_repositories(config, repositories)
    }

    #[must_use]
    pub fn with_repositories(config: StorefrontConfig, repositories: Repositories) -> Self {
        let state = AppState::new(config, repositories);
        Self {
            router: shutterhive_storefront::app(state),
            cookie: None,
        }
    }

    /// Forget the session cookie, as a new visitor.
    pub fn clear_cookies(&mut self) {
        self.cookie = None;
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri);
        self.send(request, Body::empty()).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        self.send(request, Body::from(body)).await
    }

    async fn send(&mut self, mut request: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = request.body(body).expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            let pair = set_cookie.split(';').next().unwrap_or_default().to_string();
            self.cookie = Some(pair);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// A valid shipping address form.
#[must_use]
pub fn address_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full_name", "John Doe"),
        ("phone", "+91 98765 43210"),
        ("email", "john.doe@example.com"),
        ("pincode", "560001"),
        ("address", "123 MG Road"),
        ("city", "Bangalore"),
        ("state", "Karnataka"),
        ("landmark", ""),
    ]
}
