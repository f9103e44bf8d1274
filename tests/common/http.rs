//! In-process HTTP helpers
//!
//! Requests are driven straight through the router with
//! `tower::ServiceExt::oneshot`; no socket is opened.

use accountd::backend::auth::AccountService;
use accountd::backend::routes::create_router;
use accountd::backend::server::AppState;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use super::database::create_test_service;

/// Router plus a handle on the service behind it
pub struct TestApp {
    pub router: Router,
    pub service: AccountService,
}

impl TestApp {
    pub async fn new() -> Self {
        let service = create_test_service().await;
        let router = create_router(AppState::new(service.clone()));
        Self { router, service }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        send(&self.router, method, uri, body, token).await
    }
}

/// Send a request, returning the status and the body parsed as JSON
/// (`Null` for empty bodies, a JSON string for non-JSON bodies)
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, super::auth_header(token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}
