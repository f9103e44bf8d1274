//! Application setup integration tests
//!
//! Builds the app the way the binary does, from configuration, and checks
//! that the chosen store and signing settings take effect.

#![cfg(feature = "ssr")]

#[macro_use]
mod common;

use std::collections::HashMap;

use accountd::backend::server::{create_app, ServerConfig};
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::send;

fn config(database_url: &str) -> ServerConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("DATABASE_URL", database_url.to_string()),
        ("JWT_KEY", "setup-test-secret".to_string()),
        ("BCRYPT_COST", "4".to_string()),
    ]);
    assert_ok!(ServerConfig::from_lookup(|name| vars.get(name).cloned()))
}

async fn register_and_login(router: &axum::Router, email: &str) -> String {
    let (status, _) = send(
        router,
        Method::POST,
        "/users",
        Some(json!({ "username": "setup", "email": email, "password": "Passw0rd" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        router,
        Method::POST,
        "/users/login",
        Some(json!({ "email": email, "password": "Passw0rd" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token is a string").to_string()
}

#[tokio::test]
async fn test_memory_store_app() {
    let app = assert_ok!(create_app(&config("memory")).await);

    let token = register_and_login(&app, "mem@example.com").await;
    let (status, body) = send(&app, Method::GET, "/users", None, Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_sqlite_file_store_survives_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("accounts.db").display());

    let token = {
        let app = assert_ok!(create_app(&config(&url)).await);
        register_and_login(&app, "disk@example.com").await
    };

    // Same file and key: the account and its token are still valid
    let app = assert_ok!(create_app(&config(&url)).await);
    let (status, body) = send(&app, Method::GET, "/users", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["email"], "disk@example.com");

    assert_error_body!(
        send(
            &app,
            Method::POST,
            "/users",
            Some(json!({ "username": "again", "email": "disk@example.com", "password": "Passw0rd" })),
            None,
        )
        .await,
        StatusCode::CONFLICT,
        "Email already registered"
    );
}

#[tokio::test]
async fn test_tokens_do_not_cross_signing_keys() {
    let app = assert_ok!(create_app(&config("memory")).await);
    let token = register_and_login(&app, "key@example.com").await;

    let mut other = config("memory");
    other.jwt_key = "a-different-secret".to_string();
    let other_app = assert_ok!(create_app(&other).await);

    assert_error_body!(
        send(&other_app, Method::GET, "/users", None, Some(&token)).await,
        StatusCode::UNAUTHORIZED,
        "Login first to access this endpoint."
    );
}
