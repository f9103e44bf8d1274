//! Authentication test helpers
//!
//! Utilities for creating test users and building Authorization headers.

use accountd::backend::auth::AccountService;
use accountd::shared::{CreateAccountRequest, LoginRequest};
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through the service and log them in
pub async fn create_test_user(
    service: &AccountService,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let account = service
        .create(CreateAccountRequest {
            username: "testuser".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    let token = service
        .login(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?
        .token;

    Ok(TestUser {
        id: account.id,
        email: account.email,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    service: &AccountService,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    create_test_user(service, &unique_email(), "Passw0rd").await
}

pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
