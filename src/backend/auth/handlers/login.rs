/**
 * Login Handler
 *
 * `POST /users/login` exchanges an email and password for a signed bearer
 * token.
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 with the same body
 * - The token carries only the account id and its expiry
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::service::AccountService;
use crate::backend::error::AccountError;
use crate::backend::middleware::JsonBody;
use crate::shared::{validate_login, LoginRequest, TokenResponse};

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /users/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "Passw0rd" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, email malformed or password empty
/// * `401 Unauthorized` - credentials do not match an account
pub async fn login(
    State(service): State<AccountService>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, AccountError> {
    validate_login(&request)?;
    let response = service.login(request).await?;
    Ok(Json(response))
}
