/**
 * Account CRUD Handlers
 *
 * HTTP handlers for the `/users` collection. Each handler extracts its
 * input, runs request validation where the body needs it, calls the
 * account service and maps the result to a response. Service errors are
 * returned as `AccountError`, which renders itself as JSON.
 *
 * # Routes
 *
 * - `GET /users` - list accounts (bearer token required)
 * - `GET /users/{id}` - one account
 * - `POST /users` - register
 * - `PUT /users/{id}` - overwrite fields
 * - `DELETE /users/{id}` - delete (bearer token required)
 *
 * Responses never include the password hash.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::service::AccountService;
use crate::backend::error::AccountError;
use crate::backend::middleware::{AuthUser, JsonBody};
use crate::shared::{validate_create, AccountPatch, AccountResponse, CreateAccountRequest};

/// List every account
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid bearer token
pub async fn list_users(
    State(service): State<AccountService>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<AccountResponse>>, AccountError> {
    tracing::debug!("User {} listing accounts", caller.id);
    let accounts = service.find_all().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Fetch one account by id
///
/// # Errors
///
/// * `400 Bad Request` - id is not an integer (path rejection)
/// * `404 Not Found` - no such account
pub async fn get_user(
    State(service): State<AccountService>,
    Path(id): Path<i64>,
) -> Result<Json<AccountResponse>, AccountError> {
    let account = service.find_one(id).await?;
    Ok(Json(account.into()))
}

/// Register a new account
///
/// # Example Request
///
/// ```http
/// POST /users HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice123", "email": "a@x.com", "password": "Passw0rd" }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, or username, email or password fails validation
/// * `409 Conflict` - email already registered
pub async fn create_user(
    State(service): State<AccountService>,
    JsonBody(request): JsonBody<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AccountError> {
    tracing::info!("Signup request for email: {}", request.email);

    if let Err(e) = validate_create(&request) {
        tracing::warn!("Rejected signup: {}", e);
        return Err(e.into());
    }

    let account = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Overwrite the fields present in the body
///
/// The body is not validated and `password_hash` is written as given.
///
/// # Errors
///
/// * `400 Bad Request` - malformed body or non-integer id
/// * `404 Not Found` - no such account
/// * `409 Conflict` - new email already registered
pub async fn update_user(
    State(service): State<AccountService>,
    Path(id): Path<i64>,
    JsonBody(patch): JsonBody<AccountPatch>,
) -> Result<Json<AccountResponse>, AccountError> {
    let account = service.update(id, patch).await?;
    Ok(Json(account.into()))
}

/// Delete an account
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid bearer token
/// * `404 Not Found` - no such account
pub async fn delete_user(
    State(service): State<AccountService>,
    AuthUser(caller): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AccountError> {
    tracing::info!("User {} deleting account {}", caller.id, id);
    service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
