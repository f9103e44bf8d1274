/**
 * Bearer Token Guard
 *
 * Extractor for routes that require a logged-in caller. It reads the
 * `Authorization: Bearer <token>` header, verifies the token and loads the
 * account it was issued for. Any failure rejects the request with 401 before
 * the handler runs.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::{Account, AccountService};
use crate::backend::error::{AccountError, LOGIN_REQUIRED};

/// Authenticated caller, resolved from the bearer token
///
/// Add it as a handler parameter to protect the route:
///
/// ```rust,no_run
/// use accountd::backend::middleware::AuthUser;
///
/// async fn whoami(AuthUser(account): AuthUser) -> String {
///     account.email
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub Account);

/// Token from an `Authorization` header value of the form `Bearer <token>`
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl<S> FromRequestParts<S> for AuthUser
where
    AccountService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AccountError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let service = AccountService::from_ref(state);

        let Some(token) = bearer_token(parts) else {
            tracing::warn!("Missing or malformed Authorization header");
            return Err(AccountError::unauthorized(LOGIN_REQUIRED));
        };

        let account = service.authenticate(token).await?;
        Ok(AuthUser(account))
    }
}
