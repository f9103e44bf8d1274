/**
 * JSON Body Extractor
 *
 * `axum::Json` with its rejection replaced by `AccountError`, so a body that
 * is not valid JSON, or has a field of the wrong type, answers 400 in the
 * usual `{"error", "status"}` shape instead of axum's plain-text 422.
 */

use axum::extract::FromRequest;

use crate::backend::error::AccountError;

/// Request body parsed as JSON
///
/// ```rust,no_run
/// use accountd::backend::middleware::JsonBody;
/// use accountd::shared::LoginRequest;
///
/// async fn handler(JsonBody(request): JsonBody<LoginRequest>) -> String {
///     request.email
/// }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AccountError))]
pub struct JsonBody<T>(pub T);
