/**
 * Error Conversion
 *
 * `AccountError` implements Axum's `IntoResponse`, so handlers can return it
 * directly. The body is JSON:
 *
 * ```json
 * { "error": "Invalid Email or Password", "status": 401 }
 * ```
 *
 * Rejected JSON bodies (bad syntax, wrong field types, missing content type)
 * are folded into `AccountError` too, so they answer 400 in the same shape.
 */

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::AccountError;
use crate::shared::SharedError;

impl From<JsonRejection> for AccountError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::Validation(SharedError::serialization(rejection.body_text()))
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
