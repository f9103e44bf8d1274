/**
 * Router Configuration
 *
 * Assembles the full router: health check, account API, request tracing
 * and a JSON 404 fallback.
 */

use axum::{http::StatusCode, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// - `GET /health` - liveness probe
/// - `/users...` - account API (see `api_routes`)
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(|| async { "OK" }));

    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found", "status": 404 })),
    )
}
