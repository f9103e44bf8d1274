/**
 * Server Initialization
 *
 * Wires configuration into a running router:
 * 1. Open the account store named by `DATABASE_URL`
 * 2. Build the bcrypt hasher and JWT issuer from configuration
 * 3. Create the account service and application state
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::{AccountService, BcryptHasher, JwtIssuer, UserRepository};
use crate::backend::error::RepositoryError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_repository, ServerConfig};
use crate::backend::server::state::AppState;

/// Build the account service for `config` on top of `repository`
pub fn build_service(config: &ServerConfig, repository: Arc<dyn UserRepository>) -> AccountService {
    AccountService::new(
        repository,
        Arc::new(BcryptHasher::new(config.bcrypt_cost)),
        Arc::new(JwtIssuer::new(config.jwt_key.as_bytes(), config.jwt_expire_secs)),
    )
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the account store cannot be opened.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, RepositoryError> {
    tracing::info!("Initializing account server");

    let repository = load_repository(&config.database_url).await?;
    let service = build_service(config, repository);
    let app = create_router(AppState::new(service));

    tracing::info!("Router configured");
    Ok(app)
}
