//! Store fixtures
//!
//! Every fixture gets its own private SQLite in-memory database, so tests
//! can run in parallel without cleaning up after each other.

use std::sync::Arc;

use accountd::backend::auth::{AccountService, BcryptHasher, JwtIssuer, SqliteUserRepository};

/// Signing secret shared by fixtures and assertions
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Lowest bcrypt cost, keeps hashing fast in tests
pub const TEST_COST: u32 = 4;

/// Fresh, schema-initialised SQLite repository
pub async fn create_test_repository() -> SqliteUserRepository {
    SqliteUserRepository::in_memory()
        .await
        .expect("Failed to create test database")
}

/// Account service over a fresh SQLite store
pub async fn create_test_service() -> AccountService {
    let repository = create_test_repository().await;
    AccountService::new(
        Arc::new(repository),
        Arc::new(BcryptHasher::new(TEST_COST)),
        Arc::new(JwtIssuer::new(TEST_SECRET, 3600)),
    )
}
