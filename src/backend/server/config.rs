/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first). Every value has a development default except
 * `JWT_KEY`, which release builds require.
 *
 * | Variable       | Default                          |
 * |----------------|----------------------------------|
 * | `DATABASE_URL` | `sqlite://accounts.db?mode=rwc`  |
 * | `JWT_KEY`      | dev-only fallback                |
 * | `JWT_EXPIRE`   | `3600` (seconds)                 |
 * | `BCRYPT_COST`  | `12`                             |
 * | `SERVER_PORT`  | `3000`                           |
 *
 * `DATABASE_URL=memory` keeps accounts in process memory.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::{InMemoryUserRepository, SqliteUserRepository, UserRepository};
use crate::backend::error::RepositoryError;

const DEFAULT_DATABASE_URL: &str = "sqlite://accounts.db?mode=rwc";
const DEV_JWT_KEY: &str = "dev-secret-change-me";
const DEFAULT_JWT_EXPIRE_SECS: i64 = 3600;
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-wide server settings
#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_key: String,
    pub jwt_expire_secs: i64,
    pub bcrypt_cost: u32,
    pub port: u16,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("jwt_key", &"<redacted>")
            .field("jwt_expire_secs", &self.jwt_expire_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .finish()
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let jwt_key = match lookup("JWT_KEY").filter(|key| !key.is_empty()) {
            Some(key) => key,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_KEY not set, using the development signing key");
                DEV_JWT_KEY.to_string()
            }
            None => return Err(ConfigError::MissingValue("JWT_KEY")),
        };

        let jwt_expire_secs: i64 = parse_or("JWT_EXPIRE", &lookup, DEFAULT_JWT_EXPIRE_SECS)?;
        if jwt_expire_secs <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "JWT_EXPIRE",
                value: jwt_expire_secs.to_string(),
            });
        }

        let bcrypt_cost: u32 = parse_or("BCRYPT_COST", &lookup, bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let port: u16 = parse_or("SERVER_PORT", &lookup, DEFAULT_PORT)?;

        Ok(Self {
            database_url,
            jwt_key,
            jwt_expire_secs,
            bcrypt_cost,
            port,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Open the account store named by `database_url`
///
/// `memory` gives an in-process store. SQLite in-memory URLs get the pinned
/// single-connection pool, since the database dies with its last connection.
/// Anything else is a SQLite URL.
pub async fn load_repository(database_url: &str) -> Result<Arc<dyn UserRepository>, RepositoryError> {
    if database_url == "memory" {
        tracing::warn!("DATABASE_URL=memory, accounts will not survive a restart");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    }

    if is_sqlite_memory_url(database_url) {
        tracing::warn!("In-memory SQLite database, accounts will not survive a restart");
        return Ok(Arc::new(SqliteUserRepository::in_memory().await?));
    }

    tracing::info!("Connecting to database...");
    let repository = SqliteUserRepository::connect(database_url).await?;
    tracing::info!("Database ready");
    Ok(Arc::new(repository))
}

fn is_sqlite_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
