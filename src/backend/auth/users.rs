/**
 * Account Model and Storage
 *
 * This module defines the persisted `Account` record, the `UserRepository`
 * storage capability the account service is built on, and its SQLite
 * implementation.
 *
 * # Schema
 *
 * A single `users` table keyed by an auto-assigned integer id. `email`
 * carries a UNIQUE constraint, which is the source of truth for email
 * uniqueness; `AUTOINCREMENT` keeps ids from ever being reused.
 */

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::RepositoryError;
use crate::shared::{AccountPatch, AccountResponse};

const SCHEMA: &str = include_str!("schema.sql");

/// Account row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Storage-assigned id, immutable
    pub id: i64,
    /// Display name (not unique)
    pub username: String,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
        }
    }
}

/// Row to insert; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Durable keyed storage of accounts
///
/// Writers report how many rows they touched so the service can tell
/// "no such account" apart from success without a second read.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All accounts, ordered by id
    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;

    /// Insert a new account, failing with `UniqueViolation` on a taken email
    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError>;

    /// Overwrite the fields present in `patch`; returns rows affected
    async fn update(&self, id: i64, patch: &AccountPatch) -> Result<u64, RepositoryError>;

    /// Hard delete; returns rows affected
    async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;
}

/// SQLite implementation of [`UserRepository`]
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Open (creating if missing) the database at `url` and apply the schema
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use accountd::backend::auth::users::SqliteUserRepository;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let repo = SqliteUserRepository::connect("sqlite://accounts.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database
    ///
    /// Every SQLite connection to `:memory:` is its own database, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and apply the schema
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        tracing::debug!("users schema applied");
        Ok(())
    }
}

/// Translate unique-constraint failures; anything else stays a database error
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            // SQLite reports "UNIQUE constraint failed: users.email"
            let field = db_err
                .message()
                .rsplit_once("users.")
                .map(|(_, column)| column.to_string())
                .unwrap_or_else(|| "email".to_string());
            return RepositoryError::unique_violation(field);
        }
    }
    RepositoryError::Database(err)
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, username, email, password_hash FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepositoryError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, email, password_hash FROM users WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, email, password_hash FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, email, password_hash
            "#,
        )
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn update(&self, id: i64, patch: &AccountPatch) -> Result<u64, RepositoryError> {
        // Absent fields bind NULL and keep their stored value
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = COALESCE(?1, username),
                email = COALESCE(?2, email),
                password_hash = COALESCE(?3, password_hash)
            WHERE id = ?4
            "#,
        )
        .bind(patch.username.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.password_hash.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn new_account(username: &str, email: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        let first = repo.insert(new_account("alice123", "a@x.com")).await.unwrap();
        let second = repo.insert(new_account("bobby", "b@x.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        repo.insert(new_account("alice123", "a@x.com")).await.unwrap();

        let err = repo.insert(new_account("other", "a@x.com")).await.unwrap_err();
        assert_matches!(err, RepositoryError::UniqueViolation { ref field } if field == "email");
    }

    #[tokio::test]
    async fn test_duplicate_username_allowed() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        repo.insert(new_account("alice123", "a@x.com")).await.unwrap();
        assert!(repo.insert(new_account("alice123", "b@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        let account = repo.insert(new_account("alice123", "a@x.com")).await.unwrap();

        let patch = AccountPatch {
            username: Some("alice456".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.update(account.id, &patch).await.unwrap(), 1);

        let updated = repo.find_by_id(account.id).await.unwrap().unwrap();
        assert_eq!(updated.username, "alice456");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.password_hash, account.password_hash);
    }

    #[tokio::test]
    async fn test_update_missing_row_affects_nothing() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        assert_eq!(repo.update(99, &AccountPatch::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_unique_violation() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        repo.insert(new_account("alice123", "a@x.com")).await.unwrap();
        let bob = repo.insert(new_account("bobby", "b@x.com")).await.unwrap();

        let patch = AccountPatch {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        assert_matches!(
            repo.update(bob.id, &patch).await,
            Err(RepositoryError::UniqueViolation { .. })
        );
    }

    #[tokio::test]
    async fn test_delete_and_ids_not_reused() {
        let repo = SqliteUserRepository::in_memory().await.unwrap();
        let first = repo.insert(new_account("alice123", "a@x.com")).await.unwrap();

        assert_eq!(repo.delete(first.id).await.unwrap(), 1);
        assert_eq!(repo.delete(first.id).await.unwrap(), 0);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());

        let next = repo.insert(new_account("alice123", "a@x.com")).await.unwrap();
        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("accounts.db").display());

        {
            let repo = SqliteUserRepository::connect(&url).await.unwrap();
            repo.insert(new_account("alice123", "a@x.com")).await.unwrap();
            repo.pool().close().await;
        }

        let reopened = SqliteUserRepository::connect(&url).await.unwrap();
        let found = reopened.find_by_email("a@x.com").await.unwrap();
        assert_eq!(found.map(|a| a.username), Some("alice123".to_string()));
    }
}
