//! In-memory [`UserRepository`].
//!
//! Mirrors the SQLite table's rules (ids assigned from 1 and never reused,
//! unique email) so the account service behaves the same on either store.
//! Used by tests and by `DATABASE_URL=memory` runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::auth::users::{Account, NewAccount, UserRepository};
use crate::backend::error::RepositoryError;
use crate::shared::AccountPatch;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Account>,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && Some(row.id) != except)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|row| row.email == email).cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let mut table = self.table.write().await;
        if table.email_taken(&account.email, None) {
            return Err(RepositoryError::unique_violation("email"));
        }

        table.last_id += 1;
        let row = Account {
            id: table.last_id,
            username: account.username,
            email: account.email,
            password_hash: account.password_hash,
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, patch: &AccountPatch) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(0);
        }
        if let Some(email) = &patch.email {
            if table.email_taken(email, Some(id)) {
                return Err(RepositoryError::unique_violation("email"));
            }
        }

        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(username) = &patch.username {
            row.username = username.clone();
        }
        if let Some(email) = &patch.email {
            row.email = email.clone();
        }
        if let Some(password_hash) = &patch.password_hash {
            row.password_hash = password_hash.clone();
        }
        Ok(1)
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
