/**
 * Account Service
 *
 * Business rules for accounts: email uniqueness on creation, not-found
 * semantics for reads and writes, password hashing, and credential checks
 * that issue a bearer token.
 *
 * # Collaborators
 *
 * The service owns no storage and no key material. It is handed a
 * `UserRepository`, a `PasswordHasher` and a `TokenIssuer` at construction
 * and keeps no per-request state between calls.
 *
 * # Email Uniqueness
 *
 * `create` looks the email up before inserting to give a clean `Conflict`
 * in the common case. The lookup and the insert are not atomic, so two
 * concurrent registrations can both pass the lookup; the storage unique
 * constraint rejects the second insert and that rejection is reported as
 * the same `Conflict`.
 *
 * # Login Timing
 *
 * An unknown email still runs one bcrypt verification, against a hash of a
 * fixed throwaway password made with the configured hasher, so it costs
 * about as much as a wrong password.
 */

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{IdentityClaim, TokenIssuer};
use crate::backend::auth::users::{Account, NewAccount, UserRepository};
use crate::backend::error::{AccountError, RepositoryError, LOGIN_REQUIRED};
use crate::shared::{AccountPatch, CreateAccountRequest, LoginRequest, TokenResponse};

const DUMMY_PASSWORD: &str = "not-a-real-password";

/// Account operations over injected storage, hashing and token capabilities
#[derive(Clone)]
pub struct AccountService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    dummy_hash: Arc<OnceCell<String>>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Every account, ordered by id
    pub async fn find_all(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.repository.find_all().await?)
    }

    /// Account with `id`, or `NotFound`
    pub async fn find_one(&self, id: i64) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::not_found("User not found"))
    }

    /// Account registered under `email`, or `NotFound`
    pub async fn find_by_email(&self, email: &str) -> Result<Account, AccountError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::not_found(format!("User with email {} not found", email)))
    }

    /// Register a new account
    ///
    /// The input is assumed to have passed request validation already; only
    /// email uniqueness is checked here.
    ///
    /// # Errors
    ///
    /// * `Conflict` - the email is already registered
    pub async fn create(&self, input: CreateAccountRequest) -> Result<Account, AccountError> {
        if self.repository.find_by_email(&input.email).await?.is_some() {
            tracing::warn!("Email already exists: {}", input.email);
            return Err(AccountError::conflict("Email already registered"));
        }

        let password_hash = self.hash_password(input.password).await?;

        let account = self
            .repository
            .insert(NewAccount {
                username: input.username,
                email: input.email,
                password_hash,
            })
            .await
            .map_err(|e| {
                if let RepositoryError::UniqueViolation { field } = &e {
                    tracing::warn!("Concurrent registration lost on unique {}", field);
                }
                AccountError::from(e)
            })?;

        tracing::info!("User created: {} ({})", account.id, account.email);
        Ok(account)
    }

    /// Overwrite the fields present in `patch` and return the fresh record
    ///
    /// Fields are written verbatim. In particular `password_hash` is stored
    /// exactly as given, hashed or not.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no account has `id`
    /// * `Conflict` - the patch moves the account onto a taken email
    pub async fn update(&self, id: i64, patch: AccountPatch) -> Result<Account, AccountError> {
        let affected = self.repository.update(id, &patch).await?;
        if affected == 0 {
            tracing::warn!("Update of missing user {}", id);
            return Err(AccountError::not_found(format!("User with ID {} not found", id)));
        }

        let account = self.find_one(id).await?;
        tracing::info!("User updated: {}", id);
        Ok(account)
    }

    /// Hard-delete the account with `id`
    ///
    /// # Errors
    ///
    /// * `NotFound` - nothing was deleted
    pub async fn remove(&self, id: i64) -> Result<(), AccountError> {
        if self.repository.delete(id).await? == 0 {
            tracing::warn!("Delete of missing user {}", id);
            return Err(AccountError::not_found(format!("User with ID {} not found", id)));
        }

        tracing::info!("User removed: {}", id);
        Ok(())
    }

    /// Check credentials and issue a bearer token bound to the account id
    ///
    /// Unknown email and wrong password fail with the same `Unauthorized`
    /// error so the response does not reveal which accounts exist.
    pub async fn login(&self, credentials: LoginRequest) -> Result<TokenResponse, AccountError> {
        let Some(account) = self.repository.find_by_email(&credentials.email).await? else {
            let dummy = self.dummy_hash().await?;
            self.verify_password(credentials.password, dummy).await?;
            tracing::warn!("Login failed: unknown email");
            return Err(AccountError::invalid_credentials());
        };

        if !self
            .verify_password(credentials.password, account.password_hash.clone())
            .await?
        {
            tracing::warn!("Login failed: bad password for user {}", account.id);
            return Err(AccountError::invalid_credentials());
        }

        let token = self.tokens.issue(&IdentityClaim { id: account.id })?;
        tracing::info!("User logged in: {}", account.id);
        Ok(TokenResponse { token })
    }

    /// Resolve a bearer token to the account it was issued for
    ///
    /// A bad or expired token, or a token for a deleted account, is
    /// `Unauthorized`.
    pub async fn authenticate(&self, token: &str) -> Result<Account, AccountError> {
        let claim = self
            .tokens
            .verify(token)
            .map_err(|_| AccountError::unauthorized(LOGIN_REQUIRED))?;

        match self.repository.find_by_id(claim.id).await? {
            Some(account) => Ok(account),
            None => {
                tracing::warn!("Token for missing user {}", claim.id);
                Err(AccountError::unauthorized(LOGIN_REQUIRED))
            }
        }
    }

    async fn dummy_hash(&self) -> Result<String, AccountError> {
        self.dummy_hash
            .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD.to_string()))
            .await
            .cloned()
    }

    // bcrypt is CPU-bound; keep it off the async workers
    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::internal(format!("hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: String, stored: String) -> Result<bool, AccountError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| AccountError::internal(format!("verification task failed: {}", e)))
    }
}
