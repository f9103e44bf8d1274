//! accountd - account registration and authentication
//!
//! Stores user accounts, hashes their passwords with bcrypt, keeps emails
//! unique and issues signed bearer tokens on login.
//!
//! # Module Structure
//!
//! - **`shared`** - request/response types, request validation, shared errors.
//!   Always compiled.
//! - **`backend`** - account service, storage, hashing, tokens and the Axum
//!   server (`ssr` feature, on by default).
//!
//! # Invariants
//!
//! - Passwords are hashed before they are stored; the service never stores
//!   a raw password on registration
//! - No two accounts share an email; the storage unique constraint is the
//!   final word and races surface as `Conflict`
//! - Account ids are assigned by storage and never reused
//! - Tokens carry only the account id and an expiry
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use accountd::backend::auth::{AccountService, BcryptHasher, InMemoryUserRepository, JwtIssuer};
//! use accountd::shared::{CreateAccountRequest, LoginRequest};
//!
//! # async fn example() -> Result<(), accountd::backend::AccountError> {
//! let service = AccountService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(BcryptHasher::default()),
//!     Arc::new(JwtIssuer::new(b"secret", 3600)),
//! );
//!
//! service.create(CreateAccountRequest {
//!     username: "alice123".into(),
//!     email: "a@x.com".into(),
//!     password: "Passw0rd".into(),
//! }).await?;
//!
//! let token = service.login(LoginRequest {
//!     email: "a@x.com".into(),
//!     password: "Passw0rd".into(),
//! }).await?.token;
//! # Ok(())
//! # }
//! ```

/// Shared types and validation
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
