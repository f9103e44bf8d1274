//! Backend Error Module
//!
//! Error types for the account service and their HTTP conversion.
//!
//! - **`types`** - `AccountError`, `RepositoryError` and their constructors
//! - **`conversion`** - `IntoResponse` for `AccountError`

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{AccountError, RepositoryError, INVALID_CREDENTIALS, LOGIN_REQUIRED};
