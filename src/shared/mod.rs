//! Shared Module
//!
//! Types shared between the HTTP server and any client of the `/users` API:
//! request/response bodies, request validation and the shared error type.
//! Nothing in here depends on the server stack, so it compiles without the
//! `ssr` feature.

/// Account request and response types
pub mod account;

/// Request precondition checks
pub mod validation;

/// Shared error types
pub mod error;

pub use account::{AccountPatch, AccountResponse, CreateAccountRequest, LoginRequest, TokenResponse};
pub use error::SharedError;
pub use validation::{validate_create, validate_login};
