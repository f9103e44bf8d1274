//! Backend Module
//!
//! Server-side code for the account service: storage, hashing, tokens,
//! business rules and the Axum HTTP layer in front of them. Only compiled
//! with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`auth`** - accounts, password hashing, JWTs, the account service, handlers
//! - **`error`** - `AccountError` and its HTTP conversion
//! - **`middleware`** - bearer token guard
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state and initialization
//!
//! # Request Lifecycle
//!
//! Each request is plain function composition: extract the body, validate
//! it, call the account service, map the result (or the `AccountError`) to
//! a response.

/// Accounts, authentication and handlers
pub mod auth;

/// Backend error types
pub mod error;

/// Request guards
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

pub use auth::AccountService;
pub use error::AccountError;
pub use server::create_app;
