//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer token guard for protected routes
//! - **`json`** - JSON body extractor that rejects with `AccountError`

pub mod auth;

pub mod json;

pub use auth::{bearer_token, AuthUser};
pub use json::JsonBody;
