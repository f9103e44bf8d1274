//! Account Handlers Module
//!
//! HTTP handlers for the `/users` API.
//!
//! - **`users`** - list, fetch, register, update and delete accounts
//! - **`login`** - exchange credentials for a bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use accountd::backend::auth::handlers::{create_user, login};
//! use accountd::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/users", post(create_user))
//!     .route("/users/login", post(login));
//! ```

/// Account CRUD handlers
pub mod users;

/// Login handler
pub mod login;

pub use login::login;
pub use users::{create_user, delete_user, get_user, list_users, update_user};
