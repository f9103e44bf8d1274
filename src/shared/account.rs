//! Account Transfer Types
//!
//! Request and response bodies exchanged over the `/users` API. These types
//! carry no behaviour of their own; validation lives in
//! [`crate::shared::validation`] and business rules in the backend service.

use serde::{Deserialize, Serialize};

/// Registration request
///
/// The password is plaintext here and is hashed before it reaches storage.
/// Absent fields deserialize as empty strings and are reported by validation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    /// Display name, 4-20 characters, not required to be unique
    #[serde(default)]
    pub username: String,
    /// Email address, unique across all accounts
    #[serde(default)]
    pub email: String,
    /// Plaintext password
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response carrying the signed bearer token
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Field-level overwrite applied by `PUT /users/{id}`
///
/// Every present field is written verbatim. `password_hash` is NOT hashed on
/// the way in: a caller that supplies a plaintext value here stores plaintext,
/// and the account can no longer log in.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// Account as returned to clients (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}
