/**
 * Account Error Types
 *
 * Every failure the account service can report is a variant of
 * `AccountError`, so the routing layer can map each kind to a distinct
 * HTTP status without inspecting message strings.
 *
 * # Error Categories
 *
 * - `NotFound` - no account matches the requested id or email
 * - `Conflict` - the email is already registered
 * - `Unauthorized` - bad credentials or a missing/invalid bearer token
 * - `Validation` - request body malformed or failed its precondition checks
 * - `Storage` - repository faults other than unique violations
 * - `Internal` - hashing, signing or task failures
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned for both "no such email" and "wrong password"
pub const INVALID_CREDENTIALS: &str = "Invalid Email or Password";

/// Message returned when a protected route is hit without a usable token
pub const LOGIN_REQUIRED: &str = "Login first to access this endpoint.";

/// Storage-layer failures reported by a `UserRepository`
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A write collided with a unique column
    #[error("unique constraint violated on '{field}'")]
    UniqueViolation {
        /// Column that rejected the write
        field: String,
    },

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn unique_violation(field: impl Into<String>) -> Self {
        Self::UniqueViolation { field: field.into() }
    }
}

/// Account service error kinds
///
/// # Usage
///
/// ```rust
/// use accountd::backend::error::AccountError;
/// use axum::http::StatusCode;
///
/// let err = AccountError::not_found("User with ID 7 not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum AccountError {
    /// Requested id or email has no matching record
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Creation or update collides with an existing unique email
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Credential mismatch or missing/invalid bearer token
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Storage fault not already translated into another kind
    #[error("Storage error: {0}")]
    Storage(RepositoryError),

    /// Hashing, signing or blocking-task failure
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl AccountError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    /// The login failure, identical for unknown email and wrong password
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(INVALID_CREDENTIALS)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404
    /// - `Conflict` - 409
    /// - `Unauthorized` - 401
    /// - `Validation` - 400
    /// - `Storage`, `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients
    ///
    /// Storage and internal failures are reported generically; their
    /// details only go to the log.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message } => message.clone(),
            Self::Validation(
                SharedError::ValidationError { message, .. }
                | SharedError::SerializationError { message },
            ) => message.clone(),
            Self::Storage(_) | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

/// Unique violations become `Conflict`; everything else stays a storage fault
impl From<RepositoryError> for AccountError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation { field } if field == "email" => {
                Self::conflict("Email already registered")
            }
            RepositoryError::UniqueViolation { field } => {
                Self::conflict(format!("{field} already exists"))
            }
            other => Self::Storage(other),
        }
    }
}
