//! Request Validation
//!
//! Precondition checks run by the HTTP layer before a request reaches the
//! account service. Each check returns the first failing field as a
//! [`SharedError::ValidationError`].
//!
//! # Rules
//!
//! - username: 4-20 characters
//! - email: `local@domain.tld`, no whitespace
//! - password (registration): at least 8 characters with an upper-case
//!   letter, a lower-case letter and a digit
//! - password (login): non-empty
//!
//! Every field is checked for emptiness first, so a missing field reports
//! "<field> should not be empty".

use crate::shared::account::{CreateAccountRequest, LoginRequest};
use crate::shared::error::SharedError;

pub const USERNAME_MIN_LEN: usize = 4;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Validate a registration request
pub fn validate_create(request: &CreateAccountRequest) -> Result<(), SharedError> {
    require("username", &request.username)?;
    require("email", &request.email)?;
    require("password", &request.password)?;
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_password(&request.password)
}

/// Validate a login request
///
/// Password strength is not checked here; a weak password simply fails
/// to verify.
pub fn validate_login(request: &LoginRequest) -> Result<(), SharedError> {
    require("email", &request.email)?;
    require("password", &request.password)?;
    validate_email(&request.email)
}

fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.is_empty() {
        return Err(SharedError::validation(field, format!("{field} should not be empty")));
    }
    Ok(())
}

/// Username must be 4-20 characters (counted as chars, not bytes)
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    let len = username.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(SharedError::validation(
            "username",
            "Username must be at least 4 characters long",
        ));
    }
    if len > USERNAME_MAX_LEN {
        return Err(SharedError::validation(
            "username",
            "Username must not exceed 20 characters",
        ));
    }
    Ok(())
}

/// Basic email syntax check
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "email must be an email"))
    }
}

/// Password must be 8+ characters and mix upper, lower and digits
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 8 characters long",
        ));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_upper && has_lower && has_digit) {
        return Err(SharedError::validation(
            "password",
            "Password must contain at least one uppercase letter, one lowercase letter, and one number",
        ));
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    // Domain needs at least one dot and no empty labels
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
