//! Route handlers and the input checks they share.

pub mod error;
pub mod health;
pub mod principal;
pub mod protected;
mod state;
pub mod user_login;
pub mod user_register;

pub use self::error::AuthError;
pub use self::health::health;
pub use self::principal::{require_token, Principal};
pub use self::protected::protected;
pub use self::state::AuthState;
pub use self::user_login::login;
pub use self::user_register::register;

use axum::Json;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter all fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Please include a valid email";
pub const SHORT_PASSWORD_MESSAGE: &str = "Please enter a password with 6 or more characters";
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Request body for registration and login.
///
/// Both fields are optional at the type level so an incomplete body still
/// reaches the handler and gets the "Please enter all fields" answer.
#[derive(ToSchema, Deserialize)]
pub struct Credentials {
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = "secret1")]
    pub password: Option<String>,
}

/// Email and password that passed the presence check; `email` is normalized.
pub(crate) struct Submitted {
    pub(crate) email: String,
    pub(crate) password: String,
}

/// Normalize an email for lookup/uniqueness checks.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Lightweight email sanity check on already-normalized input.
pub(crate) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

pub(crate) fn valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Reject missing bodies and absent or blank fields before anything else runs.
pub(crate) fn require_fields(payload: Option<Json<Credentials>>) -> Result<Submitted, AuthError> {
    let missing = || AuthError::InvalidInput(vec![MISSING_FIELDS_MESSAGE.to_string()]);

    let Some(Json(credentials)) = payload else {
        return Err(missing());
    };

    match (credentials.email, credentials.password) {
        (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
            Ok(Submitted {
                email: normalize_email(&email),
                password,
            })
        }
        _ => Err(missing()),
    }
}

/// Shape checks for a new account: valid email and a long enough password.
pub(crate) fn validate_registration(submitted: &Submitted) -> Result<(), AuthError> {
    let mut errors = Vec::new();

    if !valid_email(&submitted.email) {
        errors.push(INVALID_EMAIL_MESSAGE.to_string());
    }

    if !valid_password(&submitted.password) {
        errors.push(SHORT_PASSWORD_MESSAGE.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AuthError::InvalidInput(errors))
    }
}

/// Login only checks the email shape; the password is judged by the hash.
pub(crate) fn validate_login(submitted: &Submitted) -> Result<(), AuthError> {
    if valid_email(&submitted.email) {
        Ok(())
    } else {
        Err(AuthError::InvalidInput(vec![INVALID_EMAIL_MESSAGE.to_string()]))
    }
}
