//! Credential-side models: stored accounts and the session identity.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored account row. The password is kept only as a salted digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub uid: String,
    pub email: String,
    pub password_digest: String,
    pub salt: [u8; 16],
    pub created_at: DateTime<Utc>,
}

/// Opaque identifier of the signed-in principal.
///
/// Holders can only read the uid back; they address the user store with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionIdentity {
    uid: String,
}

impl SessionIdentity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// Normalize an email for index lookups (trimmed, lowercased).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Reject emails that do not look like `local@domain`.
///
/// # Errors
/// Returns [`AppError::BadRequest`] when the address is malformed.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if well_formed {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "The email address is badly formatted.".to_string(),
        ))
    }
}
