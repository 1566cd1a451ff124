//! Shared constants used across Attendo crates.

/// Default minimum password length accepted by the credential service.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Default company name shown on the home screen.
pub const DEFAULT_COMPANY_NAME: &str = "Attendo";

/// `last_edited` sentinel written when a user record is first created.
pub const JUST_CREATED: &str = "Just Created";

/// `chrono` format used for the `last_edited` field (`yyyy-MM-dd HH:mm:ss`).
pub const LAST_EDITED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
