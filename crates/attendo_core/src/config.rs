//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_COMPANY_NAME, DEFAULT_MIN_PASSWORD_LEN};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for Attendo.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_path: String,
    pub min_password_len: usize,
    pub company_name: String,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    std::env::current_dir().ok()
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparsable.
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("DB_PATH").map(expand_tilde).unwrap_or_else(|_| {
                let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
                let cache_dir = home.join(".cache").join("attendo");
                cache_dir.join("db").to_string_lossy().to_string()
            }),
            min_password_len: env::var("ATTENDO_MIN_PASSWORD_LEN")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .filter(|len: &usize| *len > 0)
                .unwrap_or(DEFAULT_MIN_PASSWORD_LEN),
            company_name: env::var("ATTENDO_COMPANY_NAME")
                .ok()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_env_flag, Config};
    use crate::constants::{DEFAULT_COMPANY_NAME, DEFAULT_MIN_PASSWORD_LEN};
    use crate::env::{env_lock, EnvGuard};

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn from_env_applies_defaults_when_unset() {
        let _lock = env_lock().lock().expect("env lock");
        let _db = EnvGuard::set("DB_PATH", "/tmp/attendo-config-test");
        let _len = EnvGuard::remove("ATTENDO_MIN_PASSWORD_LEN");
        let _name = EnvGuard::remove("ATTENDO_COMPANY_NAME");

        let config = Config::from_env();
        assert_eq!(config.db_path, "/tmp/attendo-config-test");
        assert_eq!(config.min_password_len, DEFAULT_MIN_PASSWORD_LEN);
        assert_eq!(config.company_name, DEFAULT_COMPANY_NAME);
    }

    #[test]
    fn from_env_reads_overrides_and_ignores_garbage() {
        let _lock = env_lock().lock().expect("env lock");
        let _name = EnvGuard::set("ATTENDO_COMPANY_NAME", "  Acme Field Ops ");
        {
            let _len = EnvGuard::set("ATTENDO_MIN_PASSWORD_LEN", "10");
            let config = Config::from_env();
            assert_eq!(config.min_password_len, 10);
            assert_eq!(config.company_name, "Acme Field Ops");
        }
        for garbage in ["abc", "0", "-3"] {
            let _len = EnvGuard::set("ATTENDO_MIN_PASSWORD_LEN", garbage);
            assert_eq!(
                Config::from_env().min_password_len,
                DEFAULT_MIN_PASSWORD_LEN,
                "value: {}",
                garbage
            );
        }
    }

    #[test]
    fn from_env_expands_tilde_in_db_path() {
        let _lock = env_lock().lock().expect("env lock");
        let _home = EnvGuard::set("HOME", "/home/attendo-test");
        let _db = EnvGuard::set("DB_PATH", "~/data/attendo");
        assert_eq!(Config::from_env().db_path, "/home/attendo-test/data/attendo");
    }
}
