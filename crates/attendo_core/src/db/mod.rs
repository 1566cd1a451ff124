//! Embedded stand-in for the hosted user store and credential service.

/// Account storage and session tracking.
pub mod auth;
/// redb table definitions.
pub mod tables;
/// User record storage.
pub mod users;
mod watch;

use crate::config::Config;
use crate::constants::DEFAULT_MIN_PASSWORD_LEN;
use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;
use tables::REDB_FILE_NAME;

pub use auth::AuthDb;
pub use users::UserDb;

/// Database handle with shared accessors for both collaborators.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub users: Arc<UserDb>,
    pub auth: Arc<AuthDb>,
}

impl Database {
    /// Open (or create) the database directory at `path` with default rules.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created or redb fails to
    /// open `data.redb`.
    pub fn new(path: &str) -> Result<Self, AppError> {
        Self::open(path, DEFAULT_MIN_PASSWORD_LEN)
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    /// See [`Database::new`].
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::open(&config.db_path, config.min_password_len)
    }

    /// Open (or create) the database directory at `path`.
    ///
    /// # Arguments
    /// - `path`: Directory holding `data.redb`.
    /// - `min_password_len`: Shortest password the credential service accepts.
    ///
    /// # Errors
    /// See [`Database::new`].
    pub fn open(path: &str, min_password_len: usize) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|err| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                dir.display(),
                err
            ))
        })?;
        let file = dir.join(REDB_FILE_NAME);
        let db = Arc::new(redb::Database::create(&file)?);
        tracing::debug!("opened {}", file.display());

        Ok(Self {
            users: Arc::new(UserDb::new(db.clone())?),
            auth: Arc::new(AuthDb::new(db.clone(), min_password_len)?),
            db,
        })
    }
}

#[cfg(test)]
mod tests;
