//! Core domain library for Attendo (config, storage, models, collaborator traits).

/// Configuration loading and defaults.
pub mod config;
/// Shared defaults used across Attendo crates.
pub mod constants;
/// Embedded user store and credential service backed by redb.
pub mod db;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types (storage/domain).
pub mod error;
/// Data models for persisted users and accounts.
pub mod models;
/// Collaborator contracts consumed by the UI worker.
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use db::Database;
pub use error::AppError;
pub use services::{CredentialService, RecordEvent, Subscription, UserStore};
