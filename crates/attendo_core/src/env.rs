//! Scoped environment overrides for code paths that read configuration.
//!
//! Environment mutation is process-global, so callers hold [`env_lock`] for the
//! lifetime of any [`EnvGuard`] they create.

use std::sync::{Mutex, OnceLock};

/// Return the process-wide lock serializing environment mutation.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers serialize mutation through `env_lock`.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Restores every touched environment variable when dropped.
///
/// Overrides are restored in reverse order, so touching the same key twice
/// still ends with the value seen before the first override.
#[must_use = "dropping the guard immediately restores the environment"]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Set `key=value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        Self { saved: Vec::new() }.and_set(key, value)
    }

    /// Unset `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        Self { saved: Vec::new() }.and_remove(key)
    }

    /// Chain another `key=value` override onto this guard.
    pub fn and_set(mut self, key: &str, value: &str) -> Self {
        self.saved.push((key.to_string(), std::env::var(key).ok()));
        write_var(key, Some(value));
        self
    }

    /// Chain another removal onto this guard.
    pub fn and_remove(mut self, key: &str) -> Self {
        self.saved.push((key.to_string(), std::env::var(key).ok()));
        write_var(key, None);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            write_var(&key, previous.as_deref());
        }
    }
}
