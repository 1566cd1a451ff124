//! Shared test-only helpers for attendo_core.

use crate::Database;
use tempfile::TempDir;

/// Creates an isolated temporary database and returns it with the temp dir.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
pub(crate) fn setup_temp_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db = Database::new(db_dir(&temp_dir).as_str()).expect("db");
    (db, temp_dir)
}

/// Path of the database directory inside `temp_dir`.
pub(crate) fn db_dir(temp_dir: &TempDir) -> String {
    temp_dir.path().join("db").to_string_lossy().to_string()
}
