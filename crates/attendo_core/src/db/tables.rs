//! redb table definitions shared by storage modules.

use redb::TableDefinition;

/// File name for the redb database within the configured DB directory.
pub const REDB_FILE_NAME: &str = "data.redb";

/// Profile rows (`UserRecord`, bincode-encoded) keyed by uid.
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");
/// Account rows (`Account`, bincode-encoded) keyed by uid.
pub const ACCOUNTS: TableDefinition<&str, &[u8]> = TableDefinition::new("accounts");
/// Normalized email -> uid.
pub const ACCOUNTS_BY_EMAIL: TableDefinition<&str, &str> =
    TableDefinition::new("accounts_by_email");
/// Persisted signed-in uid under [`CURRENT_SESSION_KEY`].
pub const SESSION: TableDefinition<&str, &str> = TableDefinition::new("session");

pub const CURRENT_SESSION_KEY: &str = "current";
