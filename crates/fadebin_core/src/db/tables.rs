//! redb table definitions shared by storage modules.

use redb::TableDefinition;

/// File name for the redb database within the configured DB directory.
pub const REDB_FILE_NAME: &str = "data.redb";

/// Canonical paste rows (`Paste`, bincode-encoded), keyed by paste id.
pub const PASTES: TableDefinition<&str, &[u8]> = TableDefinition::new("pastes");
