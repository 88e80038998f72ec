//! Database layer for Fadebin.

/// Paste storage and the atomic view gate.
pub mod paste;
/// redb table definitions.
pub mod tables;

#[cfg(test)]
mod tests;

use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;

/// Database handle with access to the underlying redb instance.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub pastes: paste::PasteDb,
}

impl Database {
    /// Open the database directory and initialize tables.
    ///
    /// # Arguments
    /// - `path`: Directory that holds (or will hold) the redb file.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or redb cannot
    /// open the database file.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                path, e
            ))
        })?;
        let db = redb::Database::create(dir.join(tables::REDB_FILE_NAME))?;
        Self::from_shared(Arc::new(db))
    }

    /// Build a database handle from an existing shared redb instance.
    ///
    /// Used when multiple subsystems in the same process need independent
    /// accessors without reopening the database file.
    ///
    /// # Errors
    /// Returns an error if table initialization fails.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, AppError> {
        Ok(Self {
            pastes: paste::PasteDb::new(db.clone())?,
            db,
        })
    }

    /// Clone this handle for another subsystem or worker thread.
    ///
    /// Shares the underlying redb instance, so write transactions opened
    /// through any handle serialize against each other.
    ///
    /// # Errors
    /// Returns an error if table initialization fails.
    pub fn share(&self) -> Result<Self, AppError> {
        Self::from_shared(self.db.clone())
    }
}
