//! Paste storage operations and the atomic view gate, backed by redb.

use crate::db::tables::PASTES;
use crate::error::AppError;
use crate::models::paste::Paste;
use crate::policy::{evaluate_access, AccessStatus};
use chrono::{DateTime, Utc};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;

/// Accessor for the paste table.
pub struct PasteDb {
    db: Arc<redb::Database>,
}

fn deserialize_paste(raw: &[u8]) -> Result<Paste, AppError> {
    Ok(bincode::deserialize(raw)?)
}

/// Invariants the request layer already checks, re-checked here because
/// the store does not trust its callers with them.
fn validate_row(paste: &Paste) -> Result<(), AppError> {
    if paste.content.is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }
    if paste.max_views == Some(0) {
        return Err(AppError::BadRequest(
            "max_views must be a positive number".to_string(),
        ));
    }
    if let Some(expires_at) = paste.expires_at {
        if expires_at <= paste.created_at {
            return Err(AppError::BadRequest(
                "TTL must be a positive number of seconds".to_string(),
            ));
        }
    }
    Ok(())
}

impl PasteDb {
    /// Initialize the paste table if it does not exist yet.
    ///
    /// # Returns
    /// A new [`PasteDb`] accessor bound to `db`.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(PASTES)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new paste row.
    ///
    /// Ids are never reused: an existing row with the same id rejects the
    /// insert instead of being overwritten.
    ///
    /// # Arguments
    /// - `paste`: Paste row to persist.
    ///
    /// # Returns
    /// `Ok(())` when the insert commits.
    ///
    /// # Errors
    /// Returns an error when the row fails defensive validation, the id
    /// already exists, serialization fails, or storage operations fail.
    pub fn create(&self, paste: &Paste) -> Result<(), AppError> {
        validate_row(paste)?;
        let encoded = bincode::serialize(paste)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut pastes = write_txn.open_table(PASTES)?;
            if pastes.get(paste.id.as_str())?.is_some() {
                return Err(AppError::StorageMessage(format!(
                    "Paste id '{}' already exists",
                    paste.id
                )));
            }
            pastes.insert(paste.id.as_str(), encoded.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Fetch a paste by id without evaluating access policy.
    ///
    /// Pure lookup with no mutation; callers use it to distinguish a
    /// missing paste from a policy-denied one.
    ///
    /// # Returns
    /// `Ok(Some(paste))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: &str) -> Result<Option<Paste>, AppError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES)?;
        match pastes.get(id)? {
            Some(value) => Ok(Some(deserialize_paste(value.value())?)),
            None => Ok(None),
        }
    }

    /// Record one view at `now`, gated on the paste still being valid.
    ///
    /// The whole check-then-increment runs inside a single redb write
    /// transaction: the row is re-read and the policy re-evaluated against
    /// the current stored state, and the incremented counter is committed
    /// only when that state is still valid. redb serializes write
    /// transactions, so two racing views of a paste with one view left
    /// cannot both pass the precondition. Denied reads return before the
    /// commit, which aborts the transaction and leaves the row untouched.
    ///
    /// # Arguments
    /// - `id`: Paste id to view.
    /// - `now`: Instant the read is evaluated at; injected by the caller.
    ///
    /// # Returns
    /// The updated paste, with `view_count` reflecting this read.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when no row exists, [`AppError::Expired`] or
    /// [`AppError::Exhausted`] when the gate refuses the read, or a
    /// storage error.
    pub fn record_view(&self, id: &str, now: DateTime<Utc>) -> Result<Paste, AppError> {
        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut pastes = write_txn.open_table(PASTES)?;
            let Some(guard) = pastes.get(id)? else {
                return Err(AppError::NotFound);
            };
            let mut paste = deserialize_paste(guard.value())?;
            drop(guard);

            match evaluate_access(&paste, now) {
                AccessStatus::Expired => {
                    tracing::debug!(paste_id = id, "view denied: expired");
                    return Err(AppError::Expired);
                }
                AccessStatus::Exhausted => {
                    tracing::debug!(paste_id = id, "view denied: view limit reached");
                    return Err(AppError::Exhausted);
                }
                AccessStatus::Valid => {}
            }

            paste.view_count += 1;
            let encoded = bincode::serialize(&paste)?;
            pastes.insert(id, encoded.as_slice())?;
            paste
        };
        write_txn.commit()?;
        Ok(updated)
    }
}
