//! Expiry and view-limit access policy for the paste gate.

use crate::models::paste::Paste;
use chrono::{DateTime, Utc};

/// Verdict for a single read attempt against a paste's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// The read may be served and counted.
    Valid,
    /// The paste's time-to-live elapsed at or before the given instant.
    Expired,
    /// The view counter already reached `max_views`.
    Exhausted,
}

/// Evaluate whether a paste may be read at `now`.
///
/// Pure function of the paste's current state and the provided instant;
/// callers inject `now` so verdicts stay deterministic under test. The
/// same function runs inside [`crate::db::paste::PasteDb::record_view`]'s
/// write transaction as the increment precondition.
///
/// Expiry is checked before exhaustion, so a paste that is both timed
/// out and fully viewed reports `Expired`. The view-limit comparison
/// uses the counter as it stands before the pending increment: the read
/// that reaches the limit is still served, the next one is refused.
pub fn evaluate_access(paste: &Paste, now: DateTime<Utc>) -> AccessStatus {
    if let Some(expires_at) = paste.expires_at {
        if now >= expires_at {
            return AccessStatus::Expired;
        }
    }
    if let Some(max_views) = paste.max_views {
        if paste.view_count >= max_views {
            return AccessStatus::Exhausted;
        }
    }
    AccessStatus::Valid
}
