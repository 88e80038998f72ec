//! Paste HTTP handlers.

use crate::{error::HttpError, models::paste::*, AppError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

/// Create a new paste.
///
/// # Arguments
/// - `state`: Application state.
/// - `req`: Paste creation payload.
///
/// # Returns
/// `201 Created` with the paste's id, public url, and derived policy
/// fields.
///
/// # Errors
/// Returns an error if validation or persistence fails.
pub async fn create_paste(
    State(state): State<AppState>,
    Json(req): Json<CreatePasteRequest>,
) -> Result<(StatusCode, Json<CreatePasteResponse>), HttpError> {
    // Check paste size limit
    if req.content.len() > state.config.max_paste_size {
        return Err(AppError::BadRequest(format!(
            "Paste exceeds maximum size of {} bytes",
            state.config.max_paste_size
        ))
        .into());
    }

    let paste = Paste::from_request(&req)?;
    state.db.pastes.create(&paste)?;

    tracing::info!(paste_id = %paste.id, "paste created");
    Ok((StatusCode::CREATED, Json(CreatePasteResponse::from(&paste))))
}

/// Fetch a paste without evaluating policy or advancing the view counter.
///
/// Safe, non-mutating counterpart to [`view_paste`]. Callers use it to
/// distinguish a missing paste (404 here) from a policy-denied one (410
/// from the view endpoint), and to render state without consuming a view.
///
/// # Errors
/// Returns `NotFound` when no paste has this id.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Paste>, HttpError> {
    let paste = state.db.pastes.get(&id)?.ok_or(AppError::NotFound)?;
    Ok(Json(paste))
}

/// Perform a gated read: evaluate the paste's expiry and view-limit
/// policy against the current instant and record this view atomically.
///
/// Deliberately non-idempotent, hence a POST route: every successful
/// call consumes one view.
///
/// # Errors
/// Returns `NotFound`, `Expired`, or `Exhausted` when the read is
/// refused; the refusal does not advance the counter.
pub async fn view_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ViewPasteResponse>, HttpError> {
    let paste = state.db.pastes.record_view(&id, Utc::now())?;
    Ok(Json(ViewPasteResponse::from(paste)))
}
