//! Paste data model and request/response payloads.

use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paste row stored in the database and returned by the API.
///
/// Every field except `view_count` is immutable after creation;
/// `view_count` is advanced only by the gate's successful-read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paste {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_views: Option<u64>,
    pub view_count: u64,
}

/// Request payload for creating a paste.
///
/// `ttl_seconds` and `max_views` are signed so that negative inputs are
/// rejected by [`CreatePasteRequest::validate`] with a descriptive
/// message instead of failing JSON deserialization.
#[derive(Debug, Deserialize)]
pub struct CreatePasteRequest {
    pub content: String,
    pub ttl_seconds: Option<i64>,
    pub max_views: Option<i64>,
}

/// Response payload returned by the create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatePasteResponse {
    pub id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_views: Option<u64>,
}

/// Response payload returned by the gated view endpoint.
///
/// `view_count` reflects the state immediately after this read's
/// increment.
#[derive(Debug, Serialize)]
pub struct ViewPasteResponse {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_views: Option<u64>,
    pub view_count: u64,
}

impl CreatePasteRequest {
    /// Validate creation inputs.
    ///
    /// # Returns
    /// `Ok(())` when content is non-empty and ttl/max_views, if present,
    /// are positive.
    ///
    /// # Errors
    /// Returns [`AppError::BadRequest`] describing the first failed check.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.content.is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }
        if matches!(self.ttl_seconds, Some(ttl) if ttl <= 0) {
            return Err(AppError::BadRequest(
                "TTL must be a positive number of seconds".to_string(),
            ));
        }
        if matches!(self.max_views, Some(views) if views <= 0) {
            return Err(AppError::BadRequest(
                "max_views must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

impl Paste {
    /// Create a new paste with a generated id and a zeroed view counter.
    ///
    /// `expires_at` is derived from `ttl` relative to the creation
    /// timestamp; pastes without a ttl never time out.
    ///
    /// # Arguments
    /// - `content`: Paste content.
    /// - `ttl`: Optional time-to-live.
    /// - `max_views`: Optional ceiling on successful reads.
    ///
    /// # Returns
    /// A new [`Paste`] instance.
    pub fn new(content: String, ttl: Option<Duration>, max_views: Option<u64>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
            max_views,
            view_count: 0,
        }
    }

    /// Build a paste from a creation request.
    ///
    /// # Errors
    /// Returns [`AppError::BadRequest`] when the request fails validation.
    pub fn from_request(req: &CreatePasteRequest) -> Result<Self, AppError> {
        req.validate()?;
        Ok(Self::new(
            req.content.clone(),
            req.ttl_seconds.map(Duration::seconds),
            req.max_views.map(|views| views as u64),
        ))
    }

    /// Public viewer path for this paste.
    pub fn url(&self) -> String {
        format!("/p/{}", self.id)
    }
}

impl From<&Paste> for CreatePasteResponse {
    fn from(value: &Paste) -> Self {
        Self {
            id: value.id.clone(),
            url: value.url(),
            created_at: value.created_at,
            expires_at: value.expires_at,
            max_views: value.max_views,
        }
    }
}

impl From<Paste> for ViewPasteResponse {
    fn from(value: Paste) -> Self {
        Self {
            id: value.id,
            content: value.content,
            created_at: value.created_at,
            expires_at: value.expires_at,
            max_views: value.max_views,
            view_count: value.view_count,
        }
    }
}
