//! Core domain library for Fadebin (config, storage, models, access policy).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across Fadebin crates.
pub mod constants;
/// Database access layer and the atomic view gate.
pub mod db;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types (storage/domain).
pub mod error;
/// Data models for API requests and persistence.
pub mod models;
/// Expiry and view-limit access policy.
pub mod policy;

pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use db::Database;
pub use error::AppError;
pub use policy::{evaluate_access, AccessStatus};
