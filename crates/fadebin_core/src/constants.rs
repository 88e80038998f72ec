//! Shared constants used across Fadebin crates.

/// Default API port for Fadebin.
pub const DEFAULT_PORT: u16 = 41740;

/// Default maximum paste size accepted by the API layer.
pub const DEFAULT_MAX_PASTE_SIZE: usize = 10 * 1024 * 1024;
