//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers only the
//! validation failures of the primitives in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("hour {0} is out of range 0..24")]
    InvalidHour(u8),
}

/// Shorthand result type for `rp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
