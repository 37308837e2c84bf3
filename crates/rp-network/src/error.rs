//! Network-subsystem error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by `rp-network`.
///
/// A missing route is not an error: the router returns an empty [`Path`].
///
/// [`Path`]: crate::Path
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("location data unavailable at {}: {source}", path.display())]
    DataUnavailable {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("location {0:?} already exists")]
    DuplicateLocation(String),

    #[error("invalid location {name:?}: {reason}")]
    InvalidLocation {
        name:   String,
        reason: &'static str,
    },

    #[error("no such place: {0:?}")]
    UnknownLocation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
