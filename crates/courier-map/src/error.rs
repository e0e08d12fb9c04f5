//! Map-subsystem error type.

use thiserror::Error;

/// Errors produced by `courier-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
