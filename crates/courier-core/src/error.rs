//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.

use thiserror::Error;

/// Errors produced by `courier-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid latitude text {0:?}")]
    BadLatitude(String),

    #[error("invalid longitude text {0:?}")]
    BadLongitude(String),
}

/// Shorthand result type for `courier-core`.
pub type CoreResult<T> = Result<T, CoreError>;
