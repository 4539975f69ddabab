//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` or wrap it as one variant.

use thiserror::Error;

/// The error type for `ca-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid location ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidLocation { lat: f64, lon: f64 },
}

/// Shorthand result type for `ca-core`.
pub type CoreResult<T> = Result<T, CoreError>;
