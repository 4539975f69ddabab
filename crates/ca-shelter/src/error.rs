//! Error types for ca-shelter.

use ca_core::CoreError;
use thiserror::Error;

/// Errors raised while building or loading shelters.
///
/// Ranking itself never fails: no shelters, or none within the radius, are
/// ordinary outcomes.
#[derive(Debug, Error)]
pub enum ShelterError {
    #[error(transparent)]
    InvalidLocation(#[from] CoreError),

    #[error("shelter name must not be empty")]
    EmptyName,

    /// A per-record failure from the CSV loader; `row` is 1-based and
    /// excludes the header.
    #[error("row {row}: {source}")]
    Row { row: usize, source: Box<ShelterError> },

    #[error("CSV must have columns: name, lat, lon (optionally: type, capacity); missing {0:?}")]
    MissingColumn(&'static str),

    #[error("walking speed must be positive, got {0} km/h")]
    InvalidWalkingSpeed(f64),

    #[error("shelter parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShelterResult<T> = Result<T, ShelterError>;
