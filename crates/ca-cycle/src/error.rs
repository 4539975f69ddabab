use thiserror::Error;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("configuration error: phase schedule is empty")]
    EmptySchedule,

    #[error("configuration error: phase {index} has non-positive duration {duration}s")]
    NonPositiveDuration { index: usize, duration: i64 },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CycleError {
    /// `true` for the errors raised while validating a schedule's shape, as
    /// opposed to reading or parsing one.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CycleError::EmptySchedule | CycleError::NonPositiveDuration { .. })
    }
}

pub type CycleResult<T> = Result<T, CycleError>;
