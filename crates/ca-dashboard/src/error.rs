use ca_core::CoreError;
use ca_cycle::CycleError;
use ca_shelter::ShelterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dashboard configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Shelter(#[from] ShelterError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
