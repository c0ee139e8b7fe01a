use crate::bandits::errors::BanditError;
use crate::policies::errors::PolicyError;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Horizon must be at least one round")]
    InvalidHorizon,
    #[error("Run {0} has already been played")]
    AlreadyRun(Uuid),
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
