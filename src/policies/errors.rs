use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("No arms to draw from")]
    NoArmsAvailable,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Invalid policy parameter: {0}")]
    InvalidParameter(String),
    #[error("Sampling failed: {0}")]
    SamplingError(String),
}
