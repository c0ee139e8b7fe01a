use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BanditError {
    #[error("Bandit needs at least one arm")]
    NoArms,
    #[error("Expected {expected} reward generators, got {actual}")]
    MismatchedArmCount { expected: usize, actual: usize },
    #[error("Arm {arm} out of range for a bandit with {n_arms} arms")]
    InvalidArmIndex { arm: usize, n_arms: usize },
    #[error("Invalid reward distribution: {0}")]
    InvalidDistribution(String),
}
