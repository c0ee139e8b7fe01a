use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::fixed_arm::FixedArm;
use super::random::Random;
use super::thompson_sampling::ThompsonSampling;
use super::ucb::Ucb;

use crate::history::{ArmStats, Record};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Debug;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolicyStats {
    pub arms: BTreeMap<usize, ArmStats>,
}

/// Policy selector, resolved to a concrete implementation before a run starts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum PolicyType {
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    FixedArm {
        arm: usize,
    },
    EpsilonGreedy {
        epsilon: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    Ucb {
        alpha: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    ThompsonSampling {
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Default for PolicyType {
    fn default() -> Self {
        PolicyType::Random { seed: None }
    }
}

impl PolicyType {
    pub fn into_inner(self) -> Result<Box<dyn Policy + Send>, PolicyError> {
        let policy: Box<dyn Policy + Send> = match self {
            PolicyType::Random { seed } => Box::new(Random::new(seed)),
            PolicyType::FixedArm { arm } => Box::new(FixedArm::new(arm)),
            PolicyType::EpsilonGreedy { epsilon, seed } => {
                if !(0.0..=1.0).contains(&epsilon) {
                    return Err(PolicyError::InvalidParameter(format!(
                        "epsilon must be in [0, 1], got {epsilon}"
                    )));
                }
                Box::new(EpsilonGreedy::new(epsilon, seed))
            }
            PolicyType::Ucb { alpha, seed } => {
                if !alpha.is_finite() || alpha < 0.0 {
                    return Err(PolicyError::InvalidParameter(format!(
                        "alpha must be finite and non-negative, got {alpha}"
                    )));
                }
                Box::new(Ucb::new(alpha, seed))
            }
            PolicyType::ThompsonSampling { seed } => Box::new(ThompsonSampling::new(seed)),
        };

        Ok(policy)
    }
}

/// Decision strategy driven by the simulation loop.
///
/// A run calls `initialize` once, then alternates `decide` and `update` once
/// per round. `update` always receives the record produced by the preceding
/// `decide`, before the next `decide` happens.
pub trait Policy: Send + Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str {
        let path = std::any::type_name::<Self>();
        path.rsplit("::").next().unwrap_or(path)
    }

    /// Reset the internal state for a bandit with `n_arms` arms.
    fn initialize(&mut self, n_arms: usize);

    /// Pick the arm to pull this round.
    fn decide(&mut self) -> Result<usize, PolicyError>;

    /// Incorporate the outcome of the round just played.
    fn update(&mut self, record: &Record) -> Result<(), PolicyError>;

    fn stats(&self) -> PolicyStats {
        PolicyStats::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_policy_type() {
        let policy_type: PolicyType =
            serde_json::from_str(r#"{"type": "EpsilonGreedy", "epsilon": 0.1}"#).unwrap();
        assert_eq!(
            policy_type,
            PolicyType::EpsilonGreedy {
                epsilon: 0.1,
                seed: None
            }
        );

        let policy_type: PolicyType =
            serde_json::from_str(r#"{"type": "Ucb", "alpha": 2.0, "seed": 3}"#).unwrap();
        assert_eq!(
            policy_type,
            PolicyType::Ucb {
                alpha: 2.0,
                seed: Some(3)
            }
        );
    }

    #[test]
    fn deserialize_unknown_policy() {
        let result = serde_json::from_str::<PolicyType>(r#"{"type": "Softmax"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn into_inner() {
        let mut policy = PolicyType::FixedArm { arm: 2 }.into_inner().unwrap();
        policy.initialize(3);
        assert_eq!(policy.decide(), Ok(2));
        assert_eq!(policy.name(), "FixedArm");

        let mut policy = PolicyType::default().into_inner().unwrap();
        policy.initialize(3);
        assert!(policy.decide().is_ok_and(|arm| arm < 3));
        assert_eq!(policy.name(), "Random");
    }

    #[test]
    fn into_inner_invalid_parameters() {
        for epsilon in [-0.1, 1.5, f64::NAN] {
            let result = PolicyType::EpsilonGreedy {
                epsilon,
                seed: None,
            }
            .into_inner();
            assert!(matches!(result, Err(PolicyError::InvalidParameter(_))));
        }
        for alpha in [-1.0, f64::INFINITY, f64::NAN] {
            let result = PolicyType::Ucb { alpha, seed: None }.into_inner();
            assert!(matches!(result, Err(PolicyError::InvalidParameter(_))));
        }

        assert!(PolicyType::EpsilonGreedy {
            epsilon: 1.0,
            seed: None
        }
        .into_inner()
        .is_ok());
        assert!(PolicyType::Ucb {
            alpha: 0.0,
            seed: None
        }
        .into_inner()
        .is_ok());
    }

    #[derive(Debug)]
    struct Constant;

    impl Policy for Constant {
        fn initialize(&mut self, _: usize) {}

        fn decide(&mut self) -> Result<usize, PolicyError> {
            Ok(0)
        }

        fn update(&mut self, _: &Record) -> Result<(), PolicyError> {
            Ok(())
        }
    }

    #[test]
    fn default_name() {
        assert_eq!(Constant.name(), "Constant");
    }
}
