use super::errors::PolicyError;
use super::policy::{Policy, PolicyStats};

use crate::history::{ArmStats, Record};
use crate::rng::{MaybeSeededRng, Stream};

use rand::{seq::IteratorRandom, Rng};
use std::cmp::Ordering;

#[derive(Clone, Debug, Default)]
struct EpsilonGreedyArm {
    value: f64,
    pulls: u64,
}

impl EpsilonGreedyArm {
    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.value += (reward - self.value) / (self.pulls as f64);
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            mean_reward: self.value,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    arms: Vec<EpsilonGreedyArm>,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, seed: Option<u64>) -> Self {
        Self {
            arms: Vec::new(),
            epsilon,
            rng: MaybeSeededRng::new(seed, Stream::Policy),
        }
    }
}

impl Policy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "EpsilonGreedy"
    }

    fn initialize(&mut self, n_arms: usize) {
        self.arms = vec![EpsilonGreedyArm::default(); n_arms];
    }

    fn decide(&mut self) -> Result<usize, PolicyError> {
        if self.rng.get_rng().random::<f64>() < self.epsilon {
            (0..self.arms.len())
                .choose(self.rng.get_rng())
                .ok_or(PolicyError::NoArmsAvailable)
        } else {
            // break ties at random so that unexplored arms are not biased by their index
            let best = self
                .arms
                .iter()
                .map(|arm| arm.value)
                .max_by(f64::total_cmp)
                .ok_or(PolicyError::NoArmsAvailable)?;
            self.arms
                .iter()
                .enumerate()
                .filter(|(_, arm)| arm.value.total_cmp(&best) == Ordering::Equal)
                .map(|(arm_id, _)| arm_id)
                .choose(self.rng.get_rng())
                .ok_or(PolicyError::NoArmsAvailable)
        }
    }

    fn update(&mut self, record: &Record) -> Result<(), PolicyError> {
        self.arms
            .get_mut(record.arm)
            .map(|arm| arm.update(record.reward))
            .ok_or(PolicyError::ArmNotFound(record.arm))
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self
                .arms
                .iter()
                .enumerate()
                .map(|(arm_id, arm)| (arm_id, arm.stats()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    fn record(t: usize, arm: usize, reward: f64) -> Record {
        Record { t, arm, reward }
    }

    #[test]
    fn initialize() {
        let mut policy = EpsilonGreedy::new(0.15, Some(SEED));
        assert!(policy.arms.is_empty());

        policy.initialize(3);
        assert_eq!(policy.arms.len(), 3);
    }

    #[test]
    fn draw_empty() {
        let mut policy = EpsilonGreedy::new(0.15, Some(SEED));
        assert_eq!(policy.decide(), Err(PolicyError::NoArmsAvailable));
    }

    #[test]
    fn draw_best() {
        let mut policy = EpsilonGreedy::new(0.0, Some(SEED));
        policy.initialize(2);

        policy.arms[1].value = 1.0;
        assert!((0..20).all(|_| policy.decide() == Ok(1)));
    }

    #[test]
    fn draw_with_undefined_estimates() {
        let mut policy = EpsilonGreedy::new(0.0, Some(SEED));
        policy.initialize(3);

        assert!(policy.update(&record(0, 0, f64::NAN)).is_ok());
        assert!(policy.update(&record(1, 1, f64::NAN)).is_ok());
        assert!(policy.update(&record(2, 2, f64::NAN)).is_ok());
        assert!(policy.arms.iter().all(|arm| arm.value.is_nan()));
        assert!((0..20).all(|_| policy.decide().is_ok_and(|arm| arm < 3)));
    }

    #[test]
    fn update() {
        let mut policy = EpsilonGreedy::new(0.0, Some(SEED));
        policy.initialize(2);

        assert!(policy.update(&record(0, 0, 1.0)).is_ok());
        assert!(policy.update(&record(1, 0, 0.0)).is_ok());
        assert_eq!(policy.arms[0].value, 0.5);
        assert_eq!(policy.arms[0].pulls, 2);
        assert_eq!(policy.arms[1].value, 0.0);
        assert_eq!(
            policy.update(&record(2, 7, 1.0)),
            Err(PolicyError::ArmNotFound(7))
        );
    }

    #[test]
    fn learns_best_arm() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let probabilities = [0.2, 0.8, 0.4];
        let mut policy = EpsilonGreedy::new(0.1, Some(SEED));
        policy.initialize(probabilities.len());

        for t in 0..2000 {
            let arm = policy.decide().unwrap();
            let reward = (rng.random::<f64>() < probabilities[arm]) as i32 as f64;
            policy.update(&record(t, arm, reward)).unwrap();
        }

        let stats = policy.stats();
        let most_pulled = stats
            .arms
            .iter()
            .max_by_key(|(_, arm)| arm.pulls)
            .map(|(&arm_id, _)| arm_id);
        assert_eq!(most_pulled, Some(1));
    }
}
