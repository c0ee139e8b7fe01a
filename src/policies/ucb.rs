use super::errors::PolicyError;
use super::policy::{Policy, PolicyStats};

use crate::history::{ArmStats, Record};
use crate::rng::{MaybeSeededRng, Stream};

use rand::seq::IteratorRandom;

#[derive(Clone, Debug, Default)]
struct UcbArm {
    reward: f64,
    count: u64,
}

impl UcbArm {
    fn upper_bound(&self, alpha: f64, total_count: u64) -> f64 {
        self.reward + (alpha * (total_count as f64).ln() / (2.0 * (self.count as f64))).sqrt()
    }

    fn update(&mut self, reward: f64) {
        self.count += 1;
        self.reward += (reward - self.reward) / (self.count as f64);
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.count,
            mean_reward: self.reward,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ucb {
    arms: Vec<UcbArm>,
    alpha: f64,
    rng: MaybeSeededRng,
}

impl Ucb {
    pub fn new(alpha: f64, seed: Option<u64>) -> Self {
        Self {
            arms: Vec::new(),
            alpha,
            rng: MaybeSeededRng::new(seed, Stream::Policy),
        }
    }

    fn total_count(&self) -> u64 {
        self.arms.iter().map(|arm| arm.count).sum()
    }
}

impl Policy for Ucb {
    fn name(&self) -> &'static str {
        "Ucb"
    }

    fn initialize(&mut self, n_arms: usize) {
        self.arms = vec![UcbArm::default(); n_arms];
    }

    fn decide(&mut self) -> Result<usize, PolicyError> {
        // sample random arms while no feedback has been observed for every one, and then the one with the best statistic
        if let Some(arm_id) = self
            .arms
            .iter()
            .enumerate()
            .filter(|(_, arm)| arm.count == 0)
            .map(|(arm_id, _)| arm_id)
            .choose(self.rng.get_rng())
        {
            return Ok(arm_id);
        }

        let total_count = self.total_count();
        self.arms
            .iter()
            .enumerate()
            .map(|(arm_id, arm)| (arm_id, arm.upper_bound(self.alpha, total_count)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(arm_id, _)| arm_id)
            .ok_or(PolicyError::NoArmsAvailable)
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
