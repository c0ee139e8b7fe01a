use super::errors::PolicyError;
use super::policy::{Policy, PolicyStats};

use crate::history::{ArmStats, Record};
use crate::rng::{MaybeSeededRng, Stream};

use rand::Rng;
use rand_distr::{Beta, Distribution};

#[derive(Clone, Debug)]
struct ThompsonSamplingArm {
    alpha: f64,
    beta: f64,
    count: u64,
}

impl Default for ThompsonSamplingArm {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            count: 0,
        }
    }
}

impl ThompsonSamplingArm {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, PolicyError> {
        let s = Beta::new(self.alpha, self.beta)
            .map_err(|e| PolicyError::SamplingError(e.to_string()))?
            .sample(rng);

        Ok(s)
    }

    // rewards outside of [0, 1] are clamped, the posterior is only defined for Bernoulli feedback
    fn update(&mut self, reward: f64) {
        let reward = reward.clamp(0.0, 1.0);
        self.alpha += reward;
        self.beta += 1.0 - reward;
        self.count += 1;
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.count,
            mean_reward: self.alpha / (self.alpha + self.beta),
        }
    }
}

/// Thompson sampling with a Beta(1, 1) prior on every arm.
#[derive(Clone, Debug)]
pub struct ThompsonSampling {
    arms: Vec<ThompsonSamplingArm>,
    rng: MaybeSeededRng,
}

impl ThompsonSampling {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            arms: Vec::new(),
            rng: MaybeSeededRng::new(seed, Stream::Policy),
        }
    }
}

impl Policy for ThompsonSampling {
    fn name(&self) -> &'static str {
        "ThompsonSampling"
    }

    fn initialize(&mut self, n_arms: usize) {
        self.arms = vec![ThompsonSamplingArm::default(); n_arms];
    }

    fn decide(&mut self) -> Result<usize, PolicyError> {
        let rng = self.rng.get_rng();
        let samples = self
            .arms
            .iter()
            .map(|arm| arm.sample(&mut *rng))
            .collect::<Result<Vec<f64>, PolicyError>>()?;

        samples
            .iter()
            .enumerate()
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

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;
    const EPS: f64 = 1e-9;

    #[test]
    fn initialize() {
        let mut policy = ThompsonSampling::new(Some(SEED));
        policy.initialize(3);
        assert_eq!(policy.arms.len(), 3);
        assert!(policy
            .stats()
            .arms
            .values()
            .all(|arm| arm.pulls == 0 && (arm.mean_reward - 0.5).abs() < EPS));
    }

    #[test]
    fn draw_empty() {
        let mut policy = ThompsonSampling::new(Some(SEED));
        assert_eq!(policy.decide(), Err(PolicyError::NoArmsAvailable));
    }

    #[test]
    fn draw_best() {
        let mut policy = ThompsonSampling::new(Some(SEED));
        policy.initialize(2);

        policy.arms[0].alpha = 1000.0;
        policy.arms[1].beta = 1000.0;
        assert!((0..20).all(|_| policy.decide() == Ok(0)));
    }

    #[test]
    fn update() {
        let mut policy = ThompsonSampling::new(Some(SEED));
        policy.initialize(2);

        assert!(policy.update(&Record { t: 0, arm: 1, reward: 1.0 }).is_ok());
        assert!((policy.arms[1].alpha - 2.0).abs() < EPS);
        assert!((policy.arms[1].beta - 1.0).abs() < EPS);

        // clamped to a failure
        assert!(policy.update(&Record { t: 1, arm: 1, reward: -3.0 }).is_ok());
        assert!((policy.arms[1].alpha - 2.0).abs() < EPS);
        assert!((policy.arms[1].beta - 2.0).abs() < EPS);
        assert_eq!(policy.arms[1].count, 2);

        assert_eq!(
            policy.update(&Record { t: 2, arm: 5, reward: 1.0 }),
            Err(PolicyError::ArmNotFound(5))
        );
    }
}
