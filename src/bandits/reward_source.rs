use super::errors::BanditError;

use crate::rng::{MaybeSeededRng, Stream};

use rand::rngs::SmallRng;
use rand_distr::{Bernoulli, Distribution, Normal};
use std::fmt;

/// Stochastic payout of a single arm. The random stream is owned by the
/// [`RewardSource`] and handed to the generator on every pull.
pub type RewardGenerator = Box<dyn Fn(&mut SmallRng) -> f64 + Send>;

/// Multi-armed bandit: a fixed set of reward generators, one per arm.
pub struct RewardSource {
    n_arms: usize,
    generators: Vec<RewardGenerator>,
    rng: MaybeSeededRng,
}

impl RewardSource {
    pub fn new(
        n_arms: usize,
        generators: Vec<RewardGenerator>,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        if generators.len() != n_arms {
            return Err(BanditError::MismatchedArmCount {
                expected: n_arms,
                actual: generators.len(),
            });
        }
        if n_arms == 0 {
            return Err(BanditError::NoArms);
        }

        Ok(Self {
            n_arms,
            generators,
            rng: MaybeSeededRng::new(seed, Stream::Bandit),
        })
    }

    /// Bandit paying 1 with probability `p_i` on arm `i`, 0 otherwise.
    pub fn bernoulli(
        n_arms: usize,
        probabilities: &[f64],
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        let generators = probabilities
            .iter()
            .map(|&p| -> Result<RewardGenerator, BanditError> {
                let dist = Bernoulli::new(p)
                    .map_err(|e| BanditError::InvalidDistribution(format!("p={p}: {e}")))?;
                Ok(Box::new(move |rng: &mut SmallRng| {
                    f64::from(u8::from(dist.sample(rng)))
                }))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(n_arms, generators, seed)
    }

    /// Bandit with normally distributed rewards, `N(means[i], std_devs[i])` on arm `i`.
    pub fn gaussian(
        n_arms: usize,
        means: &[f64],
        std_devs: &[f64],
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        if means.len() != std_devs.len() {
            return Err(BanditError::InvalidDistribution(format!(
                "{} means for {} standard deviations",
                means.len(),
                std_devs.len()
            )));
        }

        let generators = means
            .iter()
            .zip(std_devs)
            .map(|(&mean, &std_dev)| -> Result<RewardGenerator, BanditError> {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(BanditError::InvalidDistribution(format!(
                        "mean={mean}, std={std_dev}"
                    )));
                }
                let dist = Normal::new(mean, std_dev).map_err(|e| {
                    BanditError::InvalidDistribution(format!("mean={mean}, std={std_dev}: {e}"))
                })?;
                Ok(Box::new(move |rng: &mut SmallRng| dist.sample(rng)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(n_arms, generators, seed)
    }

    pub fn n_arms(&self) -> usize {
        self.n_arms
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng.seed
    }

    pub fn pull(&mut self, arm: usize) -> Result<f64, BanditError> {
        let generator = self.generators.get(arm).ok_or(BanditError::InvalidArmIndex {
            arm,
            n_arms: self.n_arms,
        })?;

        Ok(generator(self.rng.get_rng()))
    }
}

impl fmt::Debug for RewardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewardSource")
            .field("n_arms", &self.n_arms)
            .field("seed", &self.rng.seed)
            .finish_non_exhaustive()
    }
}
