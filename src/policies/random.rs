use super::errors::PolicyError;
use super::policy::Policy;

use crate::history::Record;
use crate::rng::{MaybeSeededRng, Stream};

use rand::Rng;

/// Baseline policy pulling arms uniformly at random. It never learns and
/// serves as a control for the learning policies.
#[derive(Clone, Debug)]
pub struct Random {
    estimates: Vec<f64>,
    rng: MaybeSeededRng,
}

impl Random {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            estimates: Vec::new(),
            rng: MaybeSeededRng::new(seed, Stream::Policy),
        }
    }
}

impl Policy for Random {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn initialize(&mut self, n_arms: usize) {
        self.estimates = vec![0.0; n_arms];
    }

    fn decide(&mut self) -> Result<usize, PolicyError> {
        if self.estimates.is_empty() {
            return Err(PolicyError::NoArmsAvailable);
        }
        Ok(self.rng.get_rng().random_range(0..self.estimates.len()))
    }

    fn update(&mut self, _: &Record) -> Result<(), PolicyError> {
        Ok(())
    }
}
