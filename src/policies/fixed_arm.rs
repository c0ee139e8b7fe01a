use super::errors::PolicyError;
use super::policy::Policy;

use crate::history::Record;

/// Always pulls the same arm. The arm is not checked against the bandit, so an
/// out of range arm surfaces as a bandit error during the run.
#[derive(Clone, Debug)]
pub struct FixedArm {
    arm: usize,
}

impl FixedArm {
    pub fn new(arm: usize) -> Self {
        Self { arm }
    }
}

impl Policy for FixedArm {
    fn name(&self) -> &'static str {
        "FixedArm"
    }

    fn initialize(&mut self, _: usize) {}

    fn decide(&mut self) -> Result<usize, PolicyError> {
        Ok(self.arm)
    }

    fn update(&mut self, _: &Record) -> Result<(), PolicyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decide() {
        let mut policy = FixedArm::new(1);
        policy.initialize(3);
        assert!((0..10).all(|_| policy.decide() == Ok(1)));
    }
}
