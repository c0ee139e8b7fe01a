use crate::bandits::RewardSource;
use crate::errors::SimulationError;
use crate::history::History;
use crate::policies::Policy;

use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_HORIZON: usize = 1000;

// longer runs grow the history as they go
const MAX_PREALLOCATED_ROUNDS: usize = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Uninitialized,
    Initialized,
    Deciding { round: usize },
    Observing { round: usize },
    Updating { round: usize },
    Finished,
    Failed { round: usize },
}

/// One run of a policy against a bandit over a fixed horizon.
///
/// The agent borrows the bandit for the whole run and owns the policy and
/// the history of the rounds played. After a failed run the history holds
/// every round completed before the failure.
pub struct Agent<'a> {
    id: Uuid,
    bandit: &'a mut RewardSource,
    policy: Box<dyn Policy + Send>,
    horizon: usize,
    history: History,
    status: RunStatus,
}

impl<'a> Agent<'a> {
    pub fn new(
        bandit: &'a mut RewardSource,
        policy: Box<dyn Policy + Send>,
        horizon: usize,
    ) -> Result<Self, SimulationError> {
        if horizon == 0 {
            return Err(SimulationError::InvalidHorizon);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            bandit,
            policy,
            horizon,
            history: History::with_capacity(horizon.min(MAX_PREALLOCATED_ROUNDS)),
            status: RunStatus::Uninitialized,
        })
    }

    pub fn with_default_horizon(
        bandit: &'a mut RewardSource,
        policy: Box<dyn Policy + Send>,
    ) -> Result<Self, SimulationError> {
        Self::new(bandit, policy, DEFAULT_HORIZON)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    pub fn policy(&self) -> &dyn Policy {
        self.policy.as_ref()
    }

    pub fn run(&mut self) -> Result<(), SimulationError> {
        if self.status != RunStatus::Uninitialized {
            return Err(SimulationError::AlreadyRun(self.id));
        }

        let n_arms = self.bandit.n_arms();
        info!(
            run_id = %self.id,
            horizon = self.horizon,
            n_arms,
            policy = self.policy.name(),
            "Starting run"
        );

        self.policy.initialize(n_arms);
        self.status = RunStatus::Initialized;

        for t in 0..self.horizon {
            if let Err(err) = self.play_round(t) {
                self.status = RunStatus::Failed { round: t };
                warn!(run_id = %self.id, round = t, error = %err, "Run failed");
                return Err(err);
            }
        }

        self.status = RunStatus::Finished;
        info!(
            run_id = %self.id,
            rounds = self.history.len(),
            total_reward = self.history.total_reward(),
            "Finished run"
        );
        Ok(())
    }

    fn play_round(&mut self, t: usize) -> Result<(), SimulationError> {
        self.status = RunStatus::Deciding { round: t };
        let arm = self.policy.decide()?;

        self.status = RunStatus::Observing { round: t };
        let reward = self.bandit.pull(arm)?;
        let record = self.history.append(arm, reward);
        debug!(run_id = %self.id, t = record.t, arm, reward, "Round played");

        self.status = RunStatus::Updating { round: t };
        self.policy.update(record)?;
        Ok(())
    }
}

/// Play every round of `agent`, leaving the rounds in its history.
pub fn run(agent: &mut Agent<'_>) -> Result<(), SimulationError> {
    agent.run()
}
