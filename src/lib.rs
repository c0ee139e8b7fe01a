pub mod bandits;
pub mod config;
pub mod errors;
pub mod history;
pub mod policies;
mod rng;
pub mod simulation;

pub use bandits::RewardSource;
pub use history::{History, Record, Report};
pub use policies::{Policy, PolicyType};
pub use simulation::{run, Agent, RunStatus};
