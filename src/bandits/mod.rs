pub mod errors;
mod reward_source;

pub use reward_source::{RewardGenerator, RewardSource};
