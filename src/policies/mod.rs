pub mod epsilon_greedy;
pub mod errors;
pub mod fixed_arm;
mod policy;
pub mod random;
pub mod thompson_sampling;
pub mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use fixed_arm::FixedArm;
pub use policy::{Policy, PolicyStats, PolicyType};
pub use random::Random;
pub use thompson_sampling::ThompsonSampling;
pub use ucb::Ucb;
