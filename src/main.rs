use bandit_sim::{
    config::{AppConfig, ReportFormat},
    Agent, RewardSource,
};

use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let simulation = config.simulation;
    let mut bandit = RewardSource::bernoulli(
        simulation.probabilities.len(),
        &simulation.probabilities,
        simulation.bandit_seed,
    )?;
    info!(probabilities = ?simulation.probabilities, "Created bandit");

    let mut agent = Agent::new(
        &mut bandit,
        simulation.policy.into_inner()?,
        simulation.horizon,
    )?;
    agent.run()?;

    let report = agent.history().report();
    match config.report_format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Table => {
            println!("{:>5} {:>8} {:>12}", "arm", "pulls", "mean reward");
            for (arm, stats) in &report.arms {
                println!("{:>5} {:>8} {:>12.4}", arm, stats.pulls, stats.mean_reward);
            }
            println!("Total reward: {}", report.total_reward);
        }
    }

    Ok(())
}
