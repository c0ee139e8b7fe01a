use crate::policies::PolicyType;
use crate::simulation::DEFAULT_HORIZON;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub horizon: usize,
    pub probabilities: Vec<f64>,
    #[serde(default)]
    pub bandit_seed: Option<u64>,
    #[serde(default)]
    pub policy: PolicyType,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    #[serde(default)]
    pub report_format: ReportFormat,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("simulation.probabilities")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("simulation.horizon", DEFAULT_HORIZON as i64)?
            .set_default("simulation.probabilities", vec![0.25, 0.5, 0.75])
    }
}
