use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::simulation::AttackPlan;
use crate::topology::NetworkModel;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Simulation configuration as read from YAML
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub network: NetworkModel,
    #[serde(default)]
    pub attack: AttackConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(level) = &self.general.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ValidationError::InvalidGeneral(format!(
                    "unknown log_level '{}', expected one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        self.network
            .validate()
            .map_err(|e| ValidationError::InvalidNetwork(e.to_string()))?;

        if self.attack.mode == AttackMode::Steps && self.attack.steps.unwrap_or(0) == 0 {
            return Err(ValidationError::InvalidAttack(
                "mode 'steps' requires a positive 'steps' value".to_string(),
            ));
        }

        Ok(())
    }

    /// Log level for the logger, `info` when unset
    pub fn log_level(&self) -> &str {
        self.general.log_level.as_deref().unwrap_or("info")
    }
}

/// Shared general configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Seeds both network construction and node selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Automated attack settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AttackConfig {
    #[serde(default)]
    pub mode: AttackMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    /// Pause between removals, e.g. "1s" or "250ms"
    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub step_delay: Option<Duration>,
}

impl AttackConfig {
    pub fn plan(&self) -> AttackPlan {
        match self.mode {
            AttackMode::UntilThreshold => AttackPlan::UntilThreshold,
            AttackMode::Exhaust => AttackPlan::Exhaust,
            AttackMode::Steps => AttackPlan::Steps(self.steps.unwrap_or(0)),
        }
    }
}

/// When an automated attack stops
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttackMode {
    /// Stop once the critical threshold is reached
    #[default]
    UntilThreshold,
    /// Remove every node
    Exhaust,
    /// Remove a fixed number of nodes
    Steps,
}

/// Report output settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// Report file; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    #[default]
    Text,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid attack configuration: {0}")]
    InvalidAttack(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let yaml = r#"
general:
  log_level: debug
  seed: 42
network:
  model: watts_strogatz
  n: 30
  k: 6
  beta: 0.2
attack:
  mode: steps
  steps: 5
  step_delay: "250ms"
output:
  report: "out/report.json"
  format: json
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.seed, Some(42));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.network, NetworkModel::WattsStrogatz { n: 30, k: 6, beta: 0.2 });
        assert_eq!(config.attack.plan(), AttackPlan::Steps(5));
        assert_eq!(config.attack.step_delay, Some(Duration::from_millis(250)));
        assert_eq!(config.output.report, Some(PathBuf::from("out/report.json")));
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.network, NetworkModel::ErdosRenyi { n: 10, p: 0.5 });
        assert_eq!(config.attack.plan(), AttackPlan::UntilThreshold);
        assert_eq!(config.attack.step_delay, None);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_validation_errors() {
        // Barabási–Albert with m >= n
        let yaml = r#"
network:
  model: barabasi_albert
  n: 3
  m: 3
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidNetwork(_))));

        // Steps mode without a step count
        let yaml = r#"
attack:
  mode: steps
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidAttack(_))));

        // Unknown log level
        let yaml = r#"
general:
  log_level: loud
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidGeneral(_))));
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let yaml = r#"
network:
  model: hypercube
  n: 8
"#;
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_exhaust_mode() {
        let config: Config = serde_yaml::from_str("attack:\n  mode: exhaust\n").unwrap();
        assert_eq!(config.attack.plan(), AttackPlan::Exhaust);
    }
}
