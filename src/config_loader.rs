use crate::config::{Config, ReportFormat};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
    pub format: Option<ReportFormat>,
}

/// Apply CLI overrides to a configuration
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<()> {
    if let Some(seed) = overrides.seed {
        info!("Seed override: {}", seed);
        config.general.seed = Some(seed);
    }

    if let Some(report) = &overrides.report {
        info!("Report path override: {:?}", report);
        config.output.report = Some(report.clone());
    }

    if let Some(format) = overrides.format {
        config.output.format = format;
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::NetworkModel;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let yaml = r#"
general:
  seed: 7
network:
  model: barabasi_albert
  n: 50
  m: 3
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.general.seed, Some(7));
        assert_eq!(config.network, NetworkModel::BarabasiAlbert { n: 50, m: 3 });
    }

    #[test]
    fn test_load_config_rejects_invalid_model() {
        let yaml = r#"
network:
  model: watts_strogatz
  n: 10
  k: 3
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid network configuration"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/resilsim.yaml")).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let overrides = CliOverrides {
            seed: Some(99),
            report: Some(PathBuf::from("run.json")),
            format: Some(ReportFormat::Json),
        };
        apply_overrides(&mut config, &overrides).unwrap();

        assert_eq!(config.general.seed, Some(99));
        assert_eq!(config.output.report, Some(PathBuf::from("run.json")));
        assert_eq!(config.output.format, ReportFormat::Json);

        // Empty overrides change nothing
        let before = config.clone();
        apply_overrides(&mut config, &CliOverrides::default()).unwrap();
        assert_eq!(config, before);
    }
}
