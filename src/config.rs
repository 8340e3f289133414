//! Settings resolution: command-line flags over an optional JSON file over
//! built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rainharvest_core::constants::DEFAULT_RUNOFF_COEFFICIENT;
use rainharvest_core::{HarvesterConfig, Scenario};
use serde::Deserialize;

use crate::cli::Cli;

/// On-disk settings. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub roof_area: Option<f64>,
    pub daily_consumption: Option<f64>,
    pub mean_rainfall: Option<f64>,
    pub std_dev: Option<f64>,
    pub runoff_coefficient: Option<f64>,
    pub days: Option<usize>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Validated inputs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config: HarvesterConfig,
    pub scenario: Scenario,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let defaults = Scenario::default();

        let roof_area = cli
            .roof_area
            .or(file.roof_area)
            .context("roof area is required: pass --roof-area or set roof_area in the config file")?;
        let runoff_coefficient = cli
            .runoff_coefficient
            .or(file.runoff_coefficient)
            .unwrap_or(DEFAULT_RUNOFF_COEFFICIENT);
        let config = HarvesterConfig::new(roof_area, runoff_coefficient)
            .context("invalid harvester settings")?;

        let scenario = Scenario::new(
            cli.days.or(file.days).unwrap_or(defaults.days),
            cli.mean_rainfall
                .or(file.mean_rainfall)
                .unwrap_or(defaults.mean_rainfall),
            cli.std_dev.or(file.std_dev).unwrap_or(defaults.std_dev),
            cli.daily_consumption
                .or(file.daily_consumption)
                .unwrap_or(defaults.daily_consumption),
        )
        .context("invalid scenario settings")?;

        Ok(Self {
            config,
            scenario,
            seed: cli.seed.or(file.seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use rainharvest_core::HarvestError;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["rainharvest"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_with_defaults() {
        let s = Settings::resolve(&cli(&["--roof-area", "100", "--daily-consumption", "200"]))
            .unwrap();
        assert_eq!(s.config.roof_area, 100.0);
        assert_eq!(s.config.runoff_coefficient, 0.8);
        assert_eq!(s.scenario.days, 365);
        assert_eq!(s.scenario.mean_rainfall, 5.0);
        assert_eq!(s.scenario.std_dev, 2.0);
        assert_eq!(s.scenario.daily_consumption, 200.0);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn roof_area_is_required() {
        let err = Settings::resolve(&cli(&[])).unwrap_err();
        assert!(err.to_string().contains("roof area is required"));
    }

    #[test]
    fn invalid_coefficient_is_reported() {
        let err = Settings::resolve(&cli(&["--roof-area", "100", "--runoff-coefficient", "1.5"]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HarvestError>(),
            Some(HarvestError::InvalidRunoffCoefficient { .. })
        ));
    }

    #[test]
    fn zero_days_is_rejected() {
        let err = Settings::resolve(&cli(&["--roof-area", "100", "--days", "0"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<HarvestError>(),
            Some(&HarvestError::InvalidDays)
        );
    }

    #[test]
    fn file_values_fill_gaps_and_flags_win() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"roof_area": 60.0, "runoff_coefficient": 0.7, "days": 180, "seed": 11}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let s = Settings::resolve(&cli(&["--config", &path, "--days", "90"])).unwrap();
        assert_eq!(s.config.roof_area, 60.0);
        assert_eq!(s.config.runoff_coefficient, 0.7);
        assert_eq!(s.scenario.days, 90);
        assert_eq!(s.seed, Some(11));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"roof_area": 60.0, "tank_size": 5000}}"#).unwrap();
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = FileConfig::load(Path::new("/nonexistent/rainharvest.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rainharvest.json"));
    }
}
