use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rainharvest_core::Period;

#[derive(Parser, Debug)]
#[command(
    name = "rainharvest",
    version,
    about = "Rainwater harvesting system calculator"
)]
pub struct Cli {
    /// Roof area [m²].
    #[arg(long)]
    pub roof_area: Option<f64>,
    /// Daily water consumption [L].
    #[arg(long)]
    pub daily_consumption: Option<f64>,
    /// Average daily rainfall [mm].
    #[arg(long)]
    pub mean_rainfall: Option<f64>,
    /// Rainfall variation, as a standard deviation [mm].
    #[arg(long)]
    pub std_dev: Option<f64>,
    /// Runoff coefficient, 0.0 to 1.0.
    #[arg(long)]
    pub runoff_coefficient: Option<f64>,
    /// Number of days to simulate.
    #[arg(long)]
    pub days: Option<usize>,
    /// Seed for reproducible rainfall.
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file with any of the above settings; flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Which data table to print.
    #[arg(long, value_enum, default_value_t = View::Monthly)]
    pub view: View,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Keep the daily rainfall and harvested series in JSON output.
    #[arg(long)]
    pub include_series: bool,
    /// Log pipeline stages to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Weekly,
    Monthly,
    Both,
}

impl View {
    pub fn periods(self) -> &'static [Period] {
        match self {
            View::Weekly => &[Period::Weekly],
            View::Monthly => &[Period::Monthly],
            View::Both => &[Period::Weekly, Period::Monthly],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rainharvest", "--roof-area", "120"]).unwrap();
        assert_eq!(cli.roof_area, Some(120.0));
        assert_eq!(cli.view, View::Monthly);
        assert_eq!(cli.format, Format::Text);
        assert!(cli.seed.is_none());
        assert!(!cli.include_series);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "rainharvest",
            "--roof-area",
            "80",
            "--daily-consumption",
            "250",
            "--mean-rainfall",
            "4.5",
            "--std-dev",
            "1.5",
            "--runoff-coefficient",
            "0.9",
            "--days",
            "730",
            "--seed",
            "7",
            "--view",
            "both",
            "--format",
            "json",
            "--include-series",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.daily_consumption, Some(250.0));
        assert_eq!(cli.days, Some(730));
        assert_eq!(cli.view.periods(), &[Period::Weekly, Period::Monthly]);
        assert_eq!(cli.format, Format::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_view() {
        assert!(Cli::try_parse_from(["rainharvest", "--view", "daily"]).is_err());
    }
}
