mod cli;
mod config;
mod logging;
mod report;

use anyhow::Result;
use clap::Parser;
use rainharvest_core::run_simulation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::cli::{Cli, Format};
use crate::config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::resolve(&cli)?;
    debug!(?settings, "settings resolved");

    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let report = run_simulation(&settings.config, &settings.scenario, &mut rng);

    let output = match cli.format {
        Format::Text => report::render_text(&report, cli.view),
        Format::Json => report::render_json(&report, cli.include_series)?,
    };
    println!("{output}");
    Ok(())
}
