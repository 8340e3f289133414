//! End-to-end run: generate rainfall, convert to volume, size the tank,
//! summarise.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::{DAYS_PER_WEEK, DEFAULT_DAYS, DEFAULT_MEAN_RAINFALL, DEFAULT_STD_DEV};
use crate::error::{ensure_non_negative, HarvestError, Result};
use crate::harvester::params::HarvesterConfig;
use crate::harvester::run::{optimize, StorageOptimization};
use crate::metrics;
use crate::rainfall::{self, UniformSource};
use crate::summary::{monthly_summary, weekly_summary, MonthlySummary, WeeklySummary};

/// Climate and demand inputs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of simulated days.
    pub days: usize,
    /// Mean daily rainfall [mm].
    pub mean_rainfall: f64,
    /// Standard deviation of daily rainfall [mm].
    pub std_dev: f64,
    /// Constant daily draw from the tank [L].
    pub daily_consumption: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            mean_rainfall: DEFAULT_MEAN_RAINFALL,
            std_dev: DEFAULT_STD_DEV,
            daily_consumption: 0.0,
        }
    }
}

impl Scenario {
    /// Create a validated scenario.
    ///
    /// Validates:
    /// - `days` is non-zero
    /// - rainfall mean, spread and consumption are finite and non-negative
    pub fn new(
        days: usize,
        mean_rainfall: f64,
        std_dev: f64,
        daily_consumption: f64,
    ) -> Result<Self> {
        if days == 0 {
            return Err(HarvestError::InvalidDays);
        }
        Ok(Self {
            days,
            mean_rainfall: ensure_non_negative("mean rainfall", mean_rainfall)?,
            std_dev: ensure_non_negative("standard deviation", std_dev)?,
            daily_consumption: ensure_non_negative("daily consumption", daily_consumption)?,
        })
    }
}

/// Yearly (or whole-run) headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualTotals {
    /// Total rainfall [mm].
    pub rainfall: f64,
    /// Total harvestable water [L].
    pub harvested: f64,
    /// Volume lost above the recommended capacity [L].
    pub overflow: f64,
    /// Retained share of the harvest [%]; `None` when nothing was harvested.
    pub efficiency: Option<f64>,
}

/// Everything a caller needs to display one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub config: HarvesterConfig,
    pub scenario: Scenario,
    pub rainfall: Vec<f64>,
    pub harvested: Vec<f64>,
    pub storage: StorageOptimization,
    pub totals: AnnualTotals,
    /// Present when the run covers at least a week.
    pub weekly: Option<WeeklySummary>,
    pub monthly: MonthlySummary,
}

/// Run the full pipeline: generate → convert → optimize → aggregate.
///
/// `config` and `scenario` are taken as given; use their constructors to
/// validate caller input first.
pub fn run_simulation<S: UniformSource + ?Sized>(
    config: &HarvesterConfig,
    scenario: &Scenario,
    source: &mut S,
) -> SimulationReport {
    let rainfall = rainfall::simulate(
        scenario.days,
        scenario.mean_rainfall,
        scenario.std_dev,
        source,
    );
    let harvested = config.harvested_volume(&rainfall);
    debug!(
        roof_area = config.roof_area,
        runoff_coefficient = config.runoff_coefficient,
        "harvested volume computed"
    );

    let storage = optimize(&harvested, scenario.daily_consumption);

    let total_harvested = metrics::total(&harvested);
    let totals = AnnualTotals {
        rainfall: metrics::total(&rainfall),
        harvested: total_harvested,
        overflow: storage.overflow,
        efficiency: metrics::efficiency(total_harvested, storage.overflow),
    };
    if totals.efficiency.is_none() {
        warn!("no water harvested; efficiency is undefined");
    }

    let weekly = (rainfall.len() >= DAYS_PER_WEEK).then(|| weekly_summary(&rainfall, &harvested));
    let monthly = monthly_summary(&rainfall, &harvested);

    info!(
        days = scenario.days,
        total_rainfall = totals.rainfall,
        total_harvested = totals.harvested,
        capacity = storage.max_storage_needed,
        "simulation complete"
    );

    SimulationReport {
        config: *config,
        scenario: *scenario,
        rainfall,
        harvested,
        storage,
        totals,
        weekly,
        monthly,
    }
}
