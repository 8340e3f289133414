//! rainharvest-core: rooftop rainwater harvesting simulation.
//!
//! Generates synthetic daily rainfall, converts it to collected volume for a
//! roof, sizes a storage tank against constant daily consumption, and rolls
//! the daily series up into weekly and monthly tables.
pub mod constants;
pub mod error;
pub mod harvester;
pub mod metrics;
pub mod rainfall;
pub mod simulation;
pub mod summary;
pub mod traits;

pub use error::HarvestError;
pub use harvester::params::HarvesterConfig;
pub use harvester::run::{harvested_volume, optimize, storage_trace, StorageOptimization};
pub use rainfall::{simulate, UniformSource};
pub use simulation::{run_simulation, AnnualTotals, Scenario, SimulationReport};
pub use summary::{monthly_summary, weekly_summary, Period, PeriodSummary};
