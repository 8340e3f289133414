use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::harvest_err;
use crate::rainfall::rng_from;
use crate::summary::rows;

use rainharvest_core::constants::{
    DEFAULT_DAYS, DEFAULT_MEAN_RAINFALL, DEFAULT_RUNOFF_COEFFICIENT, DEFAULT_STD_DEV,
};
use rainharvest_core::{HarvesterConfig, Scenario};

/// Run the full pipeline and return the report as a dict.
///
/// Series come back as numpy arrays, tables as lists of `PeriodSummary`.
/// `weekly` is `None` when fewer than seven days are simulated.
#[pyfunction]
#[pyo3(signature = (
    roof_area,
    daily_consumption,
    mean_rainfall=DEFAULT_MEAN_RAINFALL,
    std_dev=DEFAULT_STD_DEV,
    runoff_coefficient=DEFAULT_RUNOFF_COEFFICIENT,
    days=DEFAULT_DAYS,
    seed=None,
))]
#[allow(clippy::too_many_arguments)]
fn run_simulation<'py>(
    py: Python<'py>,
    roof_area: f64,
    daily_consumption: f64,
    mean_rainfall: f64,
    std_dev: f64,
    runoff_coefficient: f64,
    days: usize,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyDict>> {
    let config = HarvesterConfig::new(roof_area, runoff_coefficient).map_err(harvest_err)?;
    let scenario =
        Scenario::new(days, mean_rainfall, std_dev, daily_consumption).map_err(harvest_err)?;

    let mut rng = rng_from(seed);
    let report = rainharvest_core::run_simulation(&config, &scenario, &mut rng);

    let dict = PyDict::new(py);
    dict.set_item("rainfall", PyArray1::from_vec(py, report.rainfall))?;
    dict.set_item("harvested", PyArray1::from_vec(py, report.harvested))?;
    dict.set_item("max_storage_needed", report.storage.max_storage_needed)?;
    dict.set_item("overflow", report.storage.overflow)?;
    dict.set_item("total_rainfall", report.totals.rainfall)?;
    dict.set_item("total_harvested", report.totals.harvested)?;
    dict.set_item("efficiency", report.totals.efficiency)?;
    dict.set_item("weekly", report.weekly.as_ref().map(|w| rows(w)))?;
    dict.set_item("monthly", rows(&report.monthly))?;
    Ok(dict)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "simulation")?;
    m.add_function(wrap_pyfunction!(run_simulation, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
