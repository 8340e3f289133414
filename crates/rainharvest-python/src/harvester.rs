use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use crate::convert::{checked_slice, contiguous_slice, harvest_err};

use rainharvest_core::harvester::run;
use rainharvest_core::harvester::state::{TankState, STATE_SIZE};
use rainharvest_core::HarvesterConfig;

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_timeseries_result! {
    /// Daily tank trace with typed numpy array attributes.
    pub struct TankTrace from rainharvest_core::harvester::fluxes::TankTimeseries {
        inflow, demand, storage, capacity, spill, overflow,
    }
}

define_step_result! {
    /// Single-day tank flux results.
    pub struct TankStepFluxes from rainharvest_core::harvester::fluxes::TankFluxes {
        inflow, demand, storage, capacity, spill, overflow,
    }
}

/// Tank sizing result.
#[pyclass(frozen)]
pub struct StorageOptimization {
    #[pyo3(get)]
    pub max_storage_needed: f64,
    #[pyo3(get)]
    pub overflow: f64,
}

impl From<run::StorageOptimization> for StorageOptimization {
    fn from(r: run::StorageOptimization) -> Self {
        Self {
            max_storage_needed: r.max_storage_needed,
            overflow: r.overflow,
        }
    }
}

fn initial_state(state: &Option<PyReadonlyArray1<'_, f64>>) -> PyResult<Option<TankState>> {
    match state {
        Some(s) => {
            let s_slice = checked_slice(s, STATE_SIZE, "initial_state")?;
            TankState::from_slice(s_slice)
                .map(Some)
                .map_err(pyo3::exceptions::PyValueError::new_err)
        }
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (rainfall, roof_area, runoff_coefficient=rainharvest_core::constants::DEFAULT_RUNOFF_COEFFICIENT))]
fn harvested_volume<'py>(
    py: Python<'py>,
    rainfall: PyReadonlyArray1<'py, f64>,
    roof_area: f64,
    runoff_coefficient: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let config = HarvesterConfig::new(roof_area, runoff_coefficient).map_err(harvest_err)?;
    let rain = contiguous_slice(&rainfall)?;
    Ok(PyArray1::from_vec(py, config.harvested_volume(rain)))
}

#[pyfunction]
fn optimize_storage(
    harvested: PyReadonlyArray1<'_, f64>,
    daily_consumption: f64,
) -> PyResult<StorageOptimization> {
    let water = contiguous_slice(&harvested)?;
    Ok(run::optimize(water, daily_consumption).into())
}

#[pyfunction]
#[pyo3(signature = (harvested, daily_consumption, initial_state=None))]
fn storage_trace(
    py: Python<'_>,
    harvested: PyReadonlyArray1<'_, f64>,
    daily_consumption: f64,
    initial_state: Option<PyReadonlyArray1<'_, f64>>,
) -> PyResult<TankTrace> {
    let water = contiguous_slice(&harvested)?;
    let state = self::initial_state(&initial_state)?;

    let result = run::storage_trace(water, daily_consumption, state.as_ref());
    Ok(TankTrace::from_timeseries(py, result))
}

#[pyfunction]
fn tank_step<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    daily_consumption: f64,
    inflow: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, TankStepFluxes)> {
    let s_slice = checked_slice(&state, STATE_SIZE, "state")?;
    let s = TankState::from_slice(s_slice).map_err(pyo3::exceptions::PyValueError::new_err)?;

    let (new_state, fluxes) = run::step(&s, daily_consumption, inflow);

    let state_arr = PyArray1::from_vec(py, new_state.to_array().to_vec());
    Ok((state_arr, TankStepFluxes::from_fluxes(&fluxes)))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "harvester")?;
    m.add_function(wrap_pyfunction!(harvested_volume, &m)?)?;
    m.add_function(wrap_pyfunction!(optimize_storage, &m)?)?;
    m.add_function(wrap_pyfunction!(storage_trace, &m)?)?;
    m.add_function(wrap_pyfunction!(tank_step, &m)?)?;
    m.add_class::<TankTrace>()?;
    m.add_class::<TankStepFluxes>()?;
    m.add_class::<StorageOptimization>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
