use numpy::PyArray1;
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rainharvest_core::constants::{DEFAULT_DAYS, DEFAULT_MEAN_RAINFALL, DEFAULT_STD_DEV};
use rainharvest_core::rainfall;

/// Seeded generator, or one drawn from OS entropy when no seed is given.
pub fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[pyfunction]
#[pyo3(signature = (days=DEFAULT_DAYS, mean=DEFAULT_MEAN_RAINFALL, std_dev=DEFAULT_STD_DEV, seed=None))]
fn simulate_rainfall(
    py: Python<'_>,
    days: usize,
    mean: f64,
    std_dev: f64,
    seed: Option<u64>,
) -> Bound<'_, PyArray1<f64>> {
    let mut rng = rng_from(seed);
    PyArray1::from_vec(py, rainfall::simulate(days, mean, std_dev, &mut rng))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "rainfall")?;
    m.add_function(wrap_pyfunction!(simulate_rainfall, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
