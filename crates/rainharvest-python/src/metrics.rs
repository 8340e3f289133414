use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::contiguous_slice;

use rainharvest_core::metrics;

/// Retained share of the harvest in percent; `None` when nothing was harvested.
#[pyfunction]
fn efficiency(total_harvested: f64, overflow: f64) -> Option<f64> {
    metrics::efficiency(total_harvested, overflow)
}

#[pyfunction]
#[pyo3(signature = (series, days=None))]
fn total(series: PyReadonlyArray1<'_, f64>, days: Option<usize>) -> PyResult<f64> {
    let s = contiguous_slice(&series)?;
    Ok(match days {
        Some(d) => metrics::period_total(s, d),
        None => metrics::total(s),
    })
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "metrics")?;
    m.add_function(wrap_pyfunction!(efficiency, &m)?)?;
    m.add_function(wrap_pyfunction!(total, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
