use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::paired_slices;

use rainharvest_core::constants::DAYS_PER_WEEK;
use rainharvest_core::summary;

/// One row of a weekly or monthly table.
#[pyclass(frozen)]
#[derive(Clone)]
pub struct PeriodSummary {
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub rainfall: f64,
    #[pyo3(get)]
    pub harvested_water: f64,
}

impl From<&summary::PeriodSummary> for PeriodSummary {
    fn from(row: &summary::PeriodSummary) -> Self {
        Self {
            index: row.index,
            rainfall: row.rainfall,
            harvested_water: row.harvested_water,
        }
    }
}

#[pymethods]
impl PeriodSummary {
    fn __repr__(&self) -> String {
        format!(
            "PeriodSummary(index={}, rainfall={:.1}, harvested_water={:.1})",
            self.index, self.rainfall, self.harvested_water
        )
    }
}

pub fn rows<'a>(rows: impl IntoIterator<Item = &'a summary::PeriodSummary>) -> Vec<PeriodSummary> {
    rows.into_iter().map(PeriodSummary::from).collect()
}

#[pyfunction]
fn weekly_summary(
    rainfall: PyReadonlyArray1<'_, f64>,
    harvested: PyReadonlyArray1<'_, f64>,
) -> PyResult<Vec<PeriodSummary>> {
    let (rain, water) = paired_slices(&rainfall, &harvested, DAYS_PER_WEEK)?;
    Ok(rows(&summary::weekly_summary(rain, water)))
}

#[pyfunction]
fn monthly_summary(
    rainfall: PyReadonlyArray1<'_, f64>,
    harvested: PyReadonlyArray1<'_, f64>,
) -> PyResult<Vec<PeriodSummary>> {
    let (rain, water) = paired_slices(&rainfall, &harvested, 0)?;
    Ok(rows(&summary::monthly_summary(rain, water)))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "summary")?;
    m.add_function(wrap_pyfunction!(weekly_summary, &m)?)?;
    m.add_function(wrap_pyfunction!(monthly_summary, &m)?)?;
    m.add_class::<PeriodSummary>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
