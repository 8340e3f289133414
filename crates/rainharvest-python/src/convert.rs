use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rainharvest_core::HarvestError;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Validate length + contiguity of a numpy array.
pub fn checked_slice<'py>(
    arr: &'py PyReadonlyArray1<'py, f64>,
    expected_len: usize,
    name: &str,
) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.len() != expected_len {
        return Err(PyValueError::new_err(format!(
            "{} must have {} elements, got {}",
            name,
            expected_len,
            slice.len()
        )));
    }
    Ok(slice)
}

/// Validate minimum length + contiguity of a numpy array.
pub fn checked_slice_min<'py>(
    arr: &'py PyReadonlyArray1<'py, f64>,
    min_len: usize,
    name: &str,
) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.len() < min_len {
        return Err(PyValueError::new_err(format!(
            "{} must have at least {} elements, got {}",
            name,
            min_len,
            slice.len()
        )));
    }
    Ok(slice)
}

/// Rainfall and harvested arrays must line up day for day.
pub fn paired_slices<'py>(
    rainfall: &'py PyReadonlyArray1<'py, f64>,
    harvested: &'py PyReadonlyArray1<'py, f64>,
    min_len: usize,
) -> PyResult<(&'py [f64], &'py [f64])> {
    let rain = checked_slice_min(rainfall, min_len, "rainfall")?;
    let water = checked_slice(harvested, rain.len(), "harvested")?;
    Ok((rain, water))
}

/// Boundary validation failures surface as `ValueError`.
pub fn harvest_err(err: HarvestError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
