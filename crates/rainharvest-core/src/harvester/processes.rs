//! Harvester process functions.
//!
//! Pure functions for the roof yield and each phase of the daily tank update.
//! All inputs and outputs are f64.

/// Volume collected from one day of rain [L].
///
/// No validation: a non-positive area or out-of-range coefficient is the
/// caller's concern.
#[inline]
pub fn daily_yield(rainfall: f64, roof_area: f64, runoff_coefficient: f64) -> f64 {
    rainfall * roof_area * runoff_coefficient
}

/// Phase 1: Apply the day's inflow and demand to the tank.
#[inline]
pub fn net_storage(storage: f64, inflow: f64, demand: f64) -> f64 {
    storage + inflow - demand
}

/// Phase 2: Empty-tank clamp, otherwise grow the capacity to a new peak.
///
/// Returns (storage, capacity):
/// - storage: floored at 0 when demand exceeded what was held
/// - capacity: raised to `storage` whenever storage sets a new peak
#[inline]
pub fn track_capacity(storage: f64, capacity: f64) -> (f64, f64) {
    if storage < 0.0 {
        (0.0, capacity)
    } else if storage > capacity {
        (storage, storage)
    } else {
        (storage, capacity)
    }
}

/// Phase 3: Spill anything above the capacity.
///
/// Runs after phase 2 has already raised the capacity to any new peak, so
/// within `step` it never spills. The check stays in this position because
/// the reported overflow and efficiency are defined by this sequence.
///
/// Returns (storage, spill).
#[inline]
pub fn spill_excess(storage: f64, capacity: f64) -> (f64, f64) {
    if storage > capacity {
        (capacity, storage - capacity)
    } else {
        (storage, 0.0)
    }
}
