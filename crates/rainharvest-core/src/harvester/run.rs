/// Harvester orchestration functions.
///
/// - `harvested_volume()`: rainfall series → collected volume series
/// - `step()`: Execute a single tank day → (TankState, TankFluxes)
/// - `optimize()`: size the tank over a harvested series
/// - `storage_trace()`: the same pass, keeping every day
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fluxes::{TankFluxes, TankTimeseries};
use super::processes;
use super::state::TankState;
use crate::traits::StepModel;

/// Capacity sizing outcome of one pass over a harvested series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageOptimization {
    /// Recommended tank capacity [L].
    pub max_storage_needed: f64,
    /// Volume lost above that capacity [L].
    pub overflow: f64,
}

impl From<TankState> for StorageOptimization {
    fn from(state: TankState) -> Self {
        Self {
            max_storage_needed: state.capacity,
            overflow: state.overflow,
        }
    }
}

/// Element-wise roof yield: `rainfall[i] * roof_area * runoff_coefficient`.
pub fn harvested_volume(rainfall: &[f64], roof_area: f64, runoff_coefficient: f64) -> Vec<f64> {
    rainfall
        .iter()
        .map(|&r| processes::daily_yield(r, roof_area, runoff_coefficient))
        .collect()
}

/// Execute one tank day.
///
/// Takes current state + the day's inflow, returns new state + fluxes.
/// The input state is not modified.
pub fn step(state: &TankState, daily_consumption: f64, inflow: f64) -> (TankState, TankFluxes) {
    // Phase 1: inflow in, demand out
    let storage = processes::net_storage(state.storage, inflow, daily_consumption);

    // Phase 2: empty clamp or new peak
    let (storage, capacity) = processes::track_capacity(storage, state.capacity);

    // Phase 3: spill above capacity
    let (storage, spill) = processes::spill_excess(storage, capacity);

    let overflow = state.overflow + spill;

    let new_state = TankState {
        storage,
        capacity,
        overflow,
    };

    let fluxes = TankFluxes {
        inflow,
        demand: daily_consumption,
        storage,
        capacity,
        spill,
        overflow,
    };

    (new_state, fluxes)
}

/// Tank model: params are the daily consumption, forcing is the daily inflow.
pub struct Tank;

impl StepModel for Tank {
    type Params = f64;
    type State = TankState;
    type Forcing = f64;
    type Fluxes = TankFluxes;
    type FluxesTimeseries = TankTimeseries;

    fn initialize_state(_daily_consumption: &f64) -> TankState {
        TankState::empty()
    }

    fn step(state: &TankState, daily_consumption: &f64, inflow: &f64) -> (TankState, TankFluxes) {
        step(state, *daily_consumption, *inflow)
    }
}

/// Size the tank for a harvested series under constant daily consumption.
///
/// Starts from an empty tank. Deterministic with no state carried between
/// calls; no validation of consumption or inflow signs.
pub fn optimize(harvested: &[f64], daily_consumption: f64) -> StorageOptimization {
    let result = StorageOptimization::from(Tank::final_state(&daily_consumption, harvested, None));
    debug!(
        days = harvested.len(),
        daily_consumption,
        max_storage_needed = result.max_storage_needed,
        overflow = result.overflow,
        "storage optimized"
    );
    result
}

/// Run the tank over a harvested series, keeping every day's fluxes.
///
/// If no initial state is provided the tank starts empty.
pub fn storage_trace(
    harvested: &[f64],
    daily_consumption: f64,
    initial_state: Option<&TankState>,
) -> TankTimeseries {
    Tank::run(&daily_consumption, harvested, initial_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- harvested_volume() tests --

    #[test]
    fn harvested_volume_is_elementwise() {
        let rain = [0.0, 1.5, 4.0, 12.25];
        let out = harvested_volume(&rain, 80.0, 0.9);
        assert_eq!(out.len(), rain.len());
        for (r, h) in rain.iter().zip(&out) {
            assert_relative_eq!(*h, r * 80.0 * 0.9);
        }
    }

    #[test]
    fn harvested_volume_accepts_unvalidated_inputs() {
        assert_eq!(harvested_volume(&[2.0], -5.0, 1.5), vec![-15.0]);
        assert!(harvested_volume(&[], 100.0, 0.8).is_empty());
    }

    // -- step() tests --

    #[test]
    fn step_does_not_mutate_input_state() {
        let s = TankState {
            storage: 30.0,
            capacity: 40.0,
            overflow: 0.0,
        };
        let (new_state, fluxes) = step(&s, 10.0, 5.0);
        assert_eq!(s.storage, 30.0);
        assert_eq!(new_state.storage, 25.0);
        assert_eq!(fluxes.storage, 25.0);
        assert_eq!(fluxes.capacity, 40.0);
    }

    #[test]
    fn step_clamps_shortfall() {
        let (new_state, fluxes) = step(&TankState::empty(), 10.0, 3.0);
        assert_eq!(new_state.storage, 0.0);
        assert_eq!(new_state.capacity, 0.0);
        assert_eq!(fluxes.spill, 0.0);
    }

    #[test]
    fn step_raises_capacity_before_spill_check() {
        let s = TankState {
            storage: 50.0,
            capacity: 60.0,
            overflow: 2.0,
        };
        // 50 + 30 - 10 = 70 > 60: phase 2 raises capacity first, so no spill
        let (new_state, fluxes) = step(&s, 10.0, 30.0);
        assert_eq!(new_state.capacity, 70.0);
        assert_eq!(fluxes.spill, 0.0);
        assert_eq!(new_state.overflow, 2.0);
    }

    // -- optimize() tests --

    #[test]
    fn optimize_steady_surplus() {
        let result = optimize(&[10.0, 10.0, 10.0], 5.0);
        assert_eq!(
            result,
            StorageOptimization {
                max_storage_needed: 15.0,
                overflow: 0.0
            }
        );
    }

    #[test]
    fn optimize_single_peak_then_drawdown() {
        let result = optimize(&[100.0, 0.0, 0.0], 10.0);
        assert_eq!(result.max_storage_needed, 90.0);
        assert_eq!(result.overflow, 0.0);
    }

    #[test]
    fn optimize_refills_after_empty_tank() {
        // 20 → 10 → 0 → 0 (clamped from -10) → 40 → 30
        let result = optimize(&[30.0, 0.0, 0.0, 0.0, 50.0, 0.0], 10.0);
        assert_eq!(result.max_storage_needed, 40.0);
        assert_eq!(result.overflow, 0.0);
    }

    #[test]
    fn optimize_demand_always_exceeds_supply() {
        let result = optimize(&[1.0, 2.0, 3.0], 5.0);
        assert_eq!(result, StorageOptimization::default());
    }

    #[test]
    fn optimize_empty_series() {
        assert_eq!(optimize(&[], 5.0), StorageOptimization::default());
    }

    #[test]
    fn optimize_is_deterministic() {
        let harvested = [12.0, 0.0, 7.5, 40.0, 3.0, 0.0, 18.0];
        assert_eq!(optimize(&harvested, 6.0), optimize(&harvested, 6.0));
    }

    #[test]
    fn optimize_accepts_negative_consumption() {
        // Negative demand behaves as extra inflow
        let result = optimize(&[0.0, 0.0], -5.0);
        assert_eq!(result.max_storage_needed, 10.0);
    }

    // -- storage_trace() tests --

    #[test]
    fn trace_length_matches_input() {
        let trace = storage_trace(&[10.0, 0.0, 5.0], 2.0, None);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.storage, vec![8.0, 6.0, 9.0]);
        assert_eq!(trace.capacity, vec![8.0, 8.0, 9.0]);
    }

    #[test]
    fn trace_final_day_matches_optimize() {
        let harvested = [40.0, 0.0, 25.0, 60.0, 0.0, 0.0, 10.0];
        let trace = storage_trace(&harvested, 15.0, None);
        let last = trace.last().unwrap();
        let result = optimize(&harvested, 15.0);
        assert_eq!(last.capacity, result.max_storage_needed);
        assert_eq!(last.overflow, result.overflow);
    }

    #[test]
    fn trace_custom_initial_state() {
        let seeded = TankState {
            storage: 100.0,
            capacity: 100.0,
            overflow: 0.0,
        };
        let default_trace = storage_trace(&[0.0; 3], 10.0, None);
        let seeded_trace = storage_trace(&[0.0; 3], 10.0, Some(&seeded));
        assert_eq!(default_trace.storage[2], 0.0);
        assert_eq!(seeded_trace.storage[2], 70.0);
    }
}
