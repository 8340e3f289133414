/// Tank outputs for one simulated day.
///
/// `TankFluxes` is returned by `step()`; the derived `TankTimeseries` holds
/// the full run column by column.
use rainharvest_macros::Timeseries;

use crate::traits::TimeseriesOps;

#[derive(Debug, Clone, Copy, PartialEq, Timeseries)]
#[timeseries(name = "TankTimeseries")]
pub struct TankFluxes {
    pub inflow: f64,   // harvested water entering the tank [L]
    pub demand: f64,   // daily consumption drawn [L]
    pub storage: f64,  // level at end of day [L]
    pub capacity: f64, // running capacity requirement [L]
    pub spill: f64,    // volume spilled this day [L]
    pub overflow: f64, // cumulative spill [L]
}

impl TimeseriesOps<TankFluxes> for TankTimeseries {
    fn with_capacity(n: usize) -> Self {
        TankTimeseries::with_capacity(n)
    }

    fn push(&mut self, f: &TankFluxes) {
        TankTimeseries::push(self, f)
    }

    fn len(&self) -> usize {
        TankTimeseries::len(self)
    }

    fn is_empty(&self) -> bool {
        TankTimeseries::is_empty(self)
    }
}
