use rainharvest_macros::Timeseries;

#[derive(Debug, Clone, Copy, PartialEq, Timeseries)]
#[timeseries(name = "TankLevels")]
pub struct TankDay {
    pub storage: f64,
    pub spill: f64,
}

fn main() {
    let mut ts = TankLevels::with_capacity(2);
    ts.push(&TankDay { storage: 10.0, spill: 0.0 });
    ts.push(&TankDay { storage: 15.0, spill: 1.5 });
    assert_eq!(ts.len(), 2);
    assert_eq!(ts.last(), Some(TankDay { storage: 15.0, spill: 1.5 }));
}
