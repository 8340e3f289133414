use rainharvest_macros::Timeseries;

#[derive(Debug, Clone, Copy, PartialEq, Timeseries)]
pub struct DailyYield {
    pub rainfall: f64,
    pub harvested: f64,
    pub storage: f64,
}

fn main() {
    let day = DailyYield { rainfall: 4.2, harvested: 336.0, storage: 120.0 };
    let mut ts = DailyYieldTimeseries::with_capacity(365);
    assert!(ts.is_empty());
    assert!(ts.last().is_none());

    ts.push(&day);
    assert_eq!(ts.len(), 1);
    assert_eq!(ts.harvested, vec![336.0]);
    assert_eq!(ts.get(0), Some(day));
    assert_eq!(ts.get(1), None);
}
