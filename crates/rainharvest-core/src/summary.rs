//! Weekly and monthly roll-ups of the daily series.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{DAYS_PER_MONTH, DAYS_PER_WEEK, MONTHS_INLINE};

/// One row of a period table. Values are rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// 1-based position of the period.
    pub index: usize,
    /// Rainfall over the period [mm].
    pub rainfall: f64,
    /// Collected volume over the period [L].
    pub harvested_water: f64,
}

pub type WeeklySummary = [PeriodSummary; DAYS_PER_WEEK];
pub type MonthlySummary = SmallVec<[PeriodSummary; MONTHS_INLINE]>;

/// Table granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// The first seven individual days.
    Weekly,
    /// Consecutive 30-day blocks.
    Monthly,
}

impl Period {
    /// Days counted in the table's Total row for a series of `n` days.
    ///
    /// The monthly total covers the whole series, including the trailing
    /// days that do not fill a block.
    pub fn total_days(self, n: usize) -> usize {
        match self {
            Period::Weekly => DAYS_PER_WEEK.min(n),
            Period::Monthly => n,
        }
    }

    /// Row label used in table headers.
    pub fn row_label(self) -> &'static str {
        match self {
            Period::Weekly => "Day",
            Period::Monthly => "Month",
        }
    }
}

/// Round to one decimal place through the exact decimal expansion.
///
/// Matches fixed-point formatting with one digit: 2.25 becomes 2.2 and the
/// stored 0.15 (just below 0.15) becomes 0.1.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// The first seven days, one row each.
///
/// # Panics
/// If the series differ in length or hold fewer than seven days.
pub fn weekly_summary(rainfall: &[f64], harvested: &[f64]) -> WeeklySummary {
    assert_eq!(
        rainfall.len(),
        harvested.len(),
        "rainfall and harvested must have the same length"
    );
    assert!(
        rainfall.len() >= DAYS_PER_WEEK,
        "weekly summary needs at least {} days, got {}",
        DAYS_PER_WEEK,
        rainfall.len()
    );

    std::array::from_fn(|day| PeriodSummary {
        index: day + 1,
        rainfall: round_to_tenth(rainfall[day]),
        harvested_water: round_to_tenth(harvested[day]),
    })
}

/// Sums over each full 30-day block; a trailing partial block is dropped.
///
/// # Panics
/// If the series differ in length.
pub fn monthly_summary(rainfall: &[f64], harvested: &[f64]) -> MonthlySummary {
    assert_eq!(
        rainfall.len(),
        harvested.len(),
        "rainfall and harvested must have the same length"
    );

    rainfall
        .chunks_exact(DAYS_PER_MONTH)
        .zip(harvested.chunks_exact(DAYS_PER_MONTH))
        .enumerate()
        .map(|(month, (rain, water))| PeriodSummary {
            index: month + 1,
            rainfall: round_to_tenth(rain.iter().sum()),
            harvested_water: round_to_tenth(water.iter().sum()),
        })
        .collect()
}
