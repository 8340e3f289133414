//! Simulation defaults and boundary limits.
//!
//! Defaults match the calculator's prompts: a 365-day year, 5 mm mean daily
//! rainfall with 2 mm spread, and a 0.8 runoff coefficient.

// -- Defaults --

/// Number of simulated days.
pub const DEFAULT_DAYS: usize = 365;

/// Mean daily rainfall [mm].
pub const DEFAULT_MEAN_RAINFALL: f64 = 5.0;

/// Standard deviation of daily rainfall [mm].
pub const DEFAULT_STD_DEV: f64 = 2.0;

/// Fraction of roof rainfall that reaches the tank [-].
pub const DEFAULT_RUNOFF_COEFFICIENT: f64 = 0.8;

// -- Aggregation periods --

/// Days covered by the weekly summary.
pub const DAYS_PER_WEEK: usize = 7;

/// Days per monthly block. Trailing days that do not fill a block are dropped.
pub const DAYS_PER_MONTH: usize = 30;

/// Monthly blocks kept inline before spilling to the heap (one 365-day year).
pub const MONTHS_INLINE: usize = 12;

// -- Bounds --

/// Inclusive (min, max) range for a bounded input.
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Runoff coefficient [-].
pub const RUNOFF_COEFFICIENT_BOUNDS: Bounds = Bounds { min: 0.0, max: 1.0 };
