//! Headline figures derived from a finished run.
//!
//! All functions take plain slices or scalars and return a scalar.

/// Sum of a daily series.
pub fn total(series: &[f64]) -> f64 {
    series.iter().sum()
}

/// Unrounded sum over the first `days` entries (the whole series if shorter).
pub fn period_total(series: &[f64], days: usize) -> f64 {
    series.iter().take(days).sum()
}

/// Harvested volume that stays in the tank [L].
pub fn retained_volume(total_harvested: f64, overflow: f64) -> f64 {
    total_harvested - overflow
}

/// Share of harvested water retained, in percent.
///
/// `None` when nothing was harvested, since the ratio is undefined.
pub fn efficiency(total_harvested: f64, overflow: f64) -> Option<f64> {
    if total_harvested == 0.0 {
        return None;
    }
    Some(retained_volume(total_harvested, overflow) / total_harvested * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // --- total ---

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn total_known_value() {
        assert_relative_eq!(total(&[1.5, 2.5, 0.0, 6.0]), 10.0);
    }

    // --- period_total ---

    #[test]
    fn period_total_first_week() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 100.0];
        assert_relative_eq!(period_total(&series, 7), 28.0);
    }

    #[test]
    fn period_total_short_series() {
        assert_relative_eq!(period_total(&[2.0, 3.0], 7), 5.0);
    }

    // --- efficiency ---

    #[test]
    fn efficiency_no_overflow_is_full() {
        assert_relative_eq!(efficiency(1200.0, 0.0).unwrap(), 100.0);
    }

    #[test]
    fn efficiency_known_value() {
        // 1000 harvested, 250 spilled → 75 %
        assert_relative_eq!(efficiency(1000.0, 250.0).unwrap(), 75.0, epsilon = 1e-10);
    }

    #[test]
    fn efficiency_undefined_without_harvest() {
        assert_eq!(efficiency(0.0, 0.0), None);
    }

    #[test]
    fn retained_volume_subtracts_overflow() {
        assert_relative_eq!(retained_volume(500.0, 120.0), 380.0);
    }
}
