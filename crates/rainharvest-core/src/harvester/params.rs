/// Harvesting surface parameters.
///
/// - `roof_area`: Catchment area [m²]
/// - `runoff_coefficient`: Fraction of rainfall that is collected [-]
///
/// One millimetre of rain on one square metre yields one litre, so volumes
/// derived from these parameters are in litres.
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RUNOFF_COEFFICIENT, RUNOFF_COEFFICIENT_BOUNDS};
use crate::error::{ensure_finite, HarvestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarvesterConfig {
    pub roof_area: f64,
    pub runoff_coefficient: f64,
}

impl HarvesterConfig {
    /// Create a validated config.
    ///
    /// Validates:
    /// - both values are finite
    /// - roof area is strictly positive
    /// - runoff coefficient lies within [0, 1]
    pub fn new(roof_area: f64, runoff_coefficient: f64) -> Result<Self> {
        ensure_finite("roof area", roof_area)?;
        ensure_finite("runoff coefficient", runoff_coefficient)?;
        if roof_area <= 0.0 {
            return Err(HarvestError::InvalidRoofArea(roof_area));
        }
        let bounds = RUNOFF_COEFFICIENT_BOUNDS;
        if !(bounds.min..=bounds.max).contains(&runoff_coefficient) {
            return Err(HarvestError::InvalidRunoffCoefficient {
                value: runoff_coefficient,
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(Self {
            roof_area,
            runoff_coefficient,
        })
    }

    /// Validated config using the default runoff coefficient.
    pub fn with_roof_area(roof_area: f64) -> Result<Self> {
        Self::new(roof_area, DEFAULT_RUNOFF_COEFFICIENT)
    }

    /// Collected volume [L] for each day of `rainfall` [mm].
    pub fn harvested_volume(&self, rainfall: &[f64]) -> Vec<f64> {
        super::run::harvested_volume(rainfall, self.roof_area, self.runoff_coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let c = HarvesterConfig::new(100.0, 0.8).unwrap();
        assert_eq!(c.roof_area, 100.0);
        assert_eq!(c.runoff_coefficient, 0.8);
    }

    #[test]
    fn default_coefficient() {
        let c = HarvesterConfig::with_roof_area(50.0).unwrap();
        assert_eq!(c.runoff_coefficient, DEFAULT_RUNOFF_COEFFICIENT);
    }

    #[test]
    fn roof_area_must_be_positive() {
        assert_eq!(
            HarvesterConfig::new(0.0, 0.8),
            Err(HarvestError::InvalidRoofArea(0.0))
        );
        assert!(HarvesterConfig::new(-10.0, 0.8).is_err());
    }

    #[test]
    fn coefficient_out_of_range() {
        assert!(HarvesterConfig::new(100.0, -0.1).is_err());
        assert!(HarvesterConfig::new(100.0, 1.01).is_err());
    }

    #[test]
    fn coefficient_boundaries_are_valid() {
        assert!(HarvesterConfig::new(100.0, 0.0).is_ok());
        assert!(HarvesterConfig::new(100.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(HarvesterConfig::new(f64::NAN, 0.8).is_err());
        assert!(HarvesterConfig::new(100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn method_matches_free_function() {
        let c = HarvesterConfig::new(120.0, 0.75).unwrap();
        assert_eq!(c.harvested_volume(&[2.0, 0.0]), vec![180.0, 0.0]);
    }
}
