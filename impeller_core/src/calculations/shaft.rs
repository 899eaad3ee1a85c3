//! # Shaft Sizer
//!
//! Minimum solid shaft diameter from torsion, rounded up to the smallest
//! standard size the shop stocks.

use serde::{Deserialize, Serialize};

use crate::equations::{min_shaft_diameter_mm, standard_shaft_diameter_mm};

/// Shaft sizing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftSizing {
    /// Diameter from the torsion formula (mm)
    #[serde(with = "crate::float_json")]
    pub min_diameter_mm: f64,
    /// Whole-millimeter diameter, never below 20 mm
    #[serde(with = "crate::float_json")]
    pub standard_diameter_mm: f64,
}

/// Size the shaft for a torque (N·m).
pub fn calculate(torque_nm: f64) -> ShaftSizing {
    let min_diameter_mm = min_shaft_diameter_mm(torque_nm);
    ShaftSizing {
        min_diameter_mm,
        standard_diameter_mm: standard_shaft_diameter_mm(min_diameter_mm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_torque_uses_minimum() {
        let shaft = calculate(13.4732);
        assert!((shaft.min_diameter_mm - 13.70).abs() < 0.01);
        assert_eq!(shaft.standard_diameter_mm, 20.0);
    }

    #[test]
    fn test_large_torque_rounds() {
        // 1000 N·m: ∛(24000 / (π · 40e6)) = 0.05759 m
        let shaft = calculate(1000.0);
        assert!((shaft.min_diameter_mm - 57.59).abs() < 0.01);
        assert_eq!(shaft.standard_diameter_mm, 58.0);
    }

    #[test]
    fn test_nan_torque_propagates() {
        let shaft = calculate(f64::NAN);
        assert!(shaft.min_diameter_mm.is_nan());
        assert!(shaft.standard_diameter_mm.is_nan());
    }
}
