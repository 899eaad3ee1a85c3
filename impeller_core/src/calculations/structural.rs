//! # Structural Analyzer
//!
//! Third stage: centrifugal stress in the impeller for the selected material
//! and the resulting yield safety factor.

use serde::{Deserialize, Serialize};

use crate::equations::rotor::centrifugal_stress_mpa;
use crate::equations::safety_factor;
use crate::materials::MaterialProperties;

/// Safety factor above which the rotor is SAFE
pub const SAFE_FACTOR: f64 = 2.0;

/// Safety factor above which the rotor is ACCEPTABLE
pub const ACCEPTABLE_FACTOR: f64 = 1.5;

/// Qualitative structural classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StressStatus {
    /// Safety factor > 2
    Safe,
    /// 1.5 < safety factor ≤ 2
    Acceptable,
    /// Safety factor ≤ 1.5, or not a number
    Unsafe,
}

impl StressStatus {
    /// Classify a safety factor. Anything that fails both comparisons,
    /// including NaN, is UNSAFE.
    pub fn from_safety_factor(factor: f64) -> Self {
        if factor > SAFE_FACTOR {
            StressStatus::Safe
        } else if factor > ACCEPTABLE_FACTOR {
            StressStatus::Acceptable
        } else {
            StressStatus::Unsafe
        }
    }

    /// Display string
    pub fn as_str(&self) -> &'static str {
        match self {
            StressStatus::Safe => "SAFE",
            StressStatus::Acceptable => "ACCEPTABLE",
            StressStatus::Unsafe => "UNSAFE",
        }
    }
}

impl std::fmt::Display for StressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural check results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralCheck {
    /// Catalog key of the material checked
    pub material: String,
    /// Centrifugal stress σ (MPa)
    #[serde(with = "crate::float_json")]
    pub stress_mpa: f64,
    /// Material yield strength Sy (MPa)
    #[serde(with = "crate::float_json")]
    pub yield_strength_mpa: f64,
    /// Sy / σ
    #[serde(with = "crate::float_json")]
    pub safety_factor: f64,
    /// Classification of the safety factor
    pub status: StressStatus,
}

impl StructuralCheck {
    /// Check if the rotor passes (SAFE or ACCEPTABLE)
    pub fn passes(&self) -> bool {
        !matches!(self.status, StressStatus::Unsafe)
    }
}

/// Evaluate the structural analyzer for a tip speed (m/s).
pub fn calculate(material: &MaterialProperties, tip_speed_m_s: f64) -> StructuralCheck {
    let stress_mpa = centrifugal_stress_mpa(material.density_kg_m3, tip_speed_m_s, material.poisson_ratio);
    let factor = safety_factor(material.yield_strength_mpa, stress_mpa);

    StructuralCheck {
        material: material.key.to_string(),
        stress_mpa,
        yield_strength_mpa: material.yield_strength_mpa,
        safety_factor: factor,
        status: StressStatus::from_safety_factor(factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials;

    #[test]
    fn test_steel_reference() {
        let steel = materials::lookup("Steel").unwrap();
        let check = calculate(steel, 49.3954);
        assert!((check.stress_mpa - 8.2997).abs() < 1e-3);
        assert!((check.safety_factor - 30.12).abs() < 0.01);
        assert_eq!(check.status, StressStatus::Safe);
        assert!(check.passes());
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(StressStatus::from_safety_factor(2.01), StressStatus::Safe);
        assert_eq!(StressStatus::from_safety_factor(2.0), StressStatus::Acceptable);
        assert_eq!(StressStatus::from_safety_factor(1.51), StressStatus::Acceptable);
        assert_eq!(StressStatus::from_safety_factor(1.5), StressStatus::Unsafe);
        assert_eq!(StressStatus::from_safety_factor(0.0), StressStatus::Unsafe);
        assert_eq!(StressStatus::from_safety_factor(-3.0), StressStatus::Unsafe);
    }

    #[test]
    fn test_status_degenerate_factors() {
        assert_eq!(StressStatus::from_safety_factor(f64::INFINITY), StressStatus::Safe);
        assert_eq!(StressStatus::from_safety_factor(f64::NAN), StressStatus::Unsafe);
    }

    #[test]
    fn test_zero_tip_speed() {
        // Zero stress: infinite safety factor, no panic
        let steel = materials::lookup("Steel").unwrap();
        let check = calculate(steel, 0.0);
        assert!(check.safety_factor.is_infinite());
        assert_eq!(check.status, StressStatus::Safe);
    }

    #[test]
    fn test_fast_frp_rotor_is_unsafe() {
        // FRP at 250 m/s: 1850 * 62500 * 1.28 / 3 = 49.3 MPa → SF ≈ 3.0
        // FRP at 400 m/s: 126.3 MPa → SF ≈ 1.19
        let frp = materials::lookup("FRP").unwrap();
        assert_eq!(calculate(frp, 250.0).status, StressStatus::Safe);
        let check = calculate(frp, 400.0);
        assert_eq!(check.status, StressStatus::Unsafe);
        assert!(!check.passes());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&StressStatus::Acceptable).unwrap(), "\"ACCEPTABLE\"");
    }
}
