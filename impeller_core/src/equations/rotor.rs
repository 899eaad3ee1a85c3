//! # Rotor Structural Formulas
//!
//! Thin rotating-disk stress approximation for the impeller, and solid-shaft
//! torsion sizing for the drive shaft.
//!
//! ## References
//!
//! - Timoshenko & Goodier, *Theory of Elasticity*, rotating disk of uniform thickness
//! - Shigley, *Mechanical Engineering Design*, torsion of solid round shafts

use std::f64::consts::PI;

use super::floor_at;
use crate::units::{MegaPascals, Pascals};

/// Service factor applied to shaft torque
pub const SHAFT_SERVICE_FACTOR: f64 = 1.5;

/// Allowable shear stress for shaft steel (Pa)
pub const SHAFT_ALLOWABLE_SHEAR_PA: f64 = 40.0e6;

/// Smallest shaft the shop will turn (mm)
pub const MIN_SHAFT_DIAMETER_MM: f64 = 20.0;

/// Centrifugal hoop stress in a rotating disk (Pa)
///
/// # Formula
/// ```text
/// σ = ρ · u2² · (1 + ν) / 3
/// ```
///
/// # Arguments
/// * `density_kg_m3` - Material density ρ
/// * `tip_speed_m_s` - Rim speed u2
/// * `poisson_ratio` - ν
#[inline]
pub fn centrifugal_stress_pa(density_kg_m3: f64, tip_speed_m_s: f64, poisson_ratio: f64) -> f64 {
    density_kg_m3 * tip_speed_m_s.powi(2) * (1.0 + poisson_ratio) / 3.0
}

/// Yield safety factor Sy / σ
///
/// Both arguments in MPa. Zero stress gives `inf`, 0/0 gives NaN; the
/// classification downstream handles both.
#[inline]
pub fn safety_factor(yield_strength_mpa: f64, stress_mpa: f64) -> f64 {
    yield_strength_mpa / stress_mpa
}

/// Convenience: stress in MPa from the disk formula
#[inline]
pub fn centrifugal_stress_mpa(density_kg_m3: f64, tip_speed_m_s: f64, poisson_ratio: f64) -> f64 {
    MegaPascals::from(Pascals(centrifugal_stress_pa(density_kg_m3, tip_speed_m_s, poisson_ratio))).0
}

/// Minimum solid shaft diameter for a torque (mm, unrounded)
///
/// # Formula
/// ```text
/// d = ∛(16 · T · SF / (π · τ_allow)) · 1000
/// ```
///
/// with SF = 1.5 and τ_allow = 40 MPa. Negative torque has no real cube root
/// under `powf` and yields NaN.
#[inline]
pub fn min_shaft_diameter_mm(torque_nm: f64) -> f64 {
    ((16.0 * torque_nm * SHAFT_SERVICE_FACTOR) / (PI * SHAFT_ALLOWABLE_SHEAR_PA)).powf(1.0 / 3.0) * 1000.0
}

/// Round a computed shaft diameter to whole millimeters, never below 20 mm
#[inline]
pub fn standard_shaft_diameter_mm(diameter_mm: f64) -> f64 {
    floor_at(diameter_mm.round(), MIN_SHAFT_DIAMETER_MM)
}
