//! # Centrifugal Fan Aerodynamics
//!
//! Fan-similarity and empirical sizing relations for a single-inlet
//! centrifugal impeller.
//!
//! ## Notation
//!
//! - `Q` = Volumetric flow (CFM, or m³/s where noted)
//! - `p` = Static pressure rise (Pa, or in. w.g. where noted)
//! - `N` = Rotational speed (rpm)
//! - `β2` = Blade outlet angle (degrees)
//! - `ψ` = Pressure coefficient
//! - `η` = Static efficiency
//! - `u2` = Tip speed (m/s)
//! - `D2`, `D1` = Outer and inner (eye) diameters
//!
//! ## References
//!
//! - Jorgensen, *Fan Engineering*, specific speed in US customary form
//! - Eck, *Fans*, blade number estimate (Pfleiderer form)

use std::f64::consts::PI;

use super::floor_at;
use crate::units::Degrees;

/// Floor on p^0.75 in the specific-speed denominator
pub const SPECIFIC_SPEED_PRESSURE_FLOOR: f64 = 0.001;

/// Specific speed below which radial blades are recommended
pub const RADIAL_NS_LIMIT: f64 = 5000.0;

/// Specific speed above which forward-curved blades are recommended
pub const FORWARD_NS_LIMIT: f64 = 30000.0;

/// Lowest static efficiency the correlation will report
pub const MIN_STATIC_EFFICIENCY: f64 = 0.3;

/// Empirical margin applied to the ideal tip speed
pub const TIP_SPEED_MARGIN: f64 = 1.1;

/// Tip speed above which the impeller is flagged (m/s)
pub const TIP_SPEED_LIMIT_M_S: f64 = 200.0;

/// Eye-to-tip diameter ratio D1/D2
pub const EYE_RATIO: f64 = 0.5;

/// Hub-to-eye diameter ratio Dhub/D1
pub const HUB_RATIO: f64 = 0.4;

/// Meridional velocity at the outlet as a fraction of tip speed
pub const OUTLET_FLOW_FACTOR: f64 = 0.25;

/// Fewest blades the sizing will return
pub const MIN_BLADES: u8 = 6;

/// Most blades the sizing will return
pub const MAX_BLADES: u8 = 12;

/// Specific speed in US customary units
///
/// # Formula
/// ```text
/// Ns = N · √Q / max(p^0.75, 0.001)
/// ```
///
/// # Arguments
/// * `rpm` - Rotational speed (rpm)
/// * `flow_cfm` - Volumetric flow (CFM)
/// * `pressure_in_wg` - Static pressure (in. w.g.)
#[inline]
pub fn specific_speed(rpm: f64, flow_cfm: f64, pressure_in_wg: f64) -> f64 {
    let denominator = floor_at(pressure_in_wg.powf(0.75), SPECIFIC_SPEED_PRESSURE_FLOOR);
    rpm * flow_cfm.sqrt() / denominator
}

/// Pressure coefficient from blade outlet angle
///
/// # Formula
/// ```text
/// ψ = 0.0133 · β2 + 0.4
/// ```
#[inline]
pub fn pressure_coefficient(outlet_angle_deg: f64) -> f64 {
    0.0133 * outlet_angle_deg + 0.4
}

/// Static efficiency correlation
///
/// Efficiency rises with size (flow) and falls as the outlet angle departs
/// from 40°. Floored at 0.3, not capped at 1.0.
///
/// # Formula
/// ```text
/// η = max(0.3, 0.52 + 0.12 · log10(max(Q, 1)) − 0.002 · |β2 − 40|)
/// ```
#[inline]
pub fn static_efficiency(flow_cfm: f64, outlet_angle_deg: f64) -> f64 {
    let size_term = 0.12 * floor_at(flow_cfm, 1.0).log10();
    let angle_term = 0.002 * (outlet_angle_deg - 40.0).abs();
    floor_at(0.52 + size_term - angle_term, MIN_STATIC_EFFICIENCY)
}

/// Impeller tip speed required for the pressure rise (m/s)
///
/// # Formula
/// ```text
/// u2 = 1.1 · √(2p / (ρ · ψ · η))
/// ```
///
/// # Arguments
/// * `static_pressure_pa` - Static pressure rise (Pa)
/// * `density_kg_m3` - Air density (kg/m³)
/// * `psi` - Pressure coefficient
/// * `efficiency` - Static efficiency
#[inline]
pub fn tip_speed(static_pressure_pa: f64, density_kg_m3: f64, psi: f64, efficiency: f64) -> f64 {
    (2.0 * static_pressure_pa / (density_kg_m3 * psi * efficiency)).sqrt() * TIP_SPEED_MARGIN
}

/// Outer diameter from tip speed and shaft speed (m)
///
/// # Formula
/// ```text
/// D2 = 60 · u2 / (π · N)
/// ```
///
/// Zero rpm is not guarded and yields an infinite (or NaN) diameter.
#[inline]
pub fn outer_diameter_m(tip_speed_m_s: f64, rpm: f64) -> f64 {
    tip_speed_m_s * 60.0 / (PI * rpm)
}

/// Outlet (tip) blade width (mm)
///
/// # Formula
/// ```text
/// b2 = Q / (π · D2 · 0.25 · u2) · 1000
/// ```
///
/// # Arguments
/// * `flow_m3_s` - Volumetric flow (m³/s)
/// * `outer_diameter_m` - D2 (m)
/// * `tip_speed_m_s` - u2 (m/s)
#[inline]
pub fn outlet_width_mm(flow_m3_s: f64, outer_diameter_m: f64, tip_speed_m_s: f64) -> f64 {
    flow_m3_s / (PI * outer_diameter_m * OUTLET_FLOW_FACTOR * tip_speed_m_s) * 1000.0
}

/// Unrounded blade number estimate
///
/// # Formula
/// ```text
/// z = 8.5 · sin(β2) · D2 / (D2 − D1)     (D2 ≠ D1)
/// z = 10                                 (D2 = D1)
/// ```
///
/// Diameters may be in any consistent unit.
#[inline]
pub fn blade_count_raw(outlet_angle_deg: f64, outer_diameter: f64, inner_diameter: f64) -> f64 {
    if outer_diameter != inner_diameter {
        let beta2 = Degrees(outlet_angle_deg).to_radians();
        8.5 * beta2.sin() * outer_diameter / (outer_diameter - inner_diameter)
    } else {
        10.0
    }
}

/// Round a blade estimate and clamp it to [6, 12]
///
/// A NaN estimate (from a NaN diameter) lands on the lower bound so the
/// count is always a usable integer.
#[inline]
pub fn blade_count(raw: f64) -> u8 {
    if raw.is_nan() {
        return MIN_BLADES;
    }
    raw.round().clamp(MIN_BLADES as f64, MAX_BLADES as f64) as u8
}
