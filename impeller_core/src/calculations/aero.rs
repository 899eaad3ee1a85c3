//! # Aerodynamic Sizer
//!
//! Second stage: specific speed and blade-type recommendation, static
//! efficiency, tip speed, and the impeller geometry that follows from it.
//!
//! ## Assumptions
//!
//! - Single-inlet impeller with eye diameter D1 = 0.5 D2 and hub 0.4 D1
//! - Outlet meridional velocity is a quarter of tip speed
//! - Tip speed does not depend on rpm; rpm only sets the diameter

use serde::{Deserialize, Serialize};

use crate::equations::fan::{self, FORWARD_NS_LIMIT, RADIAL_NS_LIMIT, TIP_SPEED_LIMIT_M_S};
use crate::equations::{
    blade_count, blade_count_raw, outer_diameter_m, outlet_width_mm, pressure_coefficient,
    specific_speed, static_efficiency, tip_speed,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Cfm, CubicMetersPerSecond, InchesWaterGauge, Meters, Millimeters, Pascals};

use super::air::AirProperties;
use super::design::DesignInput;

/// Impeller blade form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BladeType {
    /// Straight radial blades
    Radial,
    /// Backward-curved (or backward-inclined) blades
    Backward,
    /// Forward-curved blades
    Forward,
}

impl BladeType {
    /// All blade types for UI selection
    pub const ALL: [BladeType; 3] = [BladeType::Radial, BladeType::Backward, BladeType::Forward];

    /// Recommend a blade type from specific speed.
    ///
    /// Below 5000 → Radial, above 30000 → Forward, otherwise Backward.
    /// NaN falls through to Backward.
    pub fn recommend(specific_speed: f64) -> Self {
        if specific_speed < RADIAL_NS_LIMIT {
            BladeType::Radial
        } else if specific_speed > FORWARD_NS_LIMIT {
            BladeType::Forward
        } else {
            BladeType::Backward
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace(['_', '-'], " ").as_str() {
            "RADIAL" => Ok(BladeType::Radial),
            "BACKWARD" | "BACKWARD CURVED" | "BACKWARD INCLINED" | "BC" => Ok(BladeType::Backward),
            "FORWARD" | "FORWARD CURVED" | "FC" => Ok(BladeType::Forward),
            _ => Err(CalcError::invalid_input(
                "blade_type",
                s,
                "Expected Radial, Backward or Forward",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BladeType::Radial => "Radial",
            BladeType::Backward => "Backward Curved",
            BladeType::Forward => "Forward",
        }
    }
}

impl std::fmt::Display for BladeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tip speed classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipSpeedStatus {
    #[serde(rename = "OK")]
    Ok,
    /// Above 200 m/s
    #[serde(rename = "Tip speed too high!")]
    TooHigh,
}

impl TipSpeedStatus {
    /// Classify a tip speed (m/s). NaN is reported as OK.
    pub fn from_tip_speed(tip_speed_m_s: f64) -> Self {
        if tip_speed_m_s > TIP_SPEED_LIMIT_M_S {
            TipSpeedStatus::TooHigh
        } else {
            TipSpeedStatus::Ok
        }
    }

    /// Display string
    pub fn as_str(&self) -> &'static str {
        match self {
            TipSpeedStatus::Ok => "OK",
            TipSpeedStatus::TooHigh => "Tip speed too high!",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, TipSpeedStatus::Ok)
    }
}

impl std::fmt::Display for TipSpeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aerodynamic sizing results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flow_si_m3_s": 2.36,
///   "pressure_in_wg": 4.01,
///   "specific_speed": 43630.2,
///   "blade_recommendation": "Forward",
///   "pressure_coefficient": 0.8655,
///   "static_efficiency": 0.954,
///   "tip_speed_m_s": 49.4,
///   "tip_speed_status": "OK",
///   "outer_diameter_mm": 539.1,
///   "inner_diameter_mm": 269.5,
///   "hub_diameter_mm": 107.8,
///   "outlet_width_mm": 112.8,
///   "inlet_width_mm": 225.7,
///   "blade_count_raw": 9.75,
///   "blade_count": 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroSizing {
    /// Flow rate (m³/s)
    #[serde(with = "crate::float_json")]
    pub flow_si_m3_s: f64,
    /// Static pressure (in. w.g.)
    #[serde(with = "crate::float_json")]
    pub pressure_in_wg: f64,
    /// Specific speed (US customary)
    #[serde(with = "crate::float_json")]
    pub specific_speed: f64,
    /// Recommended blade type (informational)
    pub blade_recommendation: BladeType,
    /// Pressure coefficient ψ
    #[serde(with = "crate::float_json")]
    pub pressure_coefficient: f64,
    /// Static efficiency η (may exceed 1.0 for very large fans)
    #[serde(with = "crate::float_json")]
    pub static_efficiency: f64,
    /// Tip speed u2 (m/s)
    #[serde(with = "crate::float_json")]
    pub tip_speed_m_s: f64,
    /// Tip speed classification
    pub tip_speed_status: TipSpeedStatus,
    /// Outer diameter D2 (mm)
    #[serde(with = "crate::float_json")]
    pub outer_diameter_mm: f64,
    /// Inner (eye) diameter D1 (mm)
    #[serde(with = "crate::float_json")]
    pub inner_diameter_mm: f64,
    /// Hub diameter (mm)
    #[serde(with = "crate::float_json")]
    pub hub_diameter_mm: f64,
    /// Outlet width b2 (mm)
    #[serde(with = "crate::float_json")]
    pub outlet_width_mm: f64,
    /// Inlet width b1 (mm)
    #[serde(with = "crate::float_json")]
    pub inlet_width_mm: f64,
    /// Unrounded blade estimate
    #[serde(with = "crate::float_json")]
    pub blade_count_raw: f64,
    /// Final blade count, always 6..=12
    pub blade_count: u8,
}

/// Evaluate the aerodynamic sizer.
pub fn calculate(input: &DesignInput, air: &AirProperties) -> AeroSizing {
    let flow_si_m3_s = CubicMetersPerSecond::from(Cfm(input.flow_rate_cfm)).0;
    let pressure_in_wg = InchesWaterGauge::from(Pascals(input.static_pressure_pa)).0;

    let ns = specific_speed(input.rpm, input.flow_rate_cfm, pressure_in_wg);
    let psi = pressure_coefficient(input.outlet_angle_deg);
    let efficiency = static_efficiency(input.flow_rate_cfm, input.outlet_angle_deg);
    let tip = tip_speed(input.static_pressure_pa, air.density_si_kg_m3, psi, efficiency);

    let d2_m = outer_diameter_m(tip, input.rpm);
    let d1_m = fan::EYE_RATIO * d2_m;
    let hub_m = fan::HUB_RATIO * d1_m;

    let b2_mm = outlet_width_mm(flow_si_m3_s, d2_m, tip);
    let b1_mm = b2_mm * d2_m / d1_m;

    let raw = blade_count_raw(input.outlet_angle_deg, d2_m, d1_m);

    AeroSizing {
        flow_si_m3_s,
        pressure_in_wg,
        specific_speed: ns,
        blade_recommendation: BladeType::recommend(ns),
        pressure_coefficient: psi,
        static_efficiency: efficiency,
        tip_speed_m_s: tip,
        tip_speed_status: TipSpeedStatus::from_tip_speed(tip),
        outer_diameter_mm: Millimeters::from(Meters(d2_m)).0,
        inner_diameter_mm: Millimeters::from(Meters(d1_m)).0,
        hub_diameter_mm: Millimeters::from(Meters(hub_m)).0,
        outlet_width_mm: b2_mm,
        inlet_width_mm: b1_mm,
        blade_count_raw: raw,
        blade_count: blade_count(raw),
    }
}
