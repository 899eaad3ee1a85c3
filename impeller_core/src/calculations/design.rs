//! # Impeller Design
//!
//! The single entry point of the engine: one forward pass through the five
//! sizing stages.
//!
//! ```text
//! DesignInput ─► air ─► aero ─┬─► structural
//!                             ├─► power ─► shaft
//!                             └─► geometry script
//! ```
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::calculations::design::{evaluate, DesignInput};
//!
//! let input = DesignInput {
//!     flow_rate_cfm: 8000.0,
//!     material: "Aluminum".to_string(),
//!     ..DesignInput::default()
//! };
//!
//! let result = evaluate(&input).unwrap();
//! assert!((6..=12).contains(&result.aero.blade_count));
//! println!("D2 = {:.0} mm, SF = {:.2}", result.aero.outer_diameter_mm, result.structural.safety_factor);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::export;
use crate::materials;

use super::aero::{self, AeroSizing, BladeType, TipSpeedStatus};
use super::air::{self, AirProperties, AltitudeStatus};
use super::power::{self, MotorStatus, PowerTrain};
use super::shaft::{self, ShaftSizing};
use super::structural::{self, StressStatus, StructuralCheck};

/// Operating point and construction choices for one impeller.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flow_rate_cfm": 5000.0,
///   "static_pressure_pa": 1000.0,
///   "rpm": 1750.0,
///   "motor_rating_hp": 10.0,
///   "temperature_f": 70.0,
///   "altitude_ft": 0.0,
///   "outlet_angle_deg": 35.0,
///   "inlet_angle_deg": 25.0,
///   "material": "Steel",
///   "blade_type": "Backward"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Volumetric flow (CFM)
    #[serde(with = "crate::float_json")]
    pub flow_rate_cfm: f64,
    /// Static pressure rise across the fan (Pa)
    #[serde(with = "crate::float_json")]
    pub static_pressure_pa: f64,
    /// Impeller speed (rev/min)
    #[serde(with = "crate::float_json")]
    pub rpm: f64,
    /// Motor nameplate power (HP)
    #[serde(with = "crate::float_json")]
    pub motor_rating_hp: f64,
    /// Ambient temperature (°F)
    #[serde(with = "crate::float_json")]
    pub temperature_f: f64,
    /// Site elevation (ft)
    #[serde(with = "crate::float_json")]
    pub altitude_ft: f64,
    /// Blade exit angle β2 (degrees)
    #[serde(with = "crate::float_json")]
    pub outlet_angle_deg: f64,
    /// Blade inlet angle β1 (degrees). Reported only.
    #[serde(with = "crate::float_json")]
    pub inlet_angle_deg: f64,
    /// Material catalog key
    pub material: String,
    /// Blade form chosen by the designer. Advisory; the sizing does not
    /// depend on it.
    pub blade_type: BladeType,
}

impl Default for DesignInput {
    fn default() -> Self {
        Self {
            flow_rate_cfm: 5000.0,
            static_pressure_pa: 1000.0,
            rpm: 1750.0,
            motor_rating_hp: 10.0,
            temperature_f: 70.0,
            altitude_ft: 0.0,
            outlet_angle_deg: 35.0,
            inlet_angle_deg: 25.0,
            material: "Steel".to_string(),
            blade_type: BladeType::Backward,
        }
    }
}

/// Everything computed for one [`DesignInput`].
///
/// Non-finite values (zero rpm, absolute-zero temperature, ...) are kept as
/// data. Use [`DesignResult::non_finite_fields`] to surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub air: AirProperties,
    pub aero: AeroSizing,
    pub structural: StructuralCheck,
    pub power: PowerTrain,
    pub shaft: ShaftSizing,
    /// CAD geometry script (see [`export::geometry_script`])
    pub geometry_script: String,
}

impl DesignResult {
    /// Every numeric output, by name
    pub fn numeric_fields(&self) -> [(&'static str, f64); 23] {
        [
            ("density_imperial_lb_ft3", self.air.density_imperial_lb_ft3),
            ("density_si_kg_m3", self.air.density_si_kg_m3),
            ("flow_si_m3_s", self.aero.flow_si_m3_s),
            ("pressure_in_wg", self.aero.pressure_in_wg),
            ("specific_speed", self.aero.specific_speed),
            ("pressure_coefficient", self.aero.pressure_coefficient),
            ("static_efficiency", self.aero.static_efficiency),
            ("tip_speed_m_s", self.aero.tip_speed_m_s),
            ("outer_diameter_mm", self.aero.outer_diameter_mm),
            ("inner_diameter_mm", self.aero.inner_diameter_mm),
            ("hub_diameter_mm", self.aero.hub_diameter_mm),
            ("outlet_width_mm", self.aero.outlet_width_mm),
            ("inlet_width_mm", self.aero.inlet_width_mm),
            ("blade_count_raw", self.aero.blade_count_raw),
            ("stress_mpa", self.structural.stress_mpa),
            ("safety_factor", self.structural.safety_factor),
            ("air_power_hp", self.power.air_power_hp),
            ("brake_power_hp", self.power.brake_power_hp),
            ("motor_load_pct", self.power.motor_load_pct),
            ("torque_nm", self.power.torque_nm),
            ("min_shaft_diameter_mm", self.shaft.min_diameter_mm),
            ("standard_shaft_diameter_mm", self.shaft.standard_diameter_mm),
            ("yield_strength_mpa", self.structural.yield_strength_mpa),
        ]
    }

    /// Names of every numeric output that is infinite or NaN
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        self.numeric_fields()
            .iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| *name)
            .collect()
    }

    /// True if any status is not OK/SAFE or any output is non-finite
    pub fn has_warnings(&self) -> bool {
        self.air.altitude_status != AltitudeStatus::Ok
            || self.aero.tip_speed_status != TipSpeedStatus::Ok
            || self.structural.status != StressStatus::Safe
            || self.power.motor_status != MotorStatus::Ok
            || !self.non_finite_fields().is_empty()
    }
}

/// Run the full sizing pass.
///
/// The material is resolved first; an unknown key fails with
/// [`CalcError::MaterialNotFound`](crate::errors::CalcError::MaterialNotFound)
/// before any stage runs. Every other input is accepted as-is.
pub fn evaluate(input: &DesignInput) -> CalcResult<DesignResult> {
    let material = materials::lookup(&input.material)?;

    let air = air::calculate(input.temperature_f, input.altitude_ft);
    let aero = aero::calculate(input, &air);
    let structural = structural::calculate(material, aero.tip_speed_m_s);
    let power = power::calculate(input, &aero);
    let shaft = shaft::calculate(power.torque_nm);
    let geometry_script = export::geometry_script(
        aero.outer_diameter_mm,
        aero.inner_diameter_mm,
        aero.blade_count,
    );

    Ok(DesignResult {
        air,
        aero,
        structural,
        power,
        shaft,
        geometry_script,
    })
}
