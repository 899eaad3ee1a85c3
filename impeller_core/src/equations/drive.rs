//! # Drive Train Formulas
//!
//! Air power, brake power, motor loading and shaft torque in the customary
//! fan-industry units (CFM, in. w.g., HP).

use super::floor_at;
use crate::units::{Horsepower, Kilowatts};

/// CFM · in. w.g. per horsepower
pub const AIR_POWER_CONSTANT: f64 = 6356.0;

/// N·m per (kW / rpm)
pub const TORQUE_CONSTANT: f64 = 9550.0;

/// Air (output) power in HP
///
/// # Formula
/// ```text
/// AHP = Q · p / 6356
/// ```
#[inline]
pub fn air_power_hp(flow_cfm: f64, pressure_in_wg: f64) -> f64 {
    flow_cfm * pressure_in_wg / AIR_POWER_CONSTANT
}

/// Brake (shaft) power in HP: AHP / η
#[inline]
pub fn brake_power_hp(air_power_hp: f64, efficiency: f64) -> f64 {
    air_power_hp / efficiency
}

/// Motor load as a percentage of nameplate
///
/// A non-positive motor rating reports 0% rather than dividing by it.
#[inline]
pub fn motor_load_pct(brake_power_hp: f64, motor_rating_hp: f64) -> f64 {
    if motor_rating_hp > 0.0 {
        brake_power_hp / motor_rating_hp * 100.0
    } else {
        0.0
    }
}

/// Shaft torque at the impeller (N·m)
///
/// # Formula
/// ```text
/// T = BHP · 0.7457 · 9550 / max(N, 1)
/// ```
///
/// The rpm floor only prevents division by zero; results near 0 rpm are
/// not physically meaningful.
#[inline]
pub fn shaft_torque_nm(brake_power_hp: f64, rpm: f64) -> f64 {
    let power_kw = Kilowatts::from(Horsepower(brake_power_hp)).0;
    power_kw * TORQUE_CONSTANT / floor_at(rpm, 1.0)
}
