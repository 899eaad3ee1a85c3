//! # Power-Train Analyzer
//!
//! Fourth stage: air and brake power, motor loading, and shaft torque.

use serde::{Deserialize, Serialize};

use crate::equations::{air_power_hp, brake_power_hp, motor_load_pct, shaft_torque_nm};

use super::aero::AeroSizing;
use super::design::DesignInput;

/// Motor load above which the motor is flagged (percent of nameplate)
pub const HIGH_LOAD_PCT: f64 = 85.0;

/// Motor load above which the motor is overloaded (percent of nameplate)
pub const OVERLOAD_PCT: f64 = 100.0;

/// Motor loading classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotorStatus {
    #[serde(rename = "OK")]
    Ok,
    /// 85% < load ≤ 100%
    #[serde(rename = "High Load")]
    HighLoad,
    /// load > 100%
    #[serde(rename = "OVERLOADED")]
    Overloaded,
}

impl MotorStatus {
    /// Classify a motor load percentage. NaN is reported as OK.
    pub fn from_load_pct(load_pct: f64) -> Self {
        if load_pct > OVERLOAD_PCT {
            MotorStatus::Overloaded
        } else if load_pct > HIGH_LOAD_PCT {
            MotorStatus::HighLoad
        } else {
            MotorStatus::Ok
        }
    }

    /// Display string
    pub fn as_str(&self) -> &'static str {
        match self {
            MotorStatus::Ok => "OK",
            MotorStatus::HighLoad => "High Load",
            MotorStatus::Overloaded => "OVERLOADED",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, MotorStatus::Ok)
    }
}

impl std::fmt::Display for MotorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Power-train results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerTrain {
    /// Air power (HP)
    #[serde(with = "crate::float_json")]
    pub air_power_hp: f64,
    /// Brake power (HP)
    #[serde(with = "crate::float_json")]
    pub brake_power_hp: f64,
    /// Brake power as percent of motor rating (0 when rating ≤ 0)
    #[serde(with = "crate::float_json")]
    pub motor_load_pct: f64,
    /// Motor loading classification
    pub motor_status: MotorStatus,
    /// Shaft torque (N·m)
    #[serde(with = "crate::float_json")]
    pub torque_nm: f64,
}

/// Evaluate the power-train analyzer.
pub fn calculate(input: &DesignInput, aero: &AeroSizing) -> PowerTrain {
    let air_hp = air_power_hp(input.flow_rate_cfm, aero.pressure_in_wg);
    let brake_hp = brake_power_hp(air_hp, aero.static_efficiency);
    let load_pct = motor_load_pct(brake_hp, input.motor_rating_hp);

    PowerTrain {
        air_power_hp: air_hp,
        brake_power_hp: brake_hp,
        motor_load_pct: load_pct,
        motor_status: MotorStatus::from_load_pct(load_pct),
        torque_nm: shaft_torque_nm(brake_hp, input.rpm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{aero, air};

    fn power_for(input: &DesignInput) -> PowerTrain {
        let air = air::calculate(input.temperature_f, input.altitude_ft);
        let aero = aero::calculate(input, &air);
        calculate(input, &aero)
    }

    #[test]
    fn test_reference_fan() {
        let power = power_for(&DesignInput::default());
        assert!((power.air_power_hp - 3.158).abs() < 0.001);
        assert!((power.brake_power_hp - 3.311).abs() < 0.001);
        assert!((power.motor_load_pct - 33.11).abs() < 0.01);
        assert_eq!(power.motor_status, MotorStatus::Ok);
        assert!((power.torque_nm - 13.473).abs() < 0.001);
    }

    #[test]
    fn test_small_motor_overloads() {
        let input = DesignInput {
            motor_rating_hp: 3.0,
            ..DesignInput::default()
        };
        let power = power_for(&input);
        assert!(power.motor_load_pct > 100.0);
        assert_eq!(power.motor_status, MotorStatus::Overloaded);
    }

    #[test]
    fn test_zero_motor_rating() {
        let input = DesignInput {
            motor_rating_hp: 0.0,
            ..DesignInput::default()
        };
        let power = power_for(&input);
        assert_eq!(power.motor_load_pct, 0.0);
        assert_eq!(power.motor_status, MotorStatus::Ok);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(MotorStatus::from_load_pct(85.0), MotorStatus::Ok);
        assert_eq!(MotorStatus::from_load_pct(85.1), MotorStatus::HighLoad);
        assert_eq!(MotorStatus::from_load_pct(100.0), MotorStatus::HighLoad);
        assert_eq!(MotorStatus::from_load_pct(100.1), MotorStatus::Overloaded);
        assert_eq!(MotorStatus::from_load_pct(f64::INFINITY), MotorStatus::Overloaded);
        assert_eq!(MotorStatus::from_load_pct(f64::NAN), MotorStatus::Ok);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&MotorStatus::HighLoad).unwrap(), "\"High Load\"");
        assert_eq!(MotorStatus::Overloaded.to_string(), "OVERLOADED");
    }
}
