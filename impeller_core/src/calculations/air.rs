//! # Air Property Model
//!
//! First stage of the sizing pass: air density at the site and the
//! high-altitude flag.

use serde::{Deserialize, Serialize};

use crate::equations::{air_density_imperial, air_density_metric, is_high_altitude};

/// Site elevation classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltitudeStatus {
    #[serde(rename = "OK")]
    Ok,
    /// Above 5000 ft: motor and fan derating should be reviewed
    #[serde(rename = "High altitude warning")]
    HighAltitudeWarning,
}

impl AltitudeStatus {
    /// Classify a site elevation (ft)
    pub fn from_altitude(altitude_ft: f64) -> Self {
        if is_high_altitude(altitude_ft) {
            AltitudeStatus::HighAltitudeWarning
        } else {
            AltitudeStatus::Ok
        }
    }

    /// Display string
    pub fn as_str(&self) -> &'static str {
        match self {
            AltitudeStatus::Ok => "OK",
            AltitudeStatus::HighAltitudeWarning => "High altitude warning",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AltitudeStatus::Ok)
    }
}

impl std::fmt::Display for AltitudeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Air properties at the operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirProperties {
    /// Air density (lb/ft³)
    #[serde(with = "crate::float_json")]
    pub density_imperial_lb_ft3: f64,
    /// Air density (kg/m³)
    #[serde(with = "crate::float_json")]
    pub density_si_kg_m3: f64,
    /// Altitude classification
    pub altitude_status: AltitudeStatus,
}

/// Evaluate the air property model.
pub fn calculate(temperature_f: f64, altitude_ft: f64) -> AirProperties {
    let density_imperial_lb_ft3 = air_density_imperial(temperature_f, altitude_ft);
    AirProperties {
        density_imperial_lb_ft3,
        density_si_kg_m3: air_density_metric(density_imperial_lb_ft3),
        altitude_status: AltitudeStatus::from_altitude(altitude_ft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_conditions() {
        let air = calculate(70.0, 0.0);
        assert!((air.density_si_kg_m3 - 1.201).abs() < 0.001);
        assert_eq!(air.altitude_status, AltitudeStatus::Ok);
    }

    #[test]
    fn test_altitude_boundary() {
        assert_eq!(calculate(70.0, 5000.0).altitude_status, AltitudeStatus::Ok);
        assert_eq!(
            calculate(70.0, 5001.0).altitude_status,
            AltitudeStatus::HighAltitudeWarning
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&AltitudeStatus::HighAltitudeWarning).unwrap();
        assert_eq!(json, "\"High altitude warning\"");
        assert_eq!(AltitudeStatus::Ok.to_string(), "OK");
    }
}
