//! # Air Density
//!
//! Standard-atmosphere correction of air density for site temperature and
//! elevation, starting from standard air (0.075 lb/ft³ at 70 °F, sea level).
//!
//! ## References
//!
//! - U.S. Standard Atmosphere, 1976 (troposphere pressure lapse)
//! - AMCA 99 standard air definition

use crate::units::{KilogramsPerCubicMeter, PoundsPerCubicFoot};

/// Standard air density (lb/ft³)
pub const STANDARD_DENSITY_LB_FT3: f64 = 0.075;

/// Standard temperature, absolute (°R)
pub const STANDARD_TEMP_R: f64 = 530.0;

/// Offset from °F to °R as used by the method
pub const RANKINE_OFFSET: f64 = 460.0;

/// Troposphere lapse coefficient (1/ft)
pub const ALTITUDE_LAPSE_PER_FT: f64 = 6.8756e-6;

/// Troposphere pressure exponent
pub const ALTITUDE_EXPONENT: f64 = 5.2559;

/// Elevation above which a high-altitude warning is raised (ft)
pub const HIGH_ALTITUDE_FT: f64 = 5000.0;

/// Air density corrected for temperature and altitude (lb/ft³)
///
/// # Formula
/// ```text
/// ρ = 0.075 · (530 / (460 + T)) · (1 − 6.8756e-6 · z)^5.2559
/// ```
///
/// No guard on `460 + T`: at exactly −460 °F the result is infinite.
///
/// # Arguments
/// * `temp_f` - Ambient temperature (°F)
/// * `altitude_ft` - Site elevation (ft)
#[inline]
pub fn air_density_imperial(temp_f: f64, altitude_ft: f64) -> f64 {
    let temperature_ratio = STANDARD_TEMP_R / (RANKINE_OFFSET + temp_f);
    let pressure_ratio = (1.0 - ALTITUDE_LAPSE_PER_FT * altitude_ft).powf(ALTITUDE_EXPONENT);
    STANDARD_DENSITY_LB_FT3 * temperature_ratio * pressure_ratio
}

/// Convert an imperial air density to kg/m³
#[inline]
pub fn air_density_metric(density_lb_ft3: f64) -> f64 {
    KilogramsPerCubicMeter::from(PoundsPerCubicFoot(density_lb_ft3)).0
}

/// True when the site is above 5000 ft (strictly greater)
#[inline]
pub fn is_high_altitude(altitude_ft: f64) -> bool {
    altitude_ft > HIGH_ALTITUDE_FT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_air() {
        // 70 °F at sea level is standard air
        let rho = air_density_imperial(70.0, 0.0);
        assert!((rho - 0.075).abs() < 1e-12);
        assert!((air_density_metric(rho) - 1.2014).abs() < 1e-3);
    }

    #[test]
    fn test_density_drops_with_altitude_and_heat() {
        let sea_level = air_density_imperial(70.0, 0.0);
        let denver = air_density_imperial(70.0, 5280.0);
        let hot = air_density_imperial(150.0, 0.0);
        assert!(denver < sea_level);
        assert!(hot < sea_level);
        // Roughly 82% of standard at one mile
        assert!((denver / sea_level - 0.8234).abs() < 1e-3);
    }

    #[test]
    fn test_absolute_zero_is_not_guarded() {
        assert!(air_density_imperial(-460.0, 0.0).is_infinite());
    }

    #[test]
    fn test_high_altitude_boundary() {
        assert!(!is_high_altitude(5000.0));
        assert!(is_high_altitude(5001.0));
        assert!(!is_high_altitude(f64::NAN));
    }
}
