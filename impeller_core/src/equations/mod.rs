//! # Fan Sizing Equations
//!
//! This module contains every closed-form formula the sizing engine applies.
//! Having equations in one place enables:
//! - Easy verification against the fan-selection method they come from
//! - Documentation of units and empirical constants
//! - A single source for the [`registry`] used in calculation reports
//!
//! ## Modules
//!
//! - [`air`] - Standard-atmosphere air density correction
//! - [`fan`] - Specific speed, efficiency, tip speed, impeller geometry, blade count
//! - [`rotor`] - Centrifugal stress, safety factor, shaft torsion sizing
//! - [`drive`] - Air power, brake power, motor load, torque
//! - [`registry`] - Equation metadata for reports and the equations reference
//!
//! ## Degenerate Inputs
//!
//! Formulas are total over `f64`: they never panic. Only the denominators the
//! method itself guards are floored (pressure in specific speed, rpm in torque,
//! motor rating in load). Everything else divides as written, so zero speed or
//! absolute-zero temperature produce `inf`/`NaN`, which callers treat as data.

pub mod air;
pub mod drive;
pub mod fan;
pub mod registry;
pub mod rotor;

pub use air::{air_density_imperial, air_density_metric, is_high_altitude};
pub use drive::{air_power_hp, brake_power_hp, motor_load_pct, shaft_torque_nm};
pub use fan::{
    blade_count, blade_count_raw, outer_diameter_m, outlet_width_mm, pressure_coefficient,
    specific_speed, static_efficiency, tip_speed,
};
pub use rotor::{centrifugal_stress_pa, min_shaft_diameter_mm, safety_factor, standard_shaft_diameter_mm};

/// `max(value, floor)` that lets NaN through.
///
/// The floors in the fan-selection method are there to dodge a division by
/// zero, not to repair invalid data; a NaN operand stays NaN.
#[inline]
pub fn floor_at(value: f64, floor: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_at() {
        assert_eq!(floor_at(0.0, 0.001), 0.001);
        assert_eq!(floor_at(5.0, 1.0), 5.0);
        assert_eq!(floor_at(f64::NEG_INFINITY, 1.0), 1.0);
        assert!(floor_at(f64::NAN, 1.0).is_nan());
    }
}
