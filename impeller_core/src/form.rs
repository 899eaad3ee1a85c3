//! # Design Form
//!
//! Text-field front-ends hand the engine strings. [`DesignForm`] is that
//! boundary: numbers are coerced leniently, enum fields are not.
//!
//! - Numeric fields: trimmed and parsed; anything that is not a finite number
//!   (empty, garbage, `inf`, `NaN`) becomes `0.0`.
//! - Blade type: parsed case-insensitively; unknown values are an
//!   [`CalcError::InvalidInput`](crate::errors::CalcError::InvalidInput).
//! - Material: passed through untouched; the engine validates it.
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::form::DesignForm;
//!
//! let form = DesignForm {
//!     flow_rate_cfm: "5000".into(),
//!     static_pressure_pa: " 1000 ".into(),
//!     rpm: "fast".into(),
//!     blade_type: "backward curved".into(),
//!     material: "Steel".into(),
//!     ..DesignForm::default()
//! };
//!
//! let input = form.normalize().unwrap();
//! assert_eq!(input.static_pressure_pa, 1000.0);
//! assert_eq!(input.rpm, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{BladeType, DesignInput};
use crate::errors::CalcResult;

/// Raw form contents, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignForm {
    pub flow_rate_cfm: String,
    pub static_pressure_pa: String,
    pub rpm: String,
    pub motor_rating_hp: String,
    pub temperature_f: String,
    pub altitude_ft: String,
    pub outlet_angle_deg: String,
    pub inlet_angle_deg: String,
    pub material: String,
    pub blade_type: String,
}

impl DesignForm {
    /// Form pre-filled with the given input's values
    pub fn from_input(input: &DesignInput) -> Self {
        DesignForm {
            flow_rate_cfm: input.flow_rate_cfm.to_string(),
            static_pressure_pa: input.static_pressure_pa.to_string(),
            rpm: input.rpm.to_string(),
            motor_rating_hp: input.motor_rating_hp.to_string(),
            temperature_f: input.temperature_f.to_string(),
            altitude_ft: input.altitude_ft.to_string(),
            outlet_angle_deg: input.outlet_angle_deg.to_string(),
            inlet_angle_deg: input.inlet_angle_deg.to_string(),
            material: input.material.clone(),
            blade_type: format!("{:?}", input.blade_type),
        }
    }

    /// Convert to a [`DesignInput`].
    ///
    /// Fails only on an unrecognized blade type.
    pub fn normalize(&self) -> CalcResult<DesignInput> {
        Ok(DesignInput {
            flow_rate_cfm: coerce_number(&self.flow_rate_cfm),
            static_pressure_pa: coerce_number(&self.static_pressure_pa),
            rpm: coerce_number(&self.rpm),
            motor_rating_hp: coerce_number(&self.motor_rating_hp),
            temperature_f: coerce_number(&self.temperature_f),
            altitude_ft: coerce_number(&self.altitude_ft),
            outlet_angle_deg: coerce_number(&self.outlet_angle_deg),
            inlet_angle_deg: coerce_number(&self.inlet_angle_deg),
            material: self.material.clone(),
            blade_type: BladeType::from_str_flexible(&self.blade_type)?,
        })
    }
}

/// Parse a numeric field; anything non-finite or unparseable is `0.0`.
pub fn coerce_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("1750"), 1750.0);
        assert_eq!(coerce_number("  -40.5 "), -40.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn test_roundtrip_through_form() {
        let input = DesignInput::default();
        let normalized = DesignForm::from_input(&input).normalize().unwrap();
        assert_eq!(normalized, input);
    }

    #[test]
    fn test_material_passed_verbatim() {
        let form = DesignForm {
            material: " brass ".into(),
            blade_type: "Radial".into(),
            ..DesignForm::default()
        };
        let input = form.normalize().unwrap();
        assert_eq!(input.material, " brass ");
        assert_eq!(input.blade_type, BladeType::Radial);
    }

    #[test]
    fn test_unknown_blade_type_rejected() {
        let form = DesignForm {
            blade_type: "Airfoil".into(),
            ..DesignForm::default()
        };
        match form.normalize() {
            Err(CalcError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "blade_type");
                assert_eq!(value, "Airfoil");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
