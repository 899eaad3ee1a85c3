//! # Calculation Report
//!
//! Plain-text calculation report for one design: inputs, every stage's
//! results with their classifications, the geometry script, and the
//! governing equations pulled from the [registry](crate::equations::registry).
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::calculations::{evaluate, DesignInput};
//! use impeller_core::report::render_report;
//!
//! let input = DesignInput::default();
//! let result = evaluate(&input).unwrap();
//! let text = render_report(&input, &result);
//! assert!(text.contains("Safety factor"));
//! ```

use chrono::Utc;

use crate::calculations::{DesignInput, DesignResult};
use crate::equations::registry::{Equation, EquationCategory};

const REPORT_TEMPLATE: &str = r#"IMPELLER SIZING REPORT
Date: {{DATE}}

INPUTS
  Flow rate            {{FLOW_CFM}} CFM
  Static pressure      {{PRESSURE_PA}} Pa
  Speed                {{RPM}} rpm
  Motor rating         {{MOTOR_HP}} HP
  Temperature          {{TEMP_F}} F
  Altitude             {{ALTITUDE_FT}} ft
  Outlet angle         {{OUTLET_DEG}} deg
  Inlet angle          {{INLET_DEG}} deg
  Material             {{MATERIAL}}
  Blade type           {{BLADE_TYPE}}

AIR PROPERTIES
  Density              {{DENSITY_IMP}} lb/ft^3 ({{DENSITY_SI}} kg/m^3)
  Altitude check       {{ALTITUDE_STATUS}}

AERODYNAMICS
  Flow                 {{FLOW_SI}} m^3/s
  Pressure             {{PRESSURE_WG}} in. w.g.
  Specific speed       {{NS}} (recommended: {{RECOMMENDATION}})
  Pressure coefficient {{PSI}}
  Static efficiency    {{EFFICIENCY}}
  Tip speed            {{TIP_SPEED}} m/s [{{TIP_STATUS}}]

IMPELLER GEOMETRY
  Outer diameter D2    {{D2}} mm
  Inner diameter D1    {{D1}} mm
  Hub diameter         {{DHUB}} mm
  Outlet width b2      {{B2}} mm
  Inlet width b1       {{B1}} mm
  Blades               {{BLADES}} (raw {{BLADES_RAW}})

STRUCTURAL
  Centrifugal stress   {{STRESS}} MPa
  Yield strength       {{YIELD}} MPa
  Safety factor        {{SF}} [{{STRESS_STATUS}}]

POWER TRAIN
  Air power            {{AIR_HP}} HP
  Brake power          {{BRAKE_HP}} HP
  Motor load           {{LOAD_PCT}} % [{{MOTOR_STATUS}}]
  Torque               {{TORQUE}} N*m

SHAFT
  Minimum diameter     {{SHAFT_MIN}} mm
  Standard diameter    {{SHAFT_STD}} mm

GEOMETRY SCRIPT
{{SCRIPT}}
"#;

/// Render the report for an evaluated design.
pub fn render_report(input: &DesignInput, result: &DesignResult) -> String {
    let mut report = REPORT_TEMPLATE
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{FLOW_CFM}}", &format!("{:.0}", input.flow_rate_cfm))
        .replace("{{PRESSURE_PA}}", &format!("{:.0}", input.static_pressure_pa))
        .replace("{{RPM}}", &format!("{:.0}", input.rpm))
        .replace("{{MOTOR_HP}}", &format!("{:.1}", input.motor_rating_hp))
        .replace("{{TEMP_F}}", &format!("{:.0}", input.temperature_f))
        .replace("{{ALTITUDE_FT}}", &format!("{:.0}", input.altitude_ft))
        .replace("{{OUTLET_DEG}}", &format!("{:.1}", input.outlet_angle_deg))
        .replace("{{INLET_DEG}}", &format!("{:.1}", input.inlet_angle_deg))
        .replace("{{MATERIAL}}", &result.structural.material)
        .replace("{{BLADE_TYPE}}", input.blade_type.display_name())
        .replace("{{DENSITY_IMP}}", &format!("{:.4}", result.air.density_imperial_lb_ft3))
        .replace("{{DENSITY_SI}}", &format!("{:.3}", result.air.density_si_kg_m3))
        .replace("{{ALTITUDE_STATUS}}", result.air.altitude_status.as_str())
        .replace("{{FLOW_SI}}", &format!("{:.3}", result.aero.flow_si_m3_s))
        .replace("{{PRESSURE_WG}}", &format!("{:.2}", result.aero.pressure_in_wg))
        .replace("{{NS}}", &format!("{:.0}", result.aero.specific_speed))
        .replace("{{RECOMMENDATION}}", result.aero.blade_recommendation.display_name())
        .replace("{{PSI}}", &format!("{:.3}", result.aero.pressure_coefficient))
        .replace("{{EFFICIENCY}}", &format!("{:.3}", result.aero.static_efficiency))
        .replace("{{TIP_SPEED}}", &format!("{:.1}", result.aero.tip_speed_m_s))
        .replace("{{TIP_STATUS}}", result.aero.tip_speed_status.as_str())
        .replace("{{D2}}", &format!("{:.1}", result.aero.outer_diameter_mm))
        .replace("{{D1}}", &format!("{:.1}", result.aero.inner_diameter_mm))
        .replace("{{DHUB}}", &format!("{:.1}", result.aero.hub_diameter_mm))
        .replace("{{B2}}", &format!("{:.1}", result.aero.outlet_width_mm))
        .replace("{{B1}}", &format!("{:.1}", result.aero.inlet_width_mm))
        .replace("{{BLADES}}", &result.aero.blade_count.to_string())
        .replace("{{BLADES_RAW}}", &format!("{:.2}", result.aero.blade_count_raw))
        .replace("{{STRESS}}", &format!("{:.2}", result.structural.stress_mpa))
        .replace("{{YIELD}}", &format!("{:.0}", result.structural.yield_strength_mpa))
        .replace("{{SF}}", &format!("{:.2}", result.structural.safety_factor))
        .replace("{{STRESS_STATUS}}", result.structural.status.as_str())
        .replace("{{AIR_HP}}", &format!("{:.2}", result.power.air_power_hp))
        .replace("{{BRAKE_HP}}", &format!("{:.2}", result.power.brake_power_hp))
        .replace("{{LOAD_PCT}}", &format!("{:.1}", result.power.motor_load_pct))
        .replace("{{MOTOR_STATUS}}", result.power.motor_status.as_str())
        .replace("{{TORQUE}}", &format!("{:.2}", result.power.torque_nm))
        .replace("{{SHAFT_MIN}}", &format!("{:.2}", result.shaft.min_diameter_mm))
        .replace("{{SHAFT_STD}}", &format!("{:.0}", result.shaft.standard_diameter_mm))
        .replace("{{SCRIPT}}", &result.geometry_script);

    let non_finite = result.non_finite_fields();
    if !non_finite.is_empty() {
        report.push_str("\nWARNINGS\n");
        report.push_str(&format!("  Non-finite results: {}\n", non_finite.join(", ")));
    }

    report.push_str("\nEQUATIONS\n");
    for category in EquationCategory::ALL {
        report.push_str(&format!("  {}\n", category.display_name()));
        for equation in Equation::in_category(category) {
            let meta = equation.metadata();
            report.push_str(&format!(
                "    {:<22} {}  [{}]\n",
                meta.name,
                meta.formula_plain,
                meta.reference.citation()
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::evaluate;

    #[test]
    fn test_reference_report() {
        let input = DesignInput::default();
        let result = evaluate(&input).unwrap();
        let report = render_report(&input, &result);

        assert!(!report.contains("{{"), "unfilled placeholder in report");
        assert!(report.contains("Outer diameter D2    539.1 mm"));
        assert!(report.contains("Safety factor        30.12 [SAFE]"));
        assert!(report.contains("Motor load           33.1 % [OK]"));
        assert!(report.contains("CIRCLE 0,0 539"));
        assert!(report.contains("Centrifugal Stress"));
        assert!(!report.contains("WARNINGS"));
    }

    #[test]
    fn test_degenerate_report_lists_warnings() {
        let input = DesignInput {
            rpm: 0.0,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();
        let report = render_report(&input, &result);
        assert!(report.contains("WARNINGS"));
        assert!(report.contains("outer_diameter_mm"));
    }
}
