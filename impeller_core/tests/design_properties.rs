//! End-to-end properties of the sizing pass.

use approx::assert_relative_eq;

use impeller_core::calculations::{
    evaluate, AltitudeStatus, BladeType, DesignInput, DesignResult, MotorStatus, StressStatus,
    TipSpeedStatus,
};
use impeller_core::errors::CalcError;
use impeller_core::form::DesignForm;
use impeller_core::materials;

const AWKWARD_VALUES: [f64; 9] = [
    0.0,
    -1.0,
    1.0,
    1.0e6,
    -1.0e6,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
    f64::MIN_POSITIVE,
];

fn with<F: FnOnce(&mut DesignInput)>(f: F) -> DesignInput {
    let mut input = DesignInput::default();
    f(&mut input);
    input
}

#[test]
fn worked_scenario() {
    let result = evaluate(&DesignInput::default()).unwrap();

    assert_relative_eq!(result.air.density_si_kg_m3, 1.201, max_relative = 0.01);
    assert_relative_eq!(result.aero.specific_speed, 43600.0, max_relative = 0.01);
    assert_eq!(result.aero.blade_recommendation, BladeType::Forward);
    assert_relative_eq!(result.aero.static_efficiency, 0.954, max_relative = 0.01);
    assert_relative_eq!(result.aero.tip_speed_m_s, 49.4, max_relative = 0.01);
    assert_eq!(result.aero.tip_speed_status, TipSpeedStatus::Ok);
    assert_eq!(result.aero.outer_diameter_mm.round(), 539.0);
    assert_eq!(result.aero.inner_diameter_mm.round(), 270.0);
    assert_eq!(result.aero.blade_count, 10);
    assert_relative_eq!(result.structural.safety_factor, 30.1, max_relative = 0.01);
    assert_eq!(result.structural.status, StressStatus::Safe);
    assert_relative_eq!(result.power.brake_power_hp, 3.31, max_relative = 0.01);
    assert_relative_eq!(result.power.motor_load_pct, 33.1, max_relative = 0.01);
    assert_eq!(result.power.motor_status, MotorStatus::Ok);
    assert_eq!(result.shaft.standard_diameter_mm, 20.0);
    assert_eq!(
        result.geometry_script,
        "; Fan Design\nCIRCLE 0,0 539\nCIRCLE 0,0 270\n; Blades: 10"
    );
}

/// Bit patterns of every numeric output, so `inf` and `NaN` compare exactly
fn numeric_bits(result: &DesignResult) -> Vec<u64> {
    result.numeric_fields().iter().map(|(_, v)| v.to_bits()).collect()
}

#[test]
fn evaluation_is_deterministic() {
    let inputs = [
        DesignInput::default(),
        with(|i| i.material = "Titanium".into()),
        with(|i| i.rpm = 0.0),
        with(|i| i.temperature_f = -460.0),
        with(|i| i.flow_rate_cfm = f64::NAN),
        with(|i| i.static_pressure_pa = f64::NEG_INFINITY),
    ];
    for input in &inputs {
        let a = evaluate(input).unwrap();
        let b = evaluate(input).unwrap();
        assert_eq!(numeric_bits(&a), numeric_bits(&b));
        assert_eq!(a.air.altitude_status, b.air.altitude_status);
        assert_eq!(a.aero.blade_recommendation, b.aero.blade_recommendation);
        assert_eq!(a.aero.tip_speed_status, b.aero.tip_speed_status);
        assert_eq!(a.aero.blade_count, b.aero.blade_count);
        assert_eq!(a.structural.status, b.structural.status);
        assert_eq!(a.power.motor_status, b.power.motor_status);
        assert_eq!(a.geometry_script, b.geometry_script);
    }
}

#[test]
fn blade_count_always_in_range() {
    for &value in &AWKWARD_VALUES {
        for angle in [0.0, 15.0, 35.0, 90.0, 150.0, 180.0, -35.0, value] {
            let inputs = [
                with(|i| {
                    i.outlet_angle_deg = angle;
                    i.rpm = value;
                }),
                with(|i| {
                    i.outlet_angle_deg = angle;
                    i.static_pressure_pa = value;
                }),
                with(|i| {
                    i.outlet_angle_deg = angle;
                    i.flow_rate_cfm = value;
                }),
                with(|i| {
                    i.outlet_angle_deg = angle;
                    i.temperature_f = value;
                }),
            ];
            for input in &inputs {
                let blades = evaluate(input).unwrap().aero.blade_count;
                assert!((6..=12).contains(&blades), "{} blades for {:?}", blades, input);
            }
        }
    }
}

#[test]
fn safety_factor_does_not_improve_with_speed() {
    let mut previous = f64::INFINITY;
    for rpm in [500.0, 1000.0, 1750.0, 3600.0, 7200.0] {
        let sf = evaluate(&with(|i| i.rpm = rpm)).unwrap().structural.safety_factor;
        assert!(sf <= previous, "SF rose to {} at {} rpm", sf, rpm);
        previous = sf;
    }
}

#[test]
fn classifications_agree_with_values() {
    for key in materials::keys() {
        for pressure in [100.0, 1000.0, 10_000.0, 50_000.0, 200_000.0, 0.0, f64::NAN] {
            for motor in [0.0, 1.0, 5.0, 50.0] {
                let input = with(|i| {
                    i.material = key.to_string();
                    i.static_pressure_pa = pressure;
                    i.motor_rating_hp = motor;
                });
                let result = evaluate(&input).unwrap();

                let sf = result.structural.safety_factor;
                assert_eq!(
                    result.structural.status == StressStatus::Unsafe,
                    sf.is_nan() || sf <= 1.5,
                    "{} at {} Pa: SF {}",
                    key,
                    pressure,
                    sf
                );

                let load = result.power.motor_load_pct;
                assert_eq!(result.power.motor_status == MotorStatus::Overloaded, load > 100.0);
            }
        }
    }
}

#[test]
fn unknown_material_is_configuration_error() {
    for name in ["Brass", "", "Steel 304", "Unobtainium"] {
        let err = evaluate(&with(|i| i.material = name.to_string())).unwrap_err();
        assert!(matches!(err, CalcError::MaterialNotFound { .. }));
        assert!(err.is_configuration_error());
    }
}

#[test]
fn altitude_boundary() {
    let at = evaluate(&with(|i| i.altitude_ft = 5000.0)).unwrap();
    assert_eq!(at.air.altitude_status, AltitudeStatus::Ok);
    assert_eq!(at.air.altitude_status.as_str(), "OK");

    let above = evaluate(&with(|i| i.altitude_ft = 5001.0)).unwrap();
    assert_eq!(above.air.altitude_status, AltitudeStatus::HighAltitudeWarning);
    assert_eq!(above.air.altitude_status.as_str(), "High altitude warning");
    assert!(above.has_warnings());
}

#[test]
fn garbage_form_still_evaluates() {
    let form = DesignForm {
        flow_rate_cfm: "lots".into(),
        static_pressure_pa: "".into(),
        rpm: "NaN".into(),
        motor_rating_hp: "-".into(),
        temperature_f: "warm".into(),
        altitude_ft: "1e999".into(),
        outlet_angle_deg: "35°".into(),
        inlet_angle_deg: "25".into(),
        material: "FRP".into(),
        blade_type: "forward".into(),
    };

    let input = form.normalize().unwrap();
    assert_eq!(input.flow_rate_cfm, 0.0);
    assert_eq!(input.rpm, 0.0);
    assert_eq!(input.altitude_ft, 0.0);
    assert_eq!(input.outlet_angle_deg, 0.0);
    assert_eq!(input.inlet_angle_deg, 25.0);

    let result = evaluate(&input).unwrap();
    assert!((6..=12).contains(&result.aero.blade_count));
    assert_eq!(result.power.motor_load_pct, 0.0);
}

#[test]
fn blade_type_is_advisory() {
    let radial = evaluate(&with(|i| i.blade_type = BladeType::Radial)).unwrap();
    let forward = evaluate(&with(|i| i.blade_type = BladeType::Forward)).unwrap();
    assert_eq!(radial, forward);
}
