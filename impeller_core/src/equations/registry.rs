//! # Equation Registry
//!
//! Central registry of every formula used by the sizing engine. Each equation
//! has metadata including its source, plain-text formula, and variables.
//!
//! ## Usage
//!
//! ```rust
//! use impeller_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::TipSpeed.metadata();
//! println!("Formula: {}", meta.formula_plain);
//!
//! let structural = Equation::in_category(EquationCategory::Structural);
//! assert!(structural.contains(&Equation::CentrifugalStress));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of an equation, cited in reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// U.S. Standard Atmosphere, 1976
    StandardAtmosphere,
    /// Fan similarity laws / specific speed
    FanLaws,
    /// Empirical fan-selection correlation
    Empirical { topic: &'static str },
    /// Rotating disk of uniform thickness
    RotatingDisk,
    /// Machine design handbook practice
    MachineDesign { topic: &'static str },
    /// Fundamental mechanics or unit conversion
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::StandardAtmosphere => "U.S. Standard Atmosphere 1976".to_string(),
            CodeReference::FanLaws => "Fan similarity laws (Jorgensen, Fan Engineering)".to_string(),
            CodeReference::Empirical { topic } => format!("Empirical correlation: {}", topic),
            CodeReference::RotatingDisk => "Timoshenko, rotating disk of uniform thickness".to_string(),
            CodeReference::MachineDesign { topic } => format!("Shigley, {}", topic),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories matching the five sizing stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Air density and altitude
    AirProperties,
    /// Specific speed, efficiency, tip speed
    Aerodynamics,
    /// Impeller diameters, widths, blade count
    Geometry,
    /// Rotor stress and safety factor
    Structural,
    /// Power, motor load, torque
    PowerTrain,
    /// Shaft diameter
    Shaft,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::AirProperties => "Air Properties",
            EquationCategory::Aerodynamics => "Aerodynamics",
            EquationCategory::Geometry => "Impeller Geometry",
            EquationCategory::Structural => "Structural",
            EquationCategory::PowerTrain => "Power Train",
            EquationCategory::Shaft => "Shaft",
        }
    }

    /// Stage order (lower = earlier in the pass)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::AirProperties => 1,
            EquationCategory::Aerodynamics => 2,
            EquationCategory::Geometry => 3,
            EquationCategory::Structural => 4,
            EquationCategory::PowerTrain => 5,
            EquationCategory::Shaft => 6,
        }
    }

    /// All categories in stage order
    pub const ALL: [EquationCategory; 6] = [
        EquationCategory::AirProperties,
        EquationCategory::Aerodynamics,
        EquationCategory::Geometry,
        EquationCategory::Structural,
        EquationCategory::PowerTrain,
        EquationCategory::Shaft,
    ];
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "u2", "Q")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m/s", "CFM")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a sizing equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the sizing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// ρ = 0.075 (530/(460+T)) (1 − 6.8756e-6 z)^5.2559
    AirDensity,
    /// Ns = N √Q / max(p^0.75, 0.001)
    SpecificSpeed,
    /// ψ = 0.0133 β2 + 0.4
    PressureCoefficient,
    /// η = max(0.3, 0.52 + 0.12 log Q − 0.002 |β2 − 40|)
    StaticEfficiency,
    /// u2 = 1.1 √(2p / ρψη)
    TipSpeed,
    /// D2 = 60 u2 / πN
    OuterDiameter,
    /// b2 = Q / (π D2 0.25 u2)
    OutletWidth,
    /// z = 8.5 sin β2 D2 / (D2 − D1)
    BladeCount,
    /// σ = ρ u2² (1 + ν) / 3
    CentrifugalStress,
    /// SF = Sy / σ
    SafetyFactor,
    /// AHP = Q p / 6356
    AirPower,
    /// BHP = AHP / η
    BrakePower,
    /// Load = BHP / HP_motor · 100
    MotorLoad,
    /// T = BHP 0.7457 · 9550 / N
    ShaftTorque,
    /// d = ∛(16 T SF / π τ)
    ShaftDiameter,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::AirDensity => EquationMetadata {
                name: "Air Density",
                description: "Air density corrected for site temperature and elevation",
                formula_plain: "rho = 0.075 * (530 / (460 + T)) * (1 - 6.8756e-6 * z)^5.2559",
                reference: CodeReference::StandardAtmosphere,
                variables: vec![
                    Variable::new("rho", "Air density", "lb/ft^3"),
                    Variable::new("T", "Ambient temperature", "F"),
                    Variable::new("z", "Site elevation", "ft"),
                ],
                category: EquationCategory::AirProperties,
                source_function: "air_density_imperial",
            },
            Equation::SpecificSpeed => EquationMetadata {
                name: "Specific Speed",
                description: "Similarity parameter used to recommend a blade type",
                formula_plain: "Ns = N * sqrt(Q) / max(p^0.75, 0.001)",
                reference: CodeReference::FanLaws,
                variables: vec![
                    Variable::new("N", "Rotational speed", "rpm"),
                    Variable::new("Q", "Flow rate", "CFM"),
                    Variable::new("p", "Static pressure", "in. w.g."),
                ],
                category: EquationCategory::Aerodynamics,
                source_function: "specific_speed",
            },
            Equation::PressureCoefficient => EquationMetadata {
                name: "Pressure Coefficient",
                description: "Pressure coefficient as a function of blade outlet angle",
                formula_plain: "psi = 0.0133 * beta2 + 0.4",
                reference: CodeReference::Empirical { topic: "pressure coefficient" },
                variables: vec![Variable::new("beta2", "Blade outlet angle", "deg")],
                category: EquationCategory::Aerodynamics,
                source_function: "pressure_coefficient",
            },
            Equation::StaticEfficiency => EquationMetadata {
                name: "Static Efficiency",
                description: "Static efficiency from fan size and outlet angle, floored at 0.3",
                formula_plain: "eta = max(0.3, 0.52 + 0.12 * log10(max(Q, 1)) - 0.002 * |beta2 - 40|)",
                reference: CodeReference::Empirical { topic: "static efficiency" },
                variables: vec![
                    Variable::new("Q", "Flow rate", "CFM"),
                    Variable::new("beta2", "Blade outlet angle", "deg"),
                ],
                category: EquationCategory::Aerodynamics,
                source_function: "static_efficiency",
            },
            Equation::TipSpeed => EquationMetadata {
                name: "Tip Speed",
                description: "Rim speed needed for the pressure rise, with 10% margin",
                formula_plain: "u2 = 1.1 * sqrt(2 * p / (rho * psi * eta))",
                reference: CodeReference::FanLaws,
                variables: vec![
                    Variable::new("u2", "Tip speed", "m/s"),
                    Variable::new("p", "Static pressure", "Pa"),
                    Variable::new("rho", "Air density", "kg/m^3"),
                ],
                category: EquationCategory::Aerodynamics,
                source_function: "tip_speed",
            },
            Equation::OuterDiameter => EquationMetadata {
                name: "Outer Diameter",
                description: "Impeller outer diameter from tip speed; D1 = 0.5 D2, Dhub = 0.4 D1",
                formula_plain: "D2 = 60 * u2 / (pi * N)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("D2", "Outer diameter", "m"),
                    Variable::new("N", "Rotational speed", "rpm"),
                ],
                category: EquationCategory::Geometry,
                source_function: "outer_diameter_m",
            },
            Equation::OutletWidth => EquationMetadata {
                name: "Outlet Width",
                description: "Blade width at the tip; inlet width b1 = b2 * D2 / D1",
                formula_plain: "b2 = Q / (pi * D2 * 0.25 * u2) * 1000",
                reference: CodeReference::Empirical { topic: "meridional velocity ratio" },
                variables: vec![
                    Variable::new("b2", "Outlet width", "mm"),
                    Variable::new("Q", "Flow rate", "m^3/s"),
                ],
                category: EquationCategory::Geometry,
                source_function: "outlet_width_mm",
            },
            Equation::BladeCount => EquationMetadata {
                name: "Blade Count",
                description: "Blade number estimate, rounded and clamped to 6..12",
                formula_plain: "z = 8.5 * sin(beta2) * D2 / (D2 - D1)",
                reference: CodeReference::Empirical { topic: "Pfleiderer blade number" },
                variables: vec![
                    Variable::new("z", "Blade count", "-"),
                    Variable::new("D1", "Inner diameter", "mm"),
                ],
                category: EquationCategory::Geometry,
                source_function: "blade_count_raw",
            },
            Equation::CentrifugalStress => EquationMetadata {
                name: "Centrifugal Stress",
                description: "Hoop stress in the rotating impeller disk",
                formula_plain: "sigma = rho_m * u2^2 * (1 + nu) / 3",
                reference: CodeReference::RotatingDisk,
                variables: vec![
                    Variable::new("sigma", "Centrifugal stress", "Pa"),
                    Variable::new("rho_m", "Material density", "kg/m^3"),
                    Variable::new("nu", "Poisson's ratio", "-"),
                ],
                category: EquationCategory::Structural,
                source_function: "centrifugal_stress_pa",
            },
            Equation::SafetyFactor => EquationMetadata {
                name: "Safety Factor",
                description: "Yield margin; SAFE > 2, ACCEPTABLE > 1.5, otherwise UNSAFE",
                formula_plain: "SF = Sy / sigma",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Sy", "Yield strength", "MPa"),
                    Variable::new("sigma", "Centrifugal stress", "MPa"),
                ],
                category: EquationCategory::Structural,
                source_function: "safety_factor",
            },
            Equation::AirPower => EquationMetadata {
                name: "Air Power",
                description: "Useful power delivered to the air stream",
                formula_plain: "AHP = Q * p / 6356",
                reference: CodeReference::FanLaws,
                variables: vec![
                    Variable::new("Q", "Flow rate", "CFM"),
                    Variable::new("p", "Static pressure", "in. w.g."),
                ],
                category: EquationCategory::PowerTrain,
                source_function: "air_power_hp",
            },
            Equation::BrakePower => EquationMetadata {
                name: "Brake Power",
                description: "Shaft power required at the operating point",
                formula_plain: "BHP = AHP / eta",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("eta", "Static efficiency", "-")],
                category: EquationCategory::PowerTrain,
                source_function: "brake_power_hp",
            },
            Equation::MotorLoad => EquationMetadata {
                name: "Motor Load",
                description: "Brake power as a percentage of motor nameplate; OVERLOADED > 100%",
                formula_plain: "Load = BHP / HP_motor * 100",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("HP_motor", "Motor rating", "HP")],
                category: EquationCategory::PowerTrain,
                source_function: "motor_load_pct",
            },
            Equation::ShaftTorque => EquationMetadata {
                name: "Shaft Torque",
                description: "Torque at the impeller hub",
                formula_plain: "T = BHP * 0.7457 * 9550 / max(N, 1)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("T", "Torque", "N*m"),
                    Variable::new("N", "Rotational speed", "rpm"),
                ],
                category: EquationCategory::PowerTrain,
                source_function: "shaft_torque_nm",
            },
            Equation::ShaftDiameter => EquationMetadata {
                name: "Shaft Diameter",
                description: "Solid shaft in torsion, SF 1.5, 40 MPa allowable shear, 20 mm minimum",
                formula_plain: "d = cbrt(16 * T * 1.5 / (pi * 40e6)) * 1000",
                reference: CodeReference::MachineDesign { topic: "torsion of solid round shafts" },
                variables: vec![
                    Variable::new("d", "Shaft diameter", "mm"),
                    Variable::new("T", "Torque", "N*m"),
                ],
                category: EquationCategory::Shaft,
                source_function: "min_shaft_diameter_mm",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All equations in the registry, in stage order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::AirDensity,
    Equation::SpecificSpeed,
    Equation::PressureCoefficient,
    Equation::StaticEfficiency,
    Equation::TipSpeed,
    Equation::OuterDiameter,
    Equation::OutletWidth,
    Equation::BladeCount,
    Equation::CentrifugalStress,
    Equation::SafetyFactor,
    Equation::AirPower,
    Equation::BrakePower,
    Equation::MotorLoad,
    Equation::ShaftTorque,
    Equation::ShaftDiameter,
];

/// Generate a markdown reference of every equation, grouped by stage.
///
/// # Example
///
/// ```rust
/// use impeller_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("## Structural"));
/// assert!(markdown.contains("sigma = rho_m * u2^2 * (1 + nu) / 3"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);
    output.push_str("# Impeller Sizing Equations Reference\n\n");

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();
            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!("**Source:** `{}`\n\n", meta.source_function));
        }
    }

    output.push_str(&format!("Total equations: {}\n", ALL_EQUATIONS.len()));
    output
}
