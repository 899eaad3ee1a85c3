//! # Impeller CLI
//!
//! Command line front-end for the impeller sizing engine.
//!
//! ```text
//! impeller design --flow 5000 --pressure 1000 --rpm 1750 --material Aluminum
//! impeller design --report --script-out fan.scr
//! impeller materials
//! impeller history
//! impeller equations
//! ```
//!
//! Every numeric flag is read as text and coerced the way a form field would
//! be: anything that is not a finite number becomes 0.

mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use impeller_core::calculations::{evaluate, DesignInput, DesignResult};
use impeller_core::equations::registry::{generate_equations_markdown, Equation, ALL_EQUATIONS};
use impeller_core::errors::{CalcError, CalcResult};
use impeller_core::export::save_script;
use impeller_core::file_io::{self, load_history, save_history, FileLock};
use impeller_core::form::DesignForm;
use impeller_core::materials::MATERIALS;
use impeller_core::report::render_report;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "impeller")]
#[command(version)]
#[command(about = "Centrifugal fan impeller sizing calculator")]
struct Cli {
    /// Settings file
    #[arg(short, long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Size an impeller
    Design {
        /// Flow rate (CFM)
        #[arg(long)]
        flow: Option<String>,
        /// Static pressure (Pa)
        #[arg(long)]
        pressure: Option<String>,
        /// Impeller speed (rpm)
        #[arg(long)]
        rpm: Option<String>,
        /// Motor rating (HP)
        #[arg(long)]
        motor: Option<String>,
        /// Ambient temperature (°F)
        #[arg(long)]
        temperature: Option<String>,
        /// Site altitude (ft)
        #[arg(long)]
        altitude: Option<String>,
        /// Blade outlet angle (degrees)
        #[arg(long)]
        outlet_angle: Option<String>,
        /// Blade inlet angle (degrees)
        #[arg(long)]
        inlet_angle: Option<String>,
        /// Material catalog key
        #[arg(long)]
        material: Option<String>,
        /// Radial, Backward or Forward
        #[arg(long)]
        blade_type: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Print the full calculation report
        #[arg(long)]
        report: bool,
        /// Write the geometry script to a file
        #[arg(long)]
        script_out: Option<PathBuf>,
        /// Do not append to the design history
        #[arg(long)]
        no_history: bool,
    },
    /// List the material catalog
    Materials {
        #[arg(long)]
        json: bool,
    },
    /// Show recent designs
    History {
        /// Empty the history log
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the sizing equations
    Equations {
        /// Print the markdown reference instead of the summary
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command {
        Commands::Design {
            flow,
            pressure,
            rpm,
            motor,
            temperature,
            altitude,
            outlet_angle,
            inlet_angle,
            material,
            blade_type,
            json,
            report,
            script_out,
            no_history,
        } => {
            let mut form = DesignForm::from_input(&DesignInput::default());
            form.material = cfg.default_material.clone();
            form.blade_type = cfg.default_blade_type.clone();
            let overrides = [
                (&mut form.flow_rate_cfm, flow),
                (&mut form.static_pressure_pa, pressure),
                (&mut form.rpm, rpm),
                (&mut form.motor_rating_hp, motor),
                (&mut form.temperature_f, temperature),
                (&mut form.altitude_ft, altitude),
                (&mut form.outlet_angle_deg, outlet_angle),
                (&mut form.inlet_angle_deg, inlet_angle),
                (&mut form.material, material),
                (&mut form.blade_type, blade_type),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    *field = value;
                }
            }

            run_design(
                &form,
                &cfg,
                DesignOptions {
                    json: json || cfg.json_output,
                    report,
                    script_out,
                    record: !no_history,
                },
            )
        }
        Commands::Materials { json } => run_materials(json),
        Commands::History { clear, json } => run_history(&cfg.history_path, clear, json),
        Commands::Equations { markdown } => {
            run_equations(markdown);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

struct DesignOptions {
    json: bool,
    report: bool,
    script_out: Option<PathBuf>,
    record: bool,
}

fn run_design(form: &DesignForm, cfg: &Config, options: DesignOptions) -> CalcResult<()> {
    let input = form.normalize()?;
    let result = evaluate(&input)?;

    if options.report {
        println!("{}", render_report(&input, &result));
    } else {
        print_summary(&input, &result);
    }

    if options.json {
        println!();
        println!("JSON Output:");
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", json);
    }

    if let Some(path) = &options.script_out {
        save_script(&result.geometry_script, path)?;
        eprintln!("Geometry script written to {}", path.display());
    }

    // A failed history append does not invalidate the design
    if options.record {
        if let Err(e) = append_history(&cfg.history_path, &input, &result) {
            eprintln!("Warning: design not recorded in history: {}", e);
        }
    }

    Ok(())
}

fn print_summary(input: &DesignInput, result: &DesignResult) {
    println!("═══════════════════════════════════════");
    println!("  IMPELLER SIZING RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Flow:      {:.0} CFM @ {:.0} Pa", input.flow_rate_cfm, input.static_pressure_pa);
    println!("  Speed:     {:.0} rpm, motor {:.1} HP", input.rpm, input.motor_rating_hp);
    println!("  Material:  {}", result.structural.material);
    println!();
    println!("Impeller:");
    println!("  D2 = {:.1} mm, D1 = {:.1} mm, hub = {:.1} mm",
        result.aero.outer_diameter_mm,
        result.aero.inner_diameter_mm,
        result.aero.hub_diameter_mm
    );
    println!("  b2 = {:.1} mm, b1 = {:.1} mm",
        result.aero.outlet_width_mm,
        result.aero.inlet_width_mm
    );
    println!("  Blades: {} (Ns = {:.0}, recommended {})",
        result.aero.blade_count,
        result.aero.specific_speed,
        result.aero.blade_recommendation
    );
    println!();
    println!("Checks:");
    println!("  Air density: {:.3} kg/m³ [{}]", result.air.density_si_kg_m3, result.air.altitude_status);
    println!("  Tip speed:   {:.1} m/s [{}]", result.aero.tip_speed_m_s, result.aero.tip_speed_status);
    println!("  Stress:      SF {:.2} [{}]", result.structural.safety_factor, result.structural.status);
    println!("  Motor load:  {:.1}% ({:.2} BHP) [{}]",
        result.power.motor_load_pct,
        result.power.brake_power_hp,
        result.power.motor_status
    );
    println!("  Shaft:       {:.0} mm (min {:.2} mm)",
        result.shaft.standard_diameter_mm,
        result.shaft.min_diameter_mm
    );

    let non_finite = result.non_finite_fields();
    if !non_finite.is_empty() {
        println!();
        println!("Warning: non-finite results: {}", non_finite.join(", "));
    }

    println!();
    println!("{}", result.geometry_script);
}

fn append_history(path: &Path, input: &DesignInput, result: &DesignResult) -> CalcResult<()> {
    let _lock = FileLock::acquire(path, file_io::current_user())?;
    let mut history = load_history(path)?;
    history.record(input, result);
    save_history(&history, path)
}

fn run_materials(json: bool) -> CalcResult<()> {
    if json {
        let out = serde_json::to_string_pretty(&MATERIALS)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{:<16} {:>8} {:>8} {:>6} {:>6} {:>7}", "Material", "kg/m³", "Sy MPa", "ν", "E GPa", "$/kg");
    for m in MATERIALS.iter() {
        println!(
            "{:<16} {:>8.0} {:>8.0} {:>6.2} {:>6.0} {:>7.2}",
            m.key, m.density_kg_m3, m.yield_strength_mpa, m.poisson_ratio, m.youngs_modulus_gpa, m.unit_price_per_kg
        );
    }
    Ok(())
}

fn run_history(path: &Path, clear: bool, json: bool) -> CalcResult<()> {
    if clear {
        let _lock = FileLock::acquire(path, file_io::current_user())?;
        let mut history = load_history(path)?;
        history.clear();
        save_history(&history, path)?;
        println!("History cleared.");
        return Ok(());
    }

    let (history, lock) = file_io::load_history_with_lock_check(path)?;
    if let Some(info) = lock {
        eprintln!("Note: history is being updated by {} ({})", info.user_id, info.machine);
    }

    if json {
        let out = serde_json::to_string_pretty(&history)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if history.is_empty() {
        println!("No designs recorded.");
        return Ok(());
    }

    for record in history.records().rev() {
        println!(
            "{}  {:>7} CFM  {:>6} Pa  {:>6} BHP  D2 {:>6} mm  {}",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            fmt_optional(record.flow, 0),
            fmt_optional(record.pressure, 0),
            fmt_optional(record.brake_power_hp, 2),
            fmt_optional(record.d2_mm, 0),
            record.inputs.material,
        );
    }
    Ok(())
}

fn fmt_optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}

fn run_equations(markdown: bool) {
    if markdown {
        print!("{}", generate_equations_markdown());
        return;
    }

    for equation in ALL_EQUATIONS.iter().copied() {
        let meta = Equation::metadata(&equation);
        println!("{:<22} {}", meta.name, meta.formula_plain);
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
