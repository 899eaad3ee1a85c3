//! # Geometry Export
//!
//! Renders the impeller outline as a small CAD command script: the outer and
//! inner circles plus a blade-count comment.
//!
//! ## Format
//!
//! ```text
//! ; Fan Design
//! CIRCLE 0,0 <D2 mm, rounded>
//! CIRCLE 0,0 <D1 mm, rounded>
//! ; Blades: <count>
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline. Non-finite
//! diameters are written as `inf` / `NaN` rather than rejected.

use std::path::Path;

use crate::errors::CalcResult;
use crate::file_io::write_atomic;

/// Header comment of every script
pub const SCRIPT_HEADER: &str = "; Fan Design";

/// Build the geometry script for an impeller.
///
/// Non-finite diameters are written as `inf`, `-inf` or `NaN`. Those lines
/// fall outside the integer `CIRCLE` grammar above, and CAD tools will
/// reject them. Check [`DesignResult::non_finite_fields`] before exporting.
///
/// [`DesignResult::non_finite_fields`]: crate::calculations::DesignResult::non_finite_fields
///
/// # Example
///
/// ```rust
/// use impeller_core::export::geometry_script;
///
/// let script = geometry_script(539.076, 269.538, 10);
/// assert_eq!(script, "; Fan Design\nCIRCLE 0,0 539\nCIRCLE 0,0 270\n; Blades: 10");
/// ```
pub fn geometry_script(outer_diameter_mm: f64, inner_diameter_mm: f64, blade_count: u8) -> String {
    [
        SCRIPT_HEADER.to_string(),
        format!("CIRCLE 0,0 {:.0}", outer_diameter_mm.round()),
        format!("CIRCLE 0,0 {:.0}", inner_diameter_mm.round()),
        format!("; Blades: {}", blade_count),
    ]
    .join("\n")
}

/// Write a geometry script to disk (atomic replace).
pub fn save_script(script: &str, path: &Path) -> CalcResult<()> {
    write_atomic(path, script.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_reference_script() {
        let script = geometry_script(539.076, 269.538, 10);
        assert_eq!(
            script,
            "; Fan Design\nCIRCLE 0,0 539\nCIRCLE 0,0 270\n; Blades: 10"
        );
        assert!(!script.ends_with('\n'));
    }

    #[test]
    fn test_non_finite_diameters() {
        let script = geometry_script(f64::INFINITY, f64::NAN, 10);
        assert_eq!(script, "; Fan Design\nCIRCLE 0,0 inf\nCIRCLE 0,0 NaN\n; Blades: 10");
        let script = geometry_script(f64::NEG_INFINITY, 0.0, 3);
        assert!(script.contains("CIRCLE 0,0 -inf\n"));
    }

    #[test]
    fn test_non_finite_lines_are_not_integers() {
        let script = geometry_script(f64::INFINITY, f64::NAN, 10);
        let sizes: Vec<&str> = script
            .lines()
            .filter_map(|line| line.strip_prefix("CIRCLE 0,0 "))
            .collect();
        assert_eq!(sizes, ["inf", "NaN"]);
        assert!(sizes.iter().all(|s| s.parse::<i64>().is_err()));
    }

    #[test]
    fn test_save_script() {
        let path = temp_dir().join("impeller_test_script.scr");
        let script = geometry_script(400.0, 200.0, 8);
        save_script(&script, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), script);
        let _ = fs::remove_file(&path);
    }
}
