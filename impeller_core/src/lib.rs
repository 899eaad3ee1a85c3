//! # impeller_core - Centrifugal Fan Impeller Sizing Engine
//!
//! `impeller_core` sizes a centrifugal fan impeller from an operating point:
//! flow, static pressure, speed, motor rating, site conditions, blade angles,
//! and a material. It applies closed-form fan-selection formulas and returns
//! diameters, blade count, structural margin, power draw, shaft size, and a
//! CAD geometry script. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from input to result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Degenerate inputs are data**: Zero speed or flow yields `inf`/`NaN`
//!   results, not errors
//!
//! ## Quick Start
//!
//! ```rust
//! use impeller_core::{evaluate, DesignInput};
//!
//! let input = DesignInput::default();
//! let result = evaluate(&input).unwrap();
//!
//! assert_eq!(result.aero.blade_count, 10);
//! println!("{}", result.geometry_script);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The five sizing stages and [`evaluate`]
//! - [`equations`] - Pure formulas and the equation registry
//! - [`materials`] - Impeller material catalog
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`export`] - CAD geometry script
//! - [`float_json`] - Lossless JSON for `inf`/`NaN` results
//! - [`form`] - Text-field input normalization
//! - [`history`] - Capped log of recent designs
//! - [`file_io`] - History persistence with atomic saves and locking
//! - [`report`] - Plain-text calculation report

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod float_json;
pub mod form;
pub mod history;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, DesignInput, DesignResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_history, save_history, FileLock};
pub use history::{DesignHistory, HistoryRecord};
