//! # Sizing Calculations
//!
//! One module per stage of the sizing pass. Each stage follows the pattern:
//!
//! - a result struct (JSON-serializable)
//! - status enums that classify it, total over every `f64`
//! - `calculate(...)` - a pure function of the previous stages' outputs
//!
//! [`design::evaluate`] runs them in order and is the only fallible step.
//!
//! ## Available Stages
//!
//! - [`air`] - Air density at temperature and altitude
//! - [`aero`] - Specific speed, efficiency, tip speed, geometry, blade count
//! - [`structural`] - Centrifugal stress and safety factor
//! - [`power`] - Air/brake power, motor load, torque
//! - [`shaft`] - Minimum and standard shaft diameter
//! - [`design`] - Input/result types and the full pass

pub mod aero;
pub mod air;
pub mod design;
pub mod power;
pub mod shaft;
pub mod structural;

// Re-export commonly used types
pub use aero::{AeroSizing, BladeType, TipSpeedStatus};
pub use air::{AirProperties, AltitudeStatus};
pub use design::{evaluate, DesignInput, DesignResult};
pub use power::{MotorStatus, PowerTrain};
pub use shaft::ShaftSizing;
pub use structural::{StressStatus, StructuralCheck};
