//! # Unit Types
//!
//! Type-safe wrappers for the mixed US customary / SI units a fan sizing
//! workflow uses. They are plain `f64` newtypes so JSON stays clean (just
//! numbers) and the conversions used by the sizing formulas live in one place.
//!
//! ## Conversion Constants
//!
//! These are the rounded values of the fan-selection method, not the
//! full-precision NIST values.
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::units::{Cfm, CubicMetersPerSecond, Pascals, InchesWaterGauge};
//!
//! let flow: CubicMetersPerSecond = Cfm(1000.0).into();
//! assert!((flow.0 - 0.471947).abs() < 1e-9);
//!
//! let pressure: InchesWaterGauge = Pascals(249.088).into();
//! assert!((pressure.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// m³/s per CFM
pub const CFM_TO_M3_S: f64 = 4.71947e-4;

/// Pa per inch of water gauge
pub const PA_PER_IN_WG: f64 = 249.088;

/// kg/m³ per lb/ft³
pub const LB_FT3_TO_KG_M3: f64 = 16.0185;

/// kW per horsepower
pub const HP_TO_KW: f64 = 0.7457;

// ============================================================================
// Flow Units
// ============================================================================

/// Volumetric flow in cubic feet per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cfm(pub f64);

/// Volumetric flow in cubic meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerSecond(pub f64);

impl From<Cfm> for CubicMetersPerSecond {
    fn from(cfm: Cfm) -> Self {
        CubicMetersPerSecond(cfm.0 * CFM_TO_M3_S)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in inches of water gauge
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InchesWaterGauge(pub f64);

/// Stress or pressure in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Pascals> for InchesWaterGauge {
    fn from(pa: Pascals) -> Self {
        InchesWaterGauge(pa.0 / PA_PER_IN_WG)
    }
}

impl From<Pascals> for MegaPascals {
    fn from(pa: Pascals) -> Self {
        MegaPascals(pa.0 / 1e6)
    }
}

// ============================================================================
// Density Units
// ============================================================================

/// Mass density in pounds per cubic foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoundsPerCubicFoot(pub f64);

/// Mass density in kilograms per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilogramsPerCubicMeter(pub f64);

impl From<PoundsPerCubicFoot> for KilogramsPerCubicMeter {
    fn from(d: PoundsPerCubicFoot) -> Self {
        KilogramsPerCubicMeter(d.0 * LB_FT3_TO_KG_M3)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Power in horsepower
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horsepower(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Horsepower> for Kilowatts {
    fn from(hp: Horsepower) -> Self {
        Kilowatts(hp.0 * HP_TO_KW)
    }
}

// ============================================================================
// Length and Angle Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians
    pub fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI / 180.0
    }
}
