//! # Non-finite floats in JSON
//!
//! JSON numbers cannot hold `inf` or `NaN`, and `serde_json` writes them as
//! `null`, which it then refuses to read back as `f64`. Degenerate designs
//! carry such values as data, so every `f64` in the input and result types
//! goes through this module:
//!
//! - finite values are plain JSON numbers
//! - `+∞`, `−∞`, NaN are the strings `"inf"`, `"-inf"`, `"NaN"`
//!
//! ```rust
//! use impeller_core::calculations::{evaluate, DesignInput, DesignResult};
//!
//! let input = DesignInput { rpm: 0.0, ..DesignInput::default() };
//! let result = evaluate(&input).unwrap();
//! let json = serde_json::to_string(&result).unwrap();
//! assert!(json.contains("\"outer_diameter_mm\":\"inf\""));
//!
//! let back: DesignResult = serde_json::from_str(&json).unwrap();
//! assert!(back.aero.outer_diameter_mm.is_infinite());
//! ```
//!
//! Use with `#[serde(with = "crate::float_json")]`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub const POS_INF: &str = "inf";
pub const NEG_INF: &str = "-inf";
pub const NAN: &str = "NaN";

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value == f64::INFINITY {
        serializer.serialize_str(POS_INF)
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str(NEG_INF)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(FloatVisitor)
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number or one of \"{}\", \"{}\", \"{}\"", POS_INF, NEG_INF, NAN)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v {
            POS_INF => Ok(f64::INFINITY),
            NEG_INF => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}
