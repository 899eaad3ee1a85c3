//! # Materials Database
//!
//! Impeller material definitions and property lookups.
//!
//! The catalog is a fixed, process-wide read-only table. Lookups go through a
//! lazily built map keyed by material name; nothing ever mutates it after
//! initialization, so it is safe to share across threads.
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::materials;
//!
//! let steel = materials::lookup("Steel").unwrap();
//! println!("Sy = {} MPa, rho = {} kg/m³", steel.yield_strength_mpa, steel.density_kg_m3);
//!
//! // Unknown keys are a configuration error, never a silent default
//! assert!(materials::lookup("Brass").is_err());
//! ```

pub mod catalog;

pub use catalog::MATERIALS;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Mechanical and commercial properties of one catalog material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProperties {
    /// Catalog key (e.g., "Steel", "Aluminum")
    pub key: &'static str,
    /// Density ρ (kg/m³)
    pub density_kg_m3: f64,
    /// Yield strength Sy (MPa)
    pub yield_strength_mpa: f64,
    /// Poisson's ratio ν
    pub poisson_ratio: f64,
    /// Young's modulus E (GPa)
    pub youngs_modulus_gpa: f64,
    /// Unit price ($/kg)
    pub unit_price_per_kg: f64,
}

static CATALOG: Lazy<HashMap<&'static str, &'static MaterialProperties>> =
    Lazy::new(|| MATERIALS.iter().map(|m| (m.key, m)).collect());

/// Look up a material by catalog key.
///
/// Keys match exactly (case and whitespace included). Any other name is
/// rejected with [`CalcError::MaterialNotFound`].
pub fn lookup(key: &str) -> CalcResult<&'static MaterialProperties> {
    CATALOG
        .get(key)
        .copied()
        .ok_or_else(|| CalcError::material_not_found(key))
}

/// All catalog keys in presentation order
pub fn keys() -> impl Iterator<Item = &'static str> {
    MATERIALS.iter().map(|m| m.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_entries() {
        assert_eq!(MATERIALS.len(), 5);
        assert_eq!(CATALOG.len(), 5);
    }

    #[test]
    fn test_lookup_exact() {
        let steel = lookup("Steel").unwrap();
        assert_eq!(steel.density_kg_m3, 7850.0);
        assert_eq!(steel.yield_strength_mpa, 250.0);
        assert_eq!(steel.poisson_ratio, 0.30);
    }

    #[test]
    fn test_lookup_requires_exact_key() {
        assert_eq!(lookup("steel").unwrap_err(), CalcError::material_not_found("steel"));
        assert!(lookup("ALUMINUM").is_err());
        assert!(lookup(" Stainless Steel ").is_err());
        assert_eq!(lookup("Stainless Steel").unwrap().key, "Stainless Steel");
    }

    #[test]
    fn test_lookup_unknown_is_configuration_error() {
        let err = lookup("Brass").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("Brass"));
        assert!(lookup("").is_err());
    }

    #[test]
    fn test_keys_unique() {
        let keys: Vec<_> = keys().collect();
        for (i, k) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(k), "duplicate key {}", k);
        }
    }

    #[test]
    fn test_properties_physical() {
        for m in MATERIALS.iter() {
            assert!(m.density_kg_m3 > 0.0);
            assert!(m.yield_strength_mpa > 0.0);
            assert!(m.poisson_ratio > 0.0 && m.poisson_ratio < 0.5);
        }
    }
}
