//! Impeller Material Catalog
//!
//! Mechanical properties for the five impeller materials offered by the
//! sizing tool. Values are typical room-temperature handbook figures for
//! sheet/plate stock:
//!
//! - **Steel**: ASTM A36 structural plate
//! - **Stainless Steel**: 304 annealed
//! - **Aluminum**: 6061-T6
//! - **Titanium**: Ti-6Al-4V annealed
//! - **FRP**: glass-fibre reinforced polyester laminate
//!
//! Only density, yield strength and Poisson's ratio feed the stress check;
//! modulus and price are carried for reporting.

use super::MaterialProperties;

/// The fixed material table, in presentation order.
pub static MATERIALS: [MaterialProperties; 5] = [
    MaterialProperties {
        key: "Steel",
        density_kg_m3: 7850.0,
        yield_strength_mpa: 250.0,
        poisson_ratio: 0.30,
        youngs_modulus_gpa: 200.0,
        unit_price_per_kg: 1.2,
    },
    MaterialProperties {
        key: "Stainless Steel",
        density_kg_m3: 8000.0,
        yield_strength_mpa: 215.0,
        poisson_ratio: 0.29,
        youngs_modulus_gpa: 193.0,
        unit_price_per_kg: 4.5,
    },
    MaterialProperties {
        key: "Aluminum",
        density_kg_m3: 2700.0,
        yield_strength_mpa: 276.0,
        poisson_ratio: 0.33,
        youngs_modulus_gpa: 69.0,
        unit_price_per_kg: 3.8,
    },
    MaterialProperties {
        key: "Titanium",
        density_kg_m3: 4430.0,
        yield_strength_mpa: 880.0,
        poisson_ratio: 0.34,
        youngs_modulus_gpa: 114.0,
        unit_price_per_kg: 30.0,
    },
    MaterialProperties {
        key: "FRP",
        density_kg_m3: 1850.0,
        yield_strength_mpa: 150.0,
        poisson_ratio: 0.28,
        youngs_modulus_gpa: 20.0,
        unit_price_per_kg: 6.5,
    },
];
