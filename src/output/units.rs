//! Display-only unit conversions.
//!
//! The engine works in whatever units a scenario picks. Astronomical
//! scenarios use AU for distance, solar masses for mass and years for time;
//! these helpers turn those into km, km/s and days for humans. Nothing in
//! the simulation core calls them.

use std::f64::consts::PI;

use serde::Deserialize;

pub const AU_IN_METERS: f64 = 1.496e11;
pub const SOLAR_MASS_IN_KG: f64 = 1.989e30;
pub const YEAR_IN_SECONDS: f64 = 3.154e7; // 365.25 days
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Gravitational constant in SI, m^3 / (kg s^2)
pub const G_SI: f64 = 6.67430e-11;

/// G in AU^3 / (M_sun yr^2) chosen so a 1 AU orbit of a 1 M_sun star takes exactly one year
pub const G_KEPLER: f64 = 4.0 * PI * PI;

/// G in AU^3 / (M_sun yr^2) derived from the SI constants (about 39.4)
pub fn g_au() -> f64 {
    G_SI * SOLAR_MASS_IN_KG * YEAR_IN_SECONDS.powi(2) / AU_IN_METERS.powi(3)
}

pub fn distance_to_km(distance_au: f64) -> f64 {
    distance_au * AU_IN_METERS / 1000.0
}

/// 1 AU/yr is roughly 4.74 km/s
pub fn velocity_to_km_per_s(velocity_au_per_year: f64) -> f64 {
    velocity_au_per_year * AU_IN_METERS / YEAR_IN_SECONDS / 1000.0
}

pub fn time_to_days(time_years: f64) -> f64 {
    time_years * DAYS_PER_YEAR
}

/// How the console formats engine quantities
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Raw engine numbers, no conversion
    #[default]
    Scaled,
    /// AU / year scenarios shown as days, AU, km and km/s
    Astronomical,
}
