//! Gravitational force law for the single-source engine
//!
//! Inverse-square attraction of one body toward another, plus the
//! closed-form speeds scenario factories use to seed initial velocities

use super::states::{Body, NVec2};

/// Separations below this are treated as coincident and produce no
/// acceleration instead of dividing by (near) zero.
/// Not a collision model.
pub const MIN_SEPARATION: f64 = 1e-10;

/// Acceleration of `target` due to `source`
/// - directed from `target` toward `source`
/// - magnitude `G * m_source / r^2`
/// - exact zero vector when `r < MIN_SEPARATION`
#[allow(non_snake_case)]
pub fn gravitational_acceleration(target: &Body, source: &Body, G: f64) -> NVec2 {
    // r points from target to source
    let r = source.x - target.x;
    let dist = r.norm();
    if dist < MIN_SEPARATION {
        return NVec2::zeros();
    }

    let r_hat = r / dist;
    let magnitude = G * source.m / (dist * dist);

    magnitude * r_hat
}

/// Speed of a circular orbit of `radius` around `central_mass`.
/// Direction must be perpendicular to the radius vector; only the speed is returned.
/// `radius <= 0` is not guarded and yields NaN/inf.
#[allow(non_snake_case)]
pub fn circular_orbit_speed(central_mass: f64, radius: f64, G: f64) -> f64 {
    (G * central_mass / radius).sqrt()
}

/// Escape speed at `radius`: sqrt(2) times the circular speed
#[allow(non_snake_case)]
pub fn escape_speed(central_mass: f64, radius: f64, G: f64) -> f64 {
    std::f64::consts::SQRT_2 * circular_orbit_speed(central_mass, radius, G)
}
