//! Core state types for the orbit simulation.
//!
//! Defines the 2D point-mass `Body` and the `System` that owns them.
//! The system holds the ordered list of bodies and the elapsed simulation
//! time `t`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Kick: v += a * dt
    ///
    /// Must run before [`Body::advance_position`] within a step so the
    /// position update sees the new velocity (semi-implicit Euler).
    pub fn apply_acceleration(&mut self, a: NVec2, dt: f64) {
        self.v += a * dt;
    }

    /// Drift: x += v * dt
    pub fn advance_position(&mut self, dt: f64) {
        self.x += self.v * dt;
    }

    /// |x|, measured from the coordinate origin (not from the source)
    pub fn distance_from_origin(&self) -> f64 {
        self.x.norm()
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // elapsed time
}

impl System {
    /// New system at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }
}
