//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the settings that stay fixed for a whole run:
//! - fixed integration step `dt`,
//! - gravitational constant `G`,
//! - index of the single gravitational source body

use anyhow::{bail, ensure, Result};

use super::states::Body;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step size
    pub source: usize, // index of the body every other body falls toward
}

impl Parameters {
    #[allow(non_snake_case)]
    pub fn new(G: f64, dt: f64) -> Self {
        Self { G, dt, source: 0 }
    }

    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    /// Reject configurations the integrator cannot run meaningfully.
    /// Called once at construction so the step loop stays branch-free.
    pub fn validate(&self, bodies: &[Body]) -> Result<()> {
        ensure!(!bodies.is_empty(), "scenario has no bodies");
        ensure!(
            bodies.len() >= 2,
            "scenario needs a source and at least one orbiting body, got {} body",
            bodies.len()
        );
        ensure!(
            self.dt.is_finite() && self.dt > 0.0,
            "timestep must be positive and finite, got {}",
            self.dt
        );
        ensure!(self.G.is_finite(), "gravitational constant must be finite, got {}", self.G);
        ensure!(
            self.source < bodies.len(),
            "source index {} out of range for {} bodies",
            self.source,
            bodies.len()
        );

        for (i, b) in bodies.iter().enumerate() {
            if !(b.m.is_finite() && b.m > 0.0) {
                bail!("body {i}: mass must be positive and finite, got {}", b.m);
            }
            if !(b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite())) {
                bail!("body {i}: position and velocity must be finite");
            }
        }

        Ok(())
    }
}
