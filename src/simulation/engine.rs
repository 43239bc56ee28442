//! Simulation engine
//!
//! Owns the body system and the fixed parameters, and is the only place
//! where a configuration is validated. Once built, stepping cannot fail.

use anyhow::{Context, Result};
use log::debug;

use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::states::{Body, NVec2, System};

#[derive(Debug, Clone)]
pub struct Engine {
    system: System,
    parameters: Parameters,
}

impl Engine {
    /// Validate `parameters` against `system` and take ownership of both
    pub fn new(system: System, parameters: Parameters) -> Result<Self> {
        parameters
            .validate(&system.bodies)
            .context("invalid simulation configuration")?;

        debug!(
            "engine: {} bodies, G = {}, dt = {}, source = {}",
            system.bodies.len(),
            parameters.G,
            parameters.dt,
            parameters.source
        );

        Ok(Self { system, parameters })
    }

    /// Advance exactly one fixed step
    pub fn step(&mut self) {
        symplectic_euler(&mut self.system, &self.parameters);
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn elapsed_time(&self) -> f64 {
        self.system.t
    }

    pub fn timestep(&self) -> f64 {
        self.parameters.dt
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn source(&self) -> &Body {
        &self.system.bodies[self.parameters.source]
    }

    /// Owned copy of every body position, in body order
    pub fn snapshot_positions(&self) -> Vec<NVec2> {
        self.system.bodies.iter().map(|b| b.x).collect()
    }

    /// Owned copy of every body's (position, velocity), in body order
    pub fn snapshot_state(&self) -> Vec<(NVec2, NVec2)> {
        self.system.bodies.iter().map(|b| (b.x, b.v)).collect()
    }
}
