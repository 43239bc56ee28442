//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – fixed step, gravitational constant, source index
//! - [`RealtimeConfig`]   – speed multiplier and step cap for the real-time loop
//! - [`UnitSystem`]       – display units for console output
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A star with one planet on a circular orbit, in AU / solar mass / year:
//!
//! ```yaml
//! parameters:
//!   dt: 0.001               # fixed step size (years)
//!   G: 39.478417604357      # 4 pi^2
//!   source: 0               # optional, index of the attracting body
//!
//! realtime:                 # optional section
//!   speed: 0.5              # simulated years per real second
//!   max_steps_per_advance: 5000
//!
//! units: astronomical       # optional, "scaled" (default) or "astronomical"
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0
//!   - x: [ 1.0, 0.0 ]
//!     v: [ 0.0, 6.283185307 ]
//!     m: 3.0e-6
//! ```
//!
//! `Scenario::build_scenario` maps this into the runtime types and
//! rejects anything the engine cannot run.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::output::units::UnitSystem;

/// Fixed numerical and physical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // fixed time step size
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub source: usize, // index of the single gravitational source
}

/// Settings for driving the engine from a real-time clock
#[derive(Deserialize, Debug, Clone)]
pub struct RealtimeConfig {
    #[serde(default = "default_speed")]
    pub speed: f64, // simulated time per real second
    #[serde(default)]
    pub max_steps_per_advance: Option<usize>, // `None` leaves the accumulator uncapped
}

fn default_speed() -> f64 {
    1.0
}

impl RealtimeConfig {
    /// Reject settings that would stall or hang the real-time loop
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.speed.is_finite() && self.speed > 0.0,
            "realtime speed must be positive and finite, got {}",
            self.speed
        );
        if let Some(cap) = self.max_steps_per_advance {
            ensure!(cap >= 1, "max_steps_per_advance must be at least 1, got {cap}");
        }
        Ok(())
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            max_steps_per_advance: None,
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y]
    pub v: Vec<f64>, // initial velocity [vx, vy]
    pub m: f64, // mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub realtime: RealtimeConfig,
    #[serde(default)]
    pub units: UnitSystem, // how console output is displayed
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("failed to parse scenario YAML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario file {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario file {}", path.display()))
    }
}
