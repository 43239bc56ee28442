//! Build fully-initialized simulation scenarios
//!
//! Either from a `ScenarioConfig` (YAML-facing) or from one of the built-in
//! [`Preset`]s. A [`Scenario`] bundles:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - real-time loop settings (`RealtimeConfig`)
//! - display units for console output
//!
//! Nothing is validated here beyond the shape of the config;
//! `Scenario::into_engine` is where the engine rejects bad input.

use std::f64::consts::PI;

use anyhow::{ensure, Context, Result};
use clap::ValueEnum;
use log::debug;

use crate::configuration::config::{BodyConfig, RealtimeConfig, ScenarioConfig};
use crate::output::units::{UnitSystem, G_KEPLER};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{circular_orbit_speed, escape_speed};
use crate::simulation::params::Parameters;
use crate::simulation::scheduler::Accumulator;
use crate::simulation::states::{Body, NVec2, System};

/// Reference data for the planets used by [`Preset::InnerPlanets`]
#[derive(Debug, Clone, Copy)]
pub struct PlanetData {
    pub name: &'static str,
    pub semi_major_axis: f64, // AU
    pub orbital_period: f64, // years
    pub mass: f64, // solar masses
}

pub const PLANETS: [PlanetData; 5] = [
    PlanetData { name: "mercury", semi_major_axis: 0.387, orbital_period: 0.241, mass: 1.66e-7 },
    PlanetData { name: "venus", semi_major_axis: 0.723, orbital_period: 0.615, mass: 2.45e-6 },
    PlanetData { name: "earth", semi_major_axis: 1.0, orbital_period: 1.0, mass: 3.0e-6 },
    PlanetData { name: "mars", semi_major_axis: 1.524, orbital_period: 1.88, mass: 3.23e-7 },
    PlanetData { name: "jupiter", semi_major_axis: 5.203, orbital_period: 11.86, mass: 9.55e-4 },
];

/// Built-in scenarios
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Planet on a circular orbit around a heavy star
    Circular,
    /// Same start, launched at 0.7x circular speed
    Elliptical,
    /// Same start, launched at 1.2x escape speed
    Escape,
    /// Earth around the Sun in AU / solar mass / year
    EarthSun,
    /// Mercury through Jupiter, each orbiting the Sun only
    InnerPlanets,
}

/// Runtime bundle ready to be turned into an [`Engine`] and [`Accumulator`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub realtime: RealtimeConfig,
    pub units: UnitSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<Result<Vec<Body>>>()?;

        cfg.realtime.validate().context("invalid realtime settings")?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters::new(p_cfg.G, p_cfg.dt).with_source(p_cfg.source);

        debug!("scenario: {} bodies from config", bodies.len());

        Ok(Self {
            parameters,
            system: System::new(bodies),
            realtime: cfg.realtime,
            units: cfg.units,
        })
    }

    pub fn from_preset(preset: Preset) -> Self {
        let circular = circular_orbit_speed(STAR_MASS, ORBIT_RADIUS, STAR_G);
        match preset {
            Preset::Circular => star_and_planet(circular),
            Preset::Elliptical => star_and_planet(0.7 * circular),
            Preset::Escape => star_and_planet(1.2 * escape_speed(STAR_MASS, ORBIT_RADIUS, STAR_G)),
            Preset::EarthSun => earth_sun(),
            Preset::InnerPlanets => inner_planets(),
        }
    }

    /// Validate and hand the state to a new engine
    pub fn into_engine(self) -> Result<Engine> {
        Engine::new(self.system, self.parameters)
    }

    /// Accumulator configured from the real-time settings
    pub fn accumulator(&self) -> Accumulator {
        Accumulator::new(self.realtime.speed).with_max_steps(self.realtime.max_steps_per_advance)
    }
}

fn body_from_config(i: usize, bc: &BodyConfig) -> Result<Body> {
    ensure!(bc.x.len() == 2, "body {i}: position needs 2 components, got {}", bc.x.len());
    ensure!(bc.v.len() == 2, "body {i}: velocity needs 2 components, got {}", bc.v.len());
    Ok(Body::new(NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]), bc.m))
}

const STAR_MASS: f64 = 1000.0;
const ORBIT_RADIUS: f64 = 100.0;
const STAR_G: f64 = 1.0;

/// Star at rest at the origin, unit-mass planet on +x moving +y at `speed`
fn star_and_planet(speed: f64) -> Scenario {
    let star = Body::new(NVec2::zeros(), NVec2::zeros(), STAR_MASS);
    let planet = Body::new(NVec2::new(ORBIT_RADIUS, 0.0), NVec2::new(0.0, speed), 1.0);

    Scenario {
        parameters: Parameters::new(STAR_G, 0.01),
        system: System::new(vec![star, planet]),
        // one orbit (~200 time units) every couple of seconds
        realtime: RealtimeConfig { speed: 100.0, max_steps_per_advance: Some(100_000) },
        units: UnitSystem::Scaled,
    }
}

fn earth_sun() -> Scenario {
    let earth = PLANETS[2];
    let sun = Body::new(NVec2::zeros(), NVec2::zeros(), 1.0);
    let speed = circular_orbit_speed(1.0, earth.semi_major_axis, G_KEPLER);
    let planet = Body::new(NVec2::new(earth.semi_major_axis, 0.0), NVec2::new(0.0, speed), earth.mass);

    Scenario {
        parameters: Parameters::new(G_KEPLER, 0.001),
        system: System::new(vec![sun, planet]),
        realtime: RealtimeConfig { speed: 0.5, max_steps_per_advance: Some(10_000) },
        units: UnitSystem::Astronomical,
    }
}

/// Planets start at equally spaced angles around the Sun
fn inner_planets() -> Scenario {
    let sun = Body::new(NVec2::zeros(), NVec2::zeros(), 1.0);
    let mut bodies = vec![sun];

    for (i, p) in PLANETS.iter().enumerate() {
        let angle = 2.0 * PI * i as f64 / PLANETS.len() as f64;
        let (sin, cos) = angle.sin_cos();
        let speed = circular_orbit_speed(1.0, p.semi_major_axis, G_KEPLER);
        // velocity perpendicular to the radius, counter-clockwise
        bodies.push(Body::new(
            p.semi_major_axis * NVec2::new(cos, sin),
            speed * NVec2::new(-sin, cos),
            p.mass,
        ));
    }

    Scenario {
        parameters: Parameters::new(G_KEPLER, 0.0005),
        system: System::new(bodies),
        realtime: RealtimeConfig { speed: 1.0, max_steps_per_advance: Some(20_000) },
        units: UnitSystem::Astronomical,
    }
}
