//! Console telemetry sink
//!
//! Reports samples through the `log` facade at `info`, one line per sample:
//! `t=… | pos=[…, …] | r=… | v=…`. Astronomical scenarios additionally
//! get days, km and km/s next to the raw numbers.

use anyhow::Result;
use log::info;

use super::units::{distance_to_km, time_to_days, velocity_to_km_per_s, UnitSystem};
use crate::simulation::sampler::{Sample, SampleSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    pub units: UnitSystem,
}

impl ConsoleSink {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    pub fn format(&self, s: &Sample) -> String {
        match self.units {
            UnitSystem::Scaled => format!(
                "t={:8.2} | pos=[{:7.2}, {:7.2}] | r={:6.2} | v={:.4}",
                s.t, s.x.x, s.x.y, s.distance, s.speed
            ),
            UnitSystem::Astronomical => format!(
                "t={:8.3} yr ({:7.1} d) | pos=[{:7.3}, {:7.3}] AU | r={:6.3} AU ({:.3e} km) | v={:.4} AU/yr ({:.2} km/s)",
                s.t,
                time_to_days(s.t),
                s.x.x,
                s.x.y,
                s.distance,
                distance_to_km(s.distance),
                s.speed,
                velocity_to_km_per_s(s.speed)
            ),
        }
    }
}

impl SampleSink for ConsoleSink {
    fn record(&mut self, sample: &Sample) -> Result<()> {
        info!("{}", self.format(sample));
        Ok(())
    }
}
