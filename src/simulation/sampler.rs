//! State sampling and interval recording
//!
//! A [`Sample`] is a read-only view of one body at one instant. The
//! [`Recorder`] steps an engine and hands a sample to a [`SampleSink`]
//! every `interval` steps. Recording sits strictly on top of stepping:
//! leaving it out changes nothing about the physics.

use anyhow::{ensure, Result};

use super::engine::Engine;
use super::states::{Body, NVec2};

/// One logged record: `(time, position, velocity, distance, speed)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub x: NVec2,
    pub v: NVec2,
    pub distance: f64, // |x|, from the coordinate origin
    pub speed: f64, // |v|
}

impl Sample {
    pub fn of(body: &Body, t: f64) -> Self {
        Self {
            t,
            x: body.x,
            v: body.v,
            distance: body.distance_from_origin(),
            speed: body.speed(),
        }
    }
}

/// Destination for recorded samples (console, file, test buffer ...)
pub trait SampleSink {
    fn record(&mut self, sample: &Sample) -> Result<()>;

    /// Flush anything buffered; called once after the last record
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl SampleSink for Vec<Sample> {
    fn record(&mut self, sample: &Sample) -> Result<()> {
        self.push(*sample);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recorder {
    pub interval: usize, // record every `interval` steps
    pub body: usize, // index of the tracked body
}

impl Recorder {
    /// Track the first body that is not the engine's source
    pub fn new(engine: &Engine, interval: usize) -> Result<Self> {
        let source = engine.parameters().source;
        let body = if source == 0 { 1 } else { 0 };
        Self::tracking(engine, interval, body)
    }

    pub fn tracking(engine: &Engine, interval: usize, body: usize) -> Result<Self> {
        ensure!(interval >= 1, "logging interval must be at least 1");
        ensure!(
            body < engine.bodies().len(),
            "tracked body {} out of range for {} bodies",
            body,
            engine.bodies().len()
        );
        Ok(Self { interval, body })
    }

    pub fn sample_now(&self, engine: &Engine) -> Sample {
        Sample::of(&engine.bodies()[self.body], engine.elapsed_time())
    }

    /// Run `num_steps` steps, recording after step `i` (0-based) whenever
    /// `i % interval == 0`. Returns the number of samples written.
    pub fn run<S>(&self, engine: &mut Engine, num_steps: usize, sink: &mut S) -> Result<usize>
    where
        S: SampleSink + ?Sized,
    {
        let mut written = 0;
        for i in 0..num_steps {
            engine.step();
            if i % self.interval == 0 {
                sink.record(&self.sample_now(engine))?;
                written += 1;
            }
        }
        sink.finish()?;
        Ok(written)
    }
}
