//! Headless real-time viewer
//!
//! Drives the engine from the wall clock the way a renderer would: once per
//! frame it measures the real time since the previous frame, feeds it to the
//! [`Accumulator`] and reports where the bodies are. Drawing, pixel scaling
//! and input live outside this crate; here the "frame" is a log line.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use log::info;

use crate::output::console::ConsoleSink;
use crate::simulation::engine::Engine;
use crate::simulation::sampler::{Recorder, SampleSink};
use crate::simulation::scenario::Scenario;
use crate::simulation::scheduler::{Accumulator, Advance};

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub fps: f64, // target frame rate
    pub duration: Duration, // wall-clock run length
    pub report_every: usize, // frames between position reports, 0 = never
    pub speed: Option<f64>, // overrides the scenario's speed multiplier
    pub pause_window: Option<(f64, f64)>, // paused between these wall-clock seconds
}

impl HeadlessOptions {
    /// Wall-clock run length from seconds, rejecting negative, non-finite
    /// and out-of-range values
    pub fn duration_from_secs(seconds: f64) -> Result<Duration> {
        Duration::try_from_secs_f64(seconds)
            .with_context(|| format!("invalid run length of {seconds} seconds"))
    }
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            fps: 60.0,
            duration: Duration::from_secs(5),
            report_every: 60,
            speed: None,
            pause_window: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub steps: usize,
    pub dropped: f64, // simulated time lost to the step cap
    pub sim_time: f64,
}

/// Per-frame state of the viewer, separated from the clock so it can be
/// driven by synthetic frame times
pub struct Viewer {
    engine: Engine,
    accumulator: Accumulator,
    console: ConsoleSink,
    recorder: Recorder,
    report_every: usize,
    pause_window: Option<(f64, f64)>,
    summary: RunSummary,
}

impl Viewer {
    pub fn new(scenario: Scenario, opts: &HeadlessOptions) -> Result<Self> {
        let mut accumulator = scenario.accumulator();
        if let Some(speed) = opts.speed {
            accumulator.set_speed(speed);
        }
        let console = ConsoleSink::new(scenario.units);
        let engine = scenario.into_engine()?;
        let recorder = Recorder::new(&engine, 1)?;

        Ok(Self {
            engine,
            accumulator,
            console,
            recorder,
            report_every: opts.report_every,
            pause_window: opts.pause_window,
            summary: RunSummary::default(),
        })
    }

    /// One frame at wall-clock second `wall`, `real_elapsed` seconds after the previous one
    pub fn frame(&mut self, wall: f64, real_elapsed: f64) -> Result<Advance> {
        if let Some((from, to)) = self.pause_window {
            let inside = wall >= from && wall < to;
            if inside != self.accumulator.is_paused() {
                self.accumulator.toggle_pause();
                info!(
                    "{} at t={:.3}",
                    if inside { "paused" } else { "resumed" },
                    self.engine.elapsed_time()
                );
            }
        }

        let advance = self.accumulator.advance(&mut self.engine, real_elapsed);

        self.summary.frames += 1;
        self.summary.steps += advance.steps;
        self.summary.dropped += advance.dropped;
        self.summary.sim_time = self.engine.elapsed_time();

        if self.report_every > 0 && self.summary.frames % self.report_every == 0 {
            let sample = self.recorder.sample_now(&self.engine);
            self.console.record(&sample)?;
        }

        Ok(advance)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}

/// Run `scenario` against the wall clock for `opts.duration`
pub fn run_headless(scenario: Scenario, opts: &HeadlessOptions) -> Result<RunSummary> {
    ensure!(opts.fps.is_finite() && opts.fps > 0.0, "fps must be positive, got {}", opts.fps);

    info!(
        "run_headless: {} bodies at {} fps for {:.1} s",
        scenario.system.bodies.len(),
        opts.fps,
        opts.duration.as_secs_f64()
    );

    let mut viewer = Viewer::new(scenario, opts)?;
    let frame_period = Duration::from_secs_f64(1.0 / opts.fps);

    let start = Instant::now();
    let mut last = start;
    while start.elapsed() < opts.duration {
        let next = last + frame_period;
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        }

        let now = Instant::now();
        let real_elapsed = now.duration_since(last).as_secs_f64();
        last = now;

        viewer.frame(now.duration_since(start).as_secs_f64(), real_elapsed)?;
    }

    let summary = viewer.summary();
    info!(
        "run_headless: {} frames, {} steps, t={:.4}, dropped {:.4}",
        summary.frames, summary.steps, summary.sim_time, summary.dropped
    );
    Ok(summary)
}
