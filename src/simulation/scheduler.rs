//! Real-time scheduler (fixed-timestep accumulator)
//!
//! Turns variable-length external ticks (frame times, wall clock) into a
//! whole number of fixed engine steps. Real time is scaled by the speed
//! multiplier and collected in `unconsumed`; every full `dt` in there
//! becomes one `Engine::step`, the sub-step remainder carries over.
//!
//! Without a step cap, a caller that keeps feeding more simulated time than
//! it can afford to step will see `unconsumed` grow without bound. Setting
//! `max_steps` turns that backlog into dropped time instead.

use log::warn;

use super::engine::Engine;

/// Speed multipliers are clamped to at least this value
pub const MIN_SPEED_MULTIPLIER: f64 = 1e-3;

/// Outcome of one [`Accumulator::advance`] call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Advance {
    pub steps: usize, // engine steps executed
    pub dropped: f64, // simulated time discarded by the step cap
}

#[derive(Debug, Clone)]
pub struct Accumulator {
    unconsumed: f64, // simulated time collected but not yet stepped
    speed: f64, // simulated time per unit of real time
    paused: bool,
    max_steps: Option<usize>, // per-advance cap, None = uncapped
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Accumulator {
    /// Non-finite `speed` falls back to 1.0, anything else is floored
    pub fn new(speed: f64) -> Self {
        let mut acc = Self {
            unconsumed: 0.0,
            speed: 1.0,
            paused: false,
            max_steps: None,
        };
        acc.set_speed(speed);
        acc
    }

    /// A cap of 0 is raised to 1 so every tick can make progress
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps.map(|cap| cap.max(1));
        self
    }

    /// Feed `real_elapsed` of external time and run the engine steps it pays for.
    ///
    /// While paused nothing changes: the tick is dropped and the carried
    /// remainder is kept for when the loop resumes. Negative or non-finite
    /// ticks count as zero.
    pub fn advance(&mut self, engine: &mut Engine, real_elapsed: f64) -> Advance {
        if self.paused {
            return Advance::default();
        }

        let real_elapsed = if real_elapsed.is_finite() { real_elapsed.max(0.0) } else { 0.0 };
        self.unconsumed += real_elapsed * self.speed;

        let dt = engine.timestep();
        let mut report = Advance::default();

        while self.unconsumed >= dt {
            if self.max_steps.is_some_and(|cap| report.steps >= cap) {
                // Keep only the sub-step remainder, drop the whole-step debt.
                // The remainder is approximate: rounding may leave it just
                // under dt or clamp it to 0. `dropped` is taken from the
                // actual difference, so the time accounting stays exact.
                let before = self.unconsumed;
                self.unconsumed = (before - (before / dt).floor() * dt).max(0.0);
                report.dropped = before - self.unconsumed;
                warn!(
                    "accumulator: step cap of {} reached, dropped {:.6} simulated time",
                    report.steps, report.dropped
                );
                break;
            }
            engine.step();
            self.unconsumed -= dt;
            report.steps += 1;
        }

        report
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Forget the carried remainder, e.g. when the scenario is reset
    pub fn reset(&mut self) {
        self.unconsumed = 0.0;
    }

    pub fn unconsumed(&self) -> f64 {
        self.unconsumed
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Takes effect from the next `advance`; already consumed steps are untouched
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_finite() {
            speed.max(MIN_SPEED_MULTIPLIER)
        } else {
            self.speed
        };
    }

    pub fn scale_speed(&mut self, factor: f64) {
        self.set_speed(self.speed * factor);
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }
}
