pub mod simulation;
pub mod configuration;
pub mod output;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{gravitational_acceleration, circular_orbit_speed, escape_speed, MIN_SEPARATION};
pub use simulation::integrator::symplectic_euler;
pub use simulation::engine::Engine;
pub use simulation::scheduler::{Accumulator, Advance, MIN_SPEED_MULTIPLIER};
pub use simulation::sampler::{Recorder, Sample, SampleSink};
pub use simulation::scenario::{Scenario, Preset, PLANETS};

pub use configuration::config::{ScenarioConfig, ParametersConfig, RealtimeConfig, BodyConfig};

pub use output::{console::ConsoleSink, csv_log::CsvSink, units::UnitSystem};

pub use visualization::headless::{run_headless, HeadlessOptions, RunSummary, Viewer};

pub use benchmark::benchmark::{bench_step, bench_accumulator, bench_step_curve};
