use orbitsim::{Scenario, ScenarioConfig, Preset, Recorder, ConsoleSink, CsvSink, SampleSink, HeadlessOptions};
use orbitsim::{run_headless, bench_step, bench_accumulator, bench_step_curve};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Fixed-step orbit simulator")]
struct Args {
    /// Scenario YAML, looked up as given and then under `scenarios/`
    #[arg(short, long, conflicts_with = "preset")]
    file: Option<String>,

    /// Built-in scenario
    #[arg(short, long, value_enum, default_value = "circular")]
    preset: Preset,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step and print the tracked body to the console
    Run {
        /// Number of steps, runs until interrupted when omitted
        #[arg(short, long)]
        steps: Option<usize>,
        /// Print every N steps
        #[arg(short = 'i', long, default_value_t = 1000)]
        print_interval: usize,
    },
    /// Step and write every N-th sample to a CSV file
    Log {
        #[arg(short, long, default_value_t = 100_000)]
        steps: usize,
        #[arg(short, long, default_value_t = 10)]
        interval: usize,
        #[arg(short, long, default_value = "orbit_data.csv")]
        output: PathBuf,
    },
    /// Drive the simulation from the wall clock
    Realtime {
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
        /// Wall-clock seconds to run
        #[arg(long, default_value_t = 10.0)]
        seconds: f64,
        /// Simulated time per real second, overrides the scenario
        #[arg(long)]
        speed: Option<f64>,
        /// Frames between position reports
        #[arg(long, default_value_t = 60)]
        report_every: usize,
        /// Pause between these wall-clock seconds, e.g. `--pause 2 4`
        #[arg(long, num_args = 2)]
        pause: Option<Vec<f64>>,
    },
    /// Time engine steps and accumulator frames
    Bench {
        #[arg(short, long, default_value_t = 100_000)]
        steps: usize,
    },
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let Some(file_name) = &args.file else {
        info!("using preset {:?}", args.preset);
        return Ok(Scenario::from_preset(args.preset));
    };

    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    info!("loading scenario {}", config_path.display());

    let scenario_cfg = ScenarioConfig::load(&config_path)?;
    Scenario::build_scenario(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;

    match args.command {
        Command::Run { steps, print_interval } => {
            let mut console = ConsoleSink::new(scenario.units);
            let mut engine = scenario.into_engine()?;
            let recorder = Recorder::new(&engine, print_interval.max(1))?;

            console.record(&recorder.sample_now(&engine))?;
            match steps {
                Some(n) => {
                    recorder.run(&mut engine, n, &mut console)?;
                }
                None => loop {
                    engine.step_n(recorder.interval);
                    console.record(&recorder.sample_now(&engine))?;
                },
            }
            info!("stopped at t={:.4}", engine.elapsed_time());
        }
        Command::Log { steps, interval, output } => {
            let mut engine = scenario.into_engine()?;
            let recorder = Recorder::new(&engine, interval)?;
            let mut sink = CsvSink::create(&output)?;
            let written = recorder.run(&mut engine, steps, &mut sink)?;
            info!("logged {} data points to '{}'", written, output.display());
        }
        Command::Realtime { fps, seconds, speed, report_every, pause } => {
            let opts = HeadlessOptions {
                fps,
                duration: HeadlessOptions::duration_from_secs(seconds)?,
                report_every,
                speed,
                pause_window: pause.map(|w| (w[0], w[1])),
            };
            run_headless(scenario, &opts)?;
        }
        Command::Bench { steps } => {
            bench_step(scenario.clone(), steps)?;
            bench_accumulator(scenario, 600, 1.0 / 60.0)?;
            bench_step_curve(steps.min(10_000))?;
        }
    }

    Ok(())
}
