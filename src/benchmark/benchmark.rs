use std::time::Instant;

use anyhow::Result;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};

/// Time `steps` raw engine steps on `scenario`
/// Returns seconds per step
pub fn bench_step(scenario: Scenario, steps: usize) -> Result<f64> {
    let n = scenario.system.bodies.len();
    let mut engine = scenario.into_engine()?;

    // Warm up
    engine.step_n(steps.min(100));

    let t0 = Instant::now();
    engine.step_n(steps);
    let per_step = t0.elapsed().as_secs_f64() / steps.max(1) as f64;

    println!(
        "N = {:3}, steps = {:8}, step = {:10.3} ns, t = {:.4}",
        n,
        steps,
        per_step * 1e9,
        engine.elapsed_time()
    );

    Ok(per_step)
}

/// Drive the accumulator with `frames` ticks of `frame_dt` seconds each,
/// as a renderer at 1 / `frame_dt` fps would
/// Returns seconds per frame
pub fn bench_accumulator(scenario: Scenario, frames: usize, frame_dt: f64) -> Result<f64> {
    let mut accumulator = scenario.accumulator();
    let mut engine = scenario.into_engine()?;

    let mut steps = 0;
    let mut dropped = 0.0;

    let t0 = Instant::now();
    for _ in 0..frames {
        let advance = accumulator.advance(&mut engine, frame_dt);
        steps += advance.steps;
        dropped += advance.dropped;
    }
    let per_frame = t0.elapsed().as_secs_f64() / frames.max(1) as f64;

    println!(
        "frames = {:6}, speed = {}, steps = {:8} ({:.1}/frame), frame = {:10.3} us, dropped = {:.4}",
        frames,
        accumulator.speed(),
        steps,
        steps as f64 / frames.max(1) as f64,
        per_frame * 1e6,
        dropped
    );

    Ok(per_frame)
}

/// Step cost against number of orbiting bodies
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve(steps: usize) -> Result<()> {
    println!("N,ns_per_step");

    for n in (0..=12).map(|k| 1usize << k) {
        // deterministic ring of planets around a unit mass
        let mut bodies = vec![Body::new(NVec2::zeros(), NVec2::zeros(), 1.0)];
        for i in 0..n {
            let i_f = i as f64;
            let r = 1.0 + 0.01 * i_f;
            let (sin, cos) = (i_f * 0.37).sin_cos();
            bodies.push(Body::new(r * NVec2::new(cos, sin), NVec2::new(-sin, cos) / r.sqrt(), 1e-6));
        }

        let mut engine = Engine::new(System::new(bodies), Parameters::new(1.0, 1e-3))?;

        let t0 = Instant::now();
        engine.step_n(steps);
        let ns = t0.elapsed().as_secs_f64() * 1e9 / steps.max(1) as f64;

        println!("{},{:.3}", n, ns);
    }

    Ok(())
}
