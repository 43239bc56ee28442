//! Fixed-step time integrator for the single-source system
//!
//! Semi-implicit (symplectic) Euler driven by the force law in
//! [`super::forces`] and the fixed settings in [`Parameters`]

use super::forces::gravitational_acceleration;
use super::params::Parameters;
use super::states::System;

/// Advance the system by one step of semi-implicit Euler.
///
/// The body at `params.source` is the fixed attractor and is never moved by
/// gravity. Every other body, in sequence order, gets
/// - kick: v_n+1 = v_n + dt * a(x_n)
/// - drift: x_n+1 = x_n + dt * v_n+1
///
/// Using the fresh velocity for the drift is what keeps bound orbits from
/// spiralling outward as they do under explicit Euler.
pub fn symplectic_euler(sys: &mut System, params: &Parameters) {
    let dt = params.dt;
    let src = params.source;

    // Copy of the attractor; bodies only ever read it
    let source = sys.bodies[src].clone();

    for (i, b) in sys.bodies.iter_mut().enumerate() {
        if i == src {
            continue;
        }
        let a = gravitational_acceleration(b, &source, params.G);
        b.apply_acceleration(a, dt);
        b.advance_position(dt);
    }

    // t_n+1 = t_n + dt
    sys.t += dt;
}
