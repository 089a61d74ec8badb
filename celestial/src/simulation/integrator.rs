//! Fixed-step time integrator for the system
//!
//! Explicit Euler with a staged commit: velocities are advanced from the
//! accelerations of the pre-step snapshot, positions from the new
//! velocities, and nothing is written back until every body's candidate
//! state exists.

use tracing::debug;

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};
use crate::error::{SimError, SimResult};

/// Advance the system by one step of `params.time_step`.
///
/// 1. a_i   = sum of accelerations from the frozen positions x_n
/// 2. v_n+1 = v_n + dt * a_i
/// 3. x_n+1 = x_n + dt * v_n+1   (staged)
/// 4. commit all v_n+1, x_n+1 and advance `sys.t`
///
/// If the acceleration pass fails, or any staged velocity or position is
/// not finite, `sys` is left exactly as it was.
pub fn euler_integrator(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
) -> SimResult<()> {
    let n = sys.bodies.len();
    if n == 0 {
        return Ok(());
    }

    let dt = params.time_step;

    // Read phase: only shared access to the system here
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut accels)?;

    // Stage new velocities and candidate positions side by side with the bodies
    let staged: Vec<(NVec2, NVec2)> = sys
        .bodies
        .iter()
        .zip(accels.iter())
        .map(|(b, a)| {
            let v = b.velocity() + *a * dt;
            let x = b.position() + v * dt;
            (v, x)
        })
        .collect();

    let finite = |u: &NVec2| u.iter().all(|c| c.is_finite());
    if let Some(b) = sys
        .bodies
        .iter()
        .zip(&staged)
        .find_map(|(b, (v, x))| (!(finite(v) && finite(x))).then_some(b))
    {
        return Err(SimError::NonFiniteState {
            body: b.name().to_owned(),
        });
    }

    // Commit phase: each body owns exactly one slot, order is irrelevant
    for (b, (v, x)) in sys.bodies.iter_mut().zip(staged) {
        b.set_velocity(v);
        b.set_position(x);
    }

    sys.t += dt;
    debug!(t = sys.t, bodies = n, "euler step committed");

    Ok(())
}
