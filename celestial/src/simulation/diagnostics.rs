//! Conserved-quantity diagnostics
//!
//! Used by tests and by the headless runner to watch integration drift.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{NVec2, System};

/// Sum of `m_i * v_i`
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
}

pub fn total_mass(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| b.mass()).sum()
}

/// Mass-weighted mean position, `None` for an empty system
pub fn center_of_mass(sys: &System) -> Option<NVec2> {
    let m = total_mass(sys);
    if m <= 0.0 {
        return None;
    }
    let weighted = sys
        .bodies
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.position() * b.mass());
    Some(weighted / m)
}

/// Velocity of the centre of mass, `None` for an empty system
pub fn center_of_mass_velocity(sys: &System) -> Option<NVec2> {
    let m = total_mass(sys);
    if m <= 0.0 {
        return None;
    }
    Some(total_momentum(sys) / m)
}

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity().norm_squared())
        .sum()
}

/// Pairwise `-g m_i m_j / r_ij`, each unordered pair once
pub fn potential_energy(sys: &System, g: f64) -> SimResult<f64> {
    let bodies = &sys.bodies;
    let mut u = 0.0;

    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let r = (bj.position() - bi.position()).norm();
            if r == 0.0 {
                return Err(SimError::CoincidentBodies {
                    first: bi.name().to_owned(),
                    second: bj.name().to_owned(),
                });
            }
            u -= g * bi.mass() * bj.mass() / r;
        }
    }
    Ok(u)
}

pub fn total_energy(sys: &System, g: f64) -> SimResult<f64> {
    Ok(kinetic_energy(sys) + potential_energy(sys, g)?)
}
