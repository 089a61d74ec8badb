//! Runtime simulator: owns the bodies, the force set and the parameters.
//!
//! Lifecycle is two-phase and not repeatable:
//! - [`Simulator::initialize`] validates the configuration and removes the
//!   centre-of-mass velocity once, so the system does not drift off-frame
//! - [`Simulator::step`] advances everything by one fixed `time_step`
//!
//! Readers (the viewer) only see state between `step` calls.

use tracing::{debug, info};

use crate::error::{SimError, SimResult};
use crate::simulation::diagnostics::{center_of_mass_velocity, total_momentum};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

pub struct Simulator {
    system: System,
    forces: AccelSet,
    params: Parameters,
    steps: u64,
}

impl Simulator {
    /// Build the simulation state and normalize momentum.
    ///
    /// Fails on an empty body list, invalid parameters, or two bodies that
    /// are already too close to attract each other finitely.
    pub fn initialize(bodies: Vec<Body>, params: Parameters) -> SimResult<Self> {
        params.validate()?;
        if bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }
        check_distinct_positions(&bodies, params.g)?;

        let forces = AccelSet::new().with(NewtonianGravity { g: params.g });

        let mut sim = Self {
            system: System::new(bodies),
            forces,
            params,
            steps: 0,
        };
        let removed = sim.normalize_momentum();

        info!(
            bodies = sim.system.len(),
            time_step = params.time_step,
            vx = removed.x,
            vy = removed.y,
            "simulation initialized, centre-of-mass velocity removed"
        );

        Ok(sim)
    }

    /// Subtract the centre-of-mass velocity from every body.
    /// Returns the velocity that was removed.
    fn normalize_momentum(&mut self) -> NVec2 {
        let Some(v_com) = center_of_mass_velocity(&self.system) else {
            return NVec2::zeros();
        };

        for b in self.system.bodies.iter_mut() {
            let v = b.velocity() - v_com;
            b.set_velocity(v);
        }

        debug!(residual = total_momentum(&self.system).norm(), "momentum normalized");
        v_com
    }

    /// Advance every body by exactly one `time_step`.
    ///
    /// On error (coincident bodies) no body is modified.
    pub fn step(&mut self) -> SimResult<()> {
        euler_integrator(&mut self.system, &self.forces, &self.params)?;
        self.steps += 1;
        Ok(())
    }

    /// Run `n` steps, stopping at the first failure
    pub fn advance(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Read-only view of the bodies in insertion order
    pub fn bodies(&self) -> impl ExactSizeIterator<Item = &Body> {
        self.system.bodies.iter()
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn time_step(&self) -> f64 {
        self.params.time_step
    }

    pub fn distance_scale(&self) -> f64 {
        self.params.distance_scale
    }

    /// Simulated seconds since initialization
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Screen-space `(x, y, radius)` for a body, origin at the frame centre
    pub fn to_screen(&self, body: &Body) -> (f64, f64, f64) {
        let s = self.params.distance_scale;
        let p = body.position() * s;
        (p.x, p.y, body.radius() * s)
    }
}

// Same test the step applies, so initialize and step agree on coincidence
fn check_distinct_positions(bodies: &[Body], g: f64) -> SimResult<()> {
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            a.acceleration_toward(b, g)?;
            b.acceleration_toward(a, g)?;
        }
    }
    Ok(())
}
