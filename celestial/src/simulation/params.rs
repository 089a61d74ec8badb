//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the run-wide constants:
//! - integration step size in simulated seconds (`time_step`),
//! - rendering scale in pixels per metre (`distance_scale`),
//! - gravitational constant (`g`)
//!
//! Explicit Euler error grows with the step size. Keep `time_step` small
//! against the fastest orbital period in the system; nothing here adjusts
//! it automatically.

use crate::error::{SimError, SimResult};
use crate::simulation::states::G;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub time_step: f64,      // s per step
    pub distance_scale: f64, // px / m, rendering only
    pub g: f64,              // gravitational constant
}

impl Parameters {
    pub fn new(time_step: f64, distance_scale: f64) -> Self {
        Self {
            time_step,
            distance_scale,
            g: G,
        }
    }

    pub fn with_g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    /// A zero step is allowed and leaves the state untouched.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.time_step.is_finite() && self.time_step >= 0.0) {
            return Err(SimError::InvalidTimeStep(self.time_step));
        }
        if !(self.distance_scale.is_finite() && self.distance_scale > 0.0) {
            return Err(SimError::InvalidDistanceScale(self.distance_scale));
        }
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(SimError::InvalidGravitationalConstant(self.g));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        // one hour per step, one pixel per 1000 km
        Self::new(3600.0, 1.0e-6)
    }
}
