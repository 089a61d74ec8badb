//! Acceleration contributors for the simulator
//!
//! Terms implement [`Acceleration`] and are summed by [`AccelSet`] into one
//! acceleration per body. Every term reads the same `&System` snapshot, so
//! no body can observe another body's post-step state.

use crate::error::SimResult;
use crate::simulation::states::{NVec2, System};

/// Ordered list of boxed acceleration terms. The simulator registers a
/// single [`NewtonianGravity`] term; the sum stops at the first term that
/// fails.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Append `term`; terms are summed in insertion order
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Fill `out[i]` with the net acceleration of body `i`.
    /// After an error `out` holds partial sums; discard it.
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) -> SimResult<()> {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`] snapshot.
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) -> SimResult<()>;
}

/// Unsoftened Newtonian gravity, direct n^2 sum.
///
/// Each body sums `acceleration_toward(other)` over every other body in
/// insertion order. Coincident bodies fail the whole evaluation.
pub struct NewtonianGravity {
    pub g: f64,
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) -> SimResult<()> {
        let bodies = &sys.bodies;

        for (i, (bi, ai)) in bodies.iter().zip(out.iter_mut()).enumerate() {
            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                *ai += bi.acceleration_toward(bj, self.g)?;
            }
        }
        Ok(())
    }
}
