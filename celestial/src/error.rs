//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Precondition violations detected by the core.
///
/// None of these are retried: a degenerate configuration is reported and the
/// caller decides whether to stop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("body `{body}` has non-positive mass {mass}")]
    NonPositiveMass { body: String, mass: f64 },

    #[error("body `{body}` has non-positive radius {radius}")]
    NonPositiveRadius { body: String, radius: f64 },

    #[error("body `{body}` has a non-finite position or velocity")]
    NonFiniteState { body: String },

    #[error("bodies `{first}` and `{second}` occupy the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),

    #[error("distance scale must be finite and positive, got {0}")]
    InvalidDistanceScale(f64),

    #[error("gravitational constant must be finite and positive, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("simulation needs at least one body")]
    EmptySystem,

    #[error("body `{body}`: `{field}` must have 2 components, got {len}")]
    BadVector {
        body: String,
        field: &'static str,
        len: usize,
    },
}
