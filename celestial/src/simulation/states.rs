//! Core state types for the simulation.
//!
//! - `Body`   : one point mass with its rendering attributes
//! - `System` : the ordered collection of bodies plus elapsed time `t`
//! - `Rgb`    : opaque display colour handed to the renderer
//!
//! Kinematic fields are private. Only the integrator and the simulator
//! (inside this crate) write position and velocity; everything outside
//! reads through the accessors.

use nalgebra::Vector2;
use serde::Deserialize;

use crate::error::{SimError, SimResult};

pub type NVec2 = Vector2<f64>;

/// Newtonian gravitational constant, N m^2 / kg^2
pub const G: f64 = 6.674e-11;

/// 8-bit RGB colour used only by the viewer
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLUE: Rgb = Rgb([115, 186, 255]);
    pub const GREY: Rgb = Rgb([180, 180, 180]);
    pub const ORANGE: Rgb = Rgb([255, 100, 0]);
    pub const PURPLE: Rgb = Rgb([255, 0, 150]);
    pub const GREEN: Rgb = Rgb([0, 255, 50]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    x: NVec2,    // position, m
    v: NVec2,    // velocity, m/s
    m: f64,      // mass, kg
    radius: f64, // m, rendering only
    color: Rgb,
}

impl Body {
    /// Build a body, rejecting non-positive mass or radius and non-finite state
    pub fn new(
        name: impl Into<String>,
        position: NVec2,
        velocity: NVec2,
        radius: f64,
        mass: f64,
        color: Rgb,
    ) -> SimResult<Self> {
        let name = name.into();

        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass { body: name, mass });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::NonPositiveRadius { body: name, radius });
        }
        if !(position.iter().all(|c| c.is_finite()) && velocity.iter().all(|c| c.is_finite())) {
            return Err(SimError::NonFiniteState { body: name });
        }

        Ok(Self {
            name,
            x: position,
            v: velocity,
            m: mass,
            radius,
            color,
        })
    }

    /// Gravitational acceleration this body feels from `other`:
    /// `g * m_other / |r|^2` along the unit vector `r / |r|`, with
    /// `r = other.x - self.x`.
    ///
    /// A separation too small to give a finite result (including one whose
    /// square underflows to zero) counts as coincident: never NaN or Inf.
    pub fn acceleration_toward(&self, other: &Body, g: f64) -> SimResult<NVec2> {
        let r = other.x - self.x;
        let r2 = r.norm_squared();

        let coincident = || SimError::CoincidentBodies {
            first: self.name.clone(),
            second: other.name.clone(),
        };

        if r2 == 0.0 {
            return Err(coincident());
        }

        let dist = r2.sqrt();
        let accel = g * other.m / r2;
        let a = r * (accel / dist);

        if !(accel.is_finite() && a.iter().all(|c| c.is_finite())) {
            return Err(coincident());
        }
        Ok(a)
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub(crate) fn set_position(&mut self, x: NVec2) {
        self.x = x;
    }

    pub(crate) fn set_velocity(&mut self, v: NVec2) {
        self.v = v;
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub(crate) bodies: Vec<Body>, // insertion order is summation order
    pub(crate) t: f64,            // elapsed simulated time, s
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.t
    }
}
