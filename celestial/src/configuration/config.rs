//! YAML scenario files and their defaults.
//!
//! A scenario file names the bodies and, optionally, overrides the run and
//! viewer settings. Its sections map onto:
//!
//! - [`SimulationConfig`] – time step, rendering scale, gravitational constant
//! - [`DisplayConfig`]    – window, frame pacing and trail settings for the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – the whole file; `load` reads it from disk
//!
//! # YAML format
//! The Earth-Moon scenario shipped in `scenarios/earth_moon.yaml`:
//!
//! ```yaml
//! simulation:
//!   time_step: 3600.0          # seconds per step
//!   distance_scale: 1.0e-6     # pixels per metre
//!
//! display:
//!   width: 800
//!   height: 800
//!   tick_rate: 120             # steps per wall-clock second
//!   trail_length: 400          # 0 disables trails
//!
//! bodies:
//!   - name: Earth
//!     position: [0.0, 0.0]
//!     velocity: [0.0, 12.4412]
//!     radius: 6.378e6
//!     mass: 5.972e24
//!     color: [115, 186, 255]
//!   - name: Moon
//!     position: [3.844e8, 0.0]
//!     velocity: [0.0, -1.012e3]
//!     radius: 1.738e6
//!     mass: 7.342e22
//!     color: [180, 180, 180]
//! ```
//!
//! Every `simulation` and `display` key is optional.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::states::{Rgb, G};

/// Numerical parameters for the run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub time_step: f64,              // seconds advanced per step
    pub distance_scale: f64,         // pixels per metre, rendering only
    pub gravitational_constant: f64, // N m^2 / kg^2
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 3600.0,
            distance_scale: 1.0e-6,
            gravitational_constant: G,
        }
    }
}

/// Viewer settings. Not read by the physics.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub tick_rate: f64,      // fixed steps per second
    pub trail_length: usize, // samples per body, 0 = no trail
    pub background: Rgb,
    pub min_radius_px: f32, // keep tiny bodies visible
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Celestial Bodies".to_owned(),
            width: 800.0,
            height: 800.0,
            tick_rate: 120.0,
            trail_length: 400,
            background: Rgb::BLACK,
            min_radius_px: 1.0,
        }
    }
}

/// One body as written in the file; vectors are checked when the scenario is built
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub position: Vec<f64>, // metres
    pub velocity: Vec<f64>, // metres per second
    pub radius: f64,        // metres, drawing size only
    pub mass: f64,          // kilograms
    #[serde(default)]
    pub color: Rgb,
}

/// A parsed scenario file. Only `bodies` is required.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("invalid scenario yaml")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }
}
