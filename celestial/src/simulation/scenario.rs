//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the initialized `Simulator` (momentum already normalized)
//! - the viewer's `DisplayConfig`

use crate::configuration::config::{BodyConfig, DisplayConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2};

pub struct Scenario {
    pub simulator: Simulator,
    pub display: DisplayConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<SimResult<Vec<Body>>>()?;

        let s_cfg = cfg.simulation;
        let parameters = Parameters::new(s_cfg.time_step, s_cfg.distance_scale)
            .with_g(s_cfg.gravitational_constant);

        let simulator = Simulator::initialize(bodies, parameters)?;

        Ok(Self {
            simulator,
            display: cfg.display,
        })
    }
}

fn body_from_config(index: usize, bc: &BodyConfig) -> SimResult<Body> {
    let name = bc
        .name
        .clone()
        .unwrap_or_else(|| format!("body{index}"));

    let position = vec2(&name, "position", &bc.position)?;
    let velocity = vec2(&name, "velocity", &bc.velocity)?;

    Body::new(name, position, velocity, bc.radius, bc.mass, bc.color)
}

fn vec2(body: &str, field: &'static str, xs: &[f64]) -> SimResult<NVec2> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::BadVector {
            body: body.to_owned(),
            field,
            len: xs.len(),
        }),
    }
}
