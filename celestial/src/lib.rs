pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, System, NVec2, Rgb, G};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::simulator::Simulator;
pub use simulation::scenario::Scenario;
pub use simulation::diagnostics::{
    center_of_mass, center_of_mass_velocity, kinetic_energy, potential_energy, total_energy,
    total_mass, total_momentum,
};

pub use configuration::config::{BodyConfig, DisplayConfig, ScenarioConfig, SimulationConfig};

pub use visualization::viewer2d::run_2d;
