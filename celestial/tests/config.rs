use celestial::configuration::config::{DisplayConfig, ScenarioConfig, SimulationConfig};
use celestial::simulation::diagnostics::total_momentum;
use celestial::simulation::scenario::Scenario;
use celestial::simulation::states::{Rgb, G};
use celestial::SimError;

use std::path::PathBuf;

fn scenario_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

const MINIMAL: &str = r#"
bodies:
  - position: [0.0, 0.0]
    velocity: [0.0, 1.0]
    radius: 1.0
    mass: 10.0
  - name: moonlet
    position: [100.0, 0.0]
    velocity: [0.0, -1.0]
    radius: 0.5
    mass: 1.0
    color: [1, 2, 3]
"#;

#[test]
fn missing_sections_use_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(MINIMAL).unwrap();

    assert_eq!(cfg.simulation, SimulationConfig::default());
    assert_eq!(cfg.display, DisplayConfig::default());
    assert_eq!(cfg.simulation.gravitational_constant, G);
    assert_eq!(cfg.display.title, "Celestial Bodies");
    assert_eq!(cfg.bodies[0].color, Rgb::WHITE);
    assert_eq!(cfg.bodies[1].color, Rgb([1, 2, 3]));
}

#[test]
fn partial_sections_keep_other_defaults() {
    let yaml = format!(
        "simulation:\n  time_step: 60.0\ndisplay:\n  trail_length: 0\n{}",
        MINIMAL.trim_start()
    );
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();

    assert_eq!(cfg.simulation.time_step, 60.0);
    assert_eq!(cfg.simulation.distance_scale, 1.0e-6);
    assert_eq!(cfg.display.trail_length, 0);
    assert_eq!(cfg.display.tick_rate, 120.0);
}

#[test]
fn unnamed_bodies_get_index_names() {
    let cfg = ScenarioConfig::from_yaml_str(MINIMAL).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    let names: Vec<&str> = scenario.simulator.bodies().map(|b| b.name()).collect();
    assert_eq!(names, ["body0", "moonlet"]);
}

#[test]
fn missing_bodies_is_a_parse_error() {
    assert!(ScenarioConfig::from_yaml_str("simulation:\n  time_step: 1.0\n").is_err());
}

#[test]
fn three_component_vector_is_rejected() {
    let yaml = MINIMAL.replace("position: [100.0, 0.0]", "position: [100.0, 0.0, 5.0]");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();

    let err = Scenario::build_scenario(cfg).err().unwrap();
    assert_eq!(
        err,
        SimError::BadVector {
            body: "moonlet".into(),
            field: "position",
            len: 3
        }
    );
}

#[test]
fn negative_mass_is_rejected() {
    let yaml = MINIMAL.replace("mass: 1.0", "mass: -1.0");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();

    let err = Scenario::build_scenario(cfg).err().unwrap();
    assert!(matches!(err, SimError::NonPositiveMass { .. }));
}

#[test]
fn shipped_earth_moon_scenario_builds() {
    let cfg = ScenarioConfig::load(&scenario_file("earth_moon.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();
    let sim = &scenario.simulator;

    assert_eq!(sim.bodies().len(), 2);
    assert_eq!(sim.time_step(), 3600.0);
    assert_eq!(sim.distance_scale(), 1.0e-6);
    assert_eq!(scenario.display.width, 800.0);
    assert_eq!(sim.body(0).unwrap().color(), Rgb::BLUE);
    assert!(total_momentum(sim.system()).norm() < 1e-12 * 1.5e26);
}

#[test]
fn shipped_five_body_scenario_builds_and_steps() {
    let cfg = ScenarioConfig::load(&scenario_file("five_bodies.yaml")).unwrap();
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    let colors: Vec<Rgb> = scenario.simulator.bodies().map(|b| b.color()).collect();
    assert_eq!(
        colors,
        [Rgb::BLUE, Rgb::GREY, Rgb::ORANGE, Rgb::PURPLE, Rgb::GREEN]
    );
    scenario.simulator.advance(48).unwrap();
    assert!(scenario
        .simulator
        .bodies()
        .all(|b| b.position().iter().all(|c| c.is_finite())));
}

#[test]
fn missing_file_is_reported() {
    assert!(ScenarioConfig::load(&scenario_file("does_not_exist.yaml")).is_err());
}
