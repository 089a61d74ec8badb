use celestial::{run_2d, total_energy, total_momentum, Scenario, ScenarioConfig};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless the path exists
    #[arg(short, long, default_value = "earth_moon.yaml")]
    file_name: String,

    /// Integrate without opening a window
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run (656 one-hour steps ~ one lunar month)
    #[arg(long, default_value_t = 656)]
    steps: u64,

    /// Log diagnostics every N steps in a headless run, 0 to disable
    #[arg(long, default_value_t = 24)]
    report_every: u64,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name)
}

fn run_headless(mut scenario: Scenario, steps: u64, report_every: u64) -> Result<()> {
    let sim = &mut scenario.simulator;
    let g = sim.parameters().g;
    let e0 = total_energy(sim.system(), g)?;

    for _ in 0..steps {
        sim.step()?;

        if report_every > 0 && sim.steps() % report_every == 0 {
            let e = total_energy(sim.system(), g)?;
            info!(
                step = sim.steps(),
                days = sim.elapsed() / SECONDS_PER_DAY,
                momentum = total_momentum(sim.system()).norm(),
                energy = e,
                drift = ((e - e0) / e0).abs(),
                "progress"
            );
        }
    }

    for b in sim.bodies() {
        let x = b.position();
        let v = b.velocity();
        info!(body = b.name(), x = x.x, y = x.y, vx = v.x, vy = v.y, "final state");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // the viewer installs its own subscriber through Bevy's LogPlugin
    if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let scenario_cfg = ScenarioConfig::load(&scenario_path(&args.file_name))?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        return run_headless(scenario, args.steps, args.report_every);
    }

    if run_2d(scenario).is_error() {
        bail!("viewer stopped after a failed simulation step");
    }
    Ok(())
}
