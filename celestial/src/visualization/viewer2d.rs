use std::collections::VecDeque;

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;
use tracing::{error, info};

use crate::configuration::config::DisplayConfig;
use crate::simulation::scenario::Scenario;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::Rgb;

/// Component tagging each circle with its body index into the simulator
#[derive(Component)]
struct BodyIndex(pub usize);

/// Recent screen positions of one body, oldest first
#[derive(Component)]
struct Trail {
    points: VecDeque<Vec2>,
    color: Rgb,
}

#[derive(Resource)]
struct SimulationState {
    simulator: Simulator,
    halted: bool,
}

#[derive(Resource)]
struct DisplaySettings(DisplayConfig);

/// Open a window and run the scenario until it is closed or a step fails
pub fn run_2d(scenario: Scenario) -> AppExit {
    let Scenario { simulator, display } = scenario;

    let window = Window {
        title: display.title.clone(),
        resolution: WindowResolution::new(display.width, display.height),
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(to_color(display.background)))
        .insert_resource(Time::<Fixed>::from_hz(display.tick_rate))
        .insert_resource(SimulationState {
            simulator,
            halted: false,
        })
        .insert_resource(DisplaySettings(display))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, (physics_step_system, record_trails_system).chain())
        .add_systems(Update, (sync_transforms_system, draw_trails_system))
        .run()
}

fn to_color(c: Rgb) -> Color {
    let [r, g, b] = c.0;
    Color::srgb_u8(r, g, b)
}

fn setup_bodies_system(
    mut commands: Commands,
    state: Res<SimulationState>,
    display: Res<DisplaySettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let sim = &state.simulator;
    info!(bodies = sim.bodies().len(), "starting 2D viewer");

    commands.spawn(Camera2dBundle::default());

    for (i, body) in sim.bodies().enumerate() {
        let (x, y, r) = sim.to_screen(body);
        let radius_screen = (r as f32).max(display.0.min_radius_px);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(to_color(body.color()))),
                // later bodies drawn on top, as in insertion order
                transform: Transform::from_xyz(x as f32, y as f32, i as f32),
                ..default()
            },
            BodyIndex(i),
            Trail {
                points: VecDeque::with_capacity(display.0.trail_length),
                color: body.color(),
            },
        ));
    }
}

fn physics_step_system(mut state: ResMut<SimulationState>, mut exit: EventWriter<AppExit>) {
    if state.halted {
        return;
    }
    if let Err(e) = state.simulator.step() {
        error!(error = %e, steps = state.simulator.steps(), "simulation step failed");
        state.halted = true;
        exit.send(AppExit::error());
    }
}

fn record_trails_system(
    state: Res<SimulationState>,
    display: Res<DisplaySettings>,
    mut query: Query<(&BodyIndex, &mut Trail)>,
) {
    let cap = display.0.trail_length;
    if cap == 0 {
        return;
    }

    let sim = &state.simulator;
    for (BodyIndex(i), mut trail) in &mut query {
        if let Some(b) = sim.body(*i) {
            let (x, y, _) = sim.to_screen(b);
            trail.points.push_back(Vec2::new(x as f32, y as f32));
            while trail.points.len() > cap {
                trail.points.pop_front();
            }
        }
    }
}

fn sync_transforms_system(
    state: Res<SimulationState>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    let sim = &state.simulator;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sim.body(*i) {
            let (x, y, _) = sim.to_screen(b);
            transform.translation.x = x as f32;
            transform.translation.y = y as f32;
        }
    }
}

// Fade from transparent at the tail to the body colour at the head
fn draw_trails_system(mut gizmos: Gizmos, query: Query<&Trail>) {
    for trail in &query {
        let n = trail.points.len();
        if n < 2 {
            continue;
        }
        let [r, g, b] = trail.color.0;
        gizmos.linestrip_gradient_2d(trail.points.iter().enumerate().map(|(k, p)| {
            let alpha = ((k + 1) as f32 / n as f32 * 255.0) as u8;
            (*p, Color::srgba_u8(r, g, b, alpha))
        }));
    }
}
