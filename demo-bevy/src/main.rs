use bevy::prelude::*;
use forest_fire_core::{CellState, ForestFireSimulation, SimulationConfig};

// Constants
const CELL_SIZE: f32 = 20.0; // each cell is 20x20 pixels
const TREE_COLOR: Color = Color::rgb(0.13, 0.55, 0.13);
const FIRE_COLOR: Color = Color::rgb(0.87, 0.10, 0.08);
const ASH_COLOR: Color = Color::rgb(0.50, 0.50, 0.50);
const STEP_SECONDS: f32 = 0.5;

fn main() {
    let config = SimulationConfig::load("config.toml");
    let window_width = (config.width as f32 * CELL_SIZE).max(400.0);
    let window_height = (config.height as f32 * CELL_SIZE).max(300.0);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Forest Fire Simulation".to_string(),
                resolution: (window_width, window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(SimulationState::new(config))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (handle_keyboard, update_simulation, update_cell_colors).chain(),
        )
        .run();
}

#[derive(Resource)]
struct SimulationState {
    config: SimulationConfig,
    simulation: ForestFireSimulation,
    step_timer: Timer,
    paused: bool,
    finished: bool,
}

impl SimulationState {
    fn new(config: SimulationConfig) -> Self {
        let simulation = ForestFireSimulation::new(&config);
        Self {
            config,
            simulation,
            step_timer: Timer::from_seconds(STEP_SECONDS, TimerMode::Repeating),
            paused: false,
            finished: false,
        }
    }
}

// Component tying a sprite to its grid cell
#[derive(Component)]
struct CellSprite {
    row: usize,
    col: usize,
}

fn setup(mut commands: Commands, state: Res<SimulationState>) {
    commands.spawn(Camera2dBundle::default());

    let grid = state.simulation.grid();
    let grid_width = grid.width() as f32 * CELL_SIZE;
    let grid_height = grid.height() as f32 * CELL_SIZE;

    for (row, col, cell_state) in grid.cells() {
        let x = (col as f32 + 0.5) * CELL_SIZE - grid_width / 2.0;
        let y = grid_height / 2.0 - (row as f32 + 0.5) * CELL_SIZE;

        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: cell_color(cell_state),
                    custom_size: Some(Vec2::splat(CELL_SIZE - 1.0)),
                    ..default()
                },
                transform: Transform::from_xyz(x, y, 0.0),
                ..default()
            },
            CellSprite { row, col },
        ));
    }

    println!("=== Forest Fire Simulation ===");
    println!("Controls:");
    println!("  Space: Pause/Resume");
    println!("  R: Reset simulation");
}

fn handle_keyboard(mut state: ResMut<SimulationState>, keyboard: Res<Input<KeyCode>>) {
    if keyboard.just_pressed(KeyCode::Space) {
        state.paused = !state.paused;
        println!(
            "Simulation {}",
            if state.paused { "paused" } else { "resumed" }
        );
    }

    if keyboard.just_pressed(KeyCode::R) {
        let config = state.config.clone();
        state.simulation = ForestFireSimulation::new(&config);
        state.finished = false;
        state.step_timer.reset();
        println!("Simulation reset");
    }
}

fn update_simulation(mut state: ResMut<SimulationState>, time: Res<Time>) {
    if state.paused || state.finished {
        return;
    }

    state.step_timer.tick(time.delta());
    if !state.step_timer.just_finished() {
        return;
    }

    state.simulation.step();

    if state.simulation.no_fire_remaining() {
        state.finished = true;
        let stats = state.simulation.stats();
        println!("Simulation ended.");
        println!("Steps elapsed: {}", stats.steps_elapsed);
        println!("Cells turned to ash: {}", stats.ash_cells);
    }
}

fn update_cell_colors(
    state: Res<SimulationState>,
    mut cells: Query<(&CellSprite, &mut Sprite)>,
) {
    let grid = state.simulation.grid();
    for (cell, mut sprite) in &mut cells {
        let color = match grid.cell_at(cell.row as i32, cell.col as i32) {
            Some(cell_state) => cell_color(cell_state),
            None => continue,
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}

fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Tree => TREE_COLOR,
        CellState::Fire => FIRE_COLOR,
        CellState::Ash => ASH_COLOR,
    }
}
