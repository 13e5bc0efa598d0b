//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_demo`: headless runner + logging + autopilot, used by `cargo run`.
//! - `configure_headless`: gameplay only, for integration tests.

use bevy::app::ScheduleRunnerPlugin;
use bevy::asset::AssetPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use crate::common::state::GameState;
use crate::plugins;

const TICK_HZ: f64 = 60.0;

pub fn run() {
    App::new().add_plugins(configure_demo).run();
}

/// Headless survival run: the autopilot plays until the player dies.
pub fn configure_demo(app: &mut App) {
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / TICK_HZ,
        ))),
        LogPlugin::default(),
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    configure_game(app);
    plugins::player::autopilot::plugin(app);
    app.add_systems(OnEnter(GameState::GameOver), exit_on_game_over);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - The caller provides the runtime plugins (`MinimalPlugins`, `StatesPlugin`, ...).
/// - No input source is installed; tests write `PlayerInput` themselves.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by the demo and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}

fn exit_on_game_over(mut exit: MessageWriter<AppExit>) {
    exit.write(AppExit::Success);
}
