//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod spawner;
pub mod world;

/// Register gameplay plugins. All of them run headless.
///
/// `core` goes first: the others read `Tunables` while building.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    combat::plugin(app);
    spawner::plugin(app);
    enemies::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}
