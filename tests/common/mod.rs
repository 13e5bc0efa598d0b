//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `survival_shooter::game::configure_headless` to install gameplay plugins.
//! - virtual time advances a fixed 100 ms per `update`, so runs are deterministic.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::platform::collections::HashSet;
use std::time::Duration;
use survival_shooter::common::tunables::Tunables;
use survival_shooter::plugins::player::PlayerEntity;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app running with the given tunables.
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);

    survival_shooter::game::configure_headless(&mut app);

    // `App::run` would do this; plugins (avian's broad phase among them)
    // finish registering resources here.
    app.finish();
    app.cleanup();
    app
}

pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Game time seen by `Update` systems.
pub fn elapsed_secs(app: &App) -> f32 {
    app.world().resource::<Time<Virtual>>().elapsed_secs()
}

pub fn count<C: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut q = world.query::<&C>();
    q.iter(world).count()
}

pub fn entities<C: Component>(app: &mut App) -> HashSet<Entity> {
    let world = app.world_mut();
    let mut q = world.query_filtered::<Entity, With<C>>();
    q.iter(world).collect()
}

/// Copy of component `C` on the registered player, if it is still alive.
pub fn on_player<C: Component + Clone>(app: &App) -> Option<C> {
    let player = app.world().resource::<PlayerEntity>().get().ok()?;
    app.world().get::<C>(player).cloned()
}
