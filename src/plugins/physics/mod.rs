//! Physics backend: avian2d configured for a top-down arena.
//!
//! No gravity, lengths scaled by `Tunables::pixels_per_meter`. The simulation
//! freezes when the run ends so the final positions stay inspectable.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm))
        .insert_resource(Gravity::ZERO)
        .add_systems(OnEnter(GameState::InGame), resume_simulation)
        .add_systems(OnEnter(GameState::GameOver), freeze_simulation);
}

fn freeze_simulation(mut time: ResMut<Time<Physics>>) {
    time.pause();
    info!("Run over; physics paused");
}

fn resume_simulation(mut time: ResMut<Time<Physics>>) {
    if time.is_paused() {
        time.unpause();
    }
}
