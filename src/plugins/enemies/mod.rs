//! Enemies plugin: hostile creation, pursuit and locomotion.
//!
//! ```text
//! Update:      SpawnHostileRequest -> spawn_hostiles -> pursue_player (Seek directive)
//! FixedUpdate: steer_towards_destination (Seek -> LinearVelocity)
//! ```
//!
//! Death is not handled here. The combat plugin marks dead hostiles
//! `PendingDespawn` and clears their collision filters; every system below
//! filters them out.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::combat::contact::ContactKind;
use crate::plugins::combat::health::Health;
use crate::plugins::player::PlayerEntity;
use crate::plugins::spawner::{tick_spawners, SpawnHostileRequest};

pub mod pursuit;

use pursuit::{Pursuit, Seek};

/// Hostile entity with a non-owning player reference.
///
/// The reference is copied from `PlayerEntity` at creation and drives both
/// pursuit and kill attribution. It may outlive the player.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Hostile {
    pub player: Option<Entity>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            spawn_hostiles.after(tick_spawners),
            pursuit::pursue_player.after(spawn_hostiles),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        pursuit::steer_towards_destination.run_if(in_state(GameState::InGame)),
    );
}

/// Consumer: one hostile per request, linked to the registered player.
pub fn spawn_hostiles(
    mut commands: Commands,
    tunables: Res<Tunables>,
    registry: Res<PlayerEntity>,
    mut reader: MessageReader<SpawnHostileRequest>,
) {
    let layers = CollisionLayers::new(
        Layer::Enemy,
        [Layer::World, Layer::Player, Layer::PlayerBullet, Layer::Enemy],
    );

    for req in reader.read() {
        let player = match registry.get() {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("Hostile spawned at {} will stay inert: {e}", req.position);
                None
            }
        };

        commands.spawn((
            Name::new("Hostile"),
            Hostile { player },
            ContactKind::Hostile,
            Health::new(tunables.hostile_max_health),
            Pursuit::default(),
            Seek::new(tunables.hostile_speed),
            Transform::from_translation(req.position.extend(1.0)),
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            Collider::circle(16.0),
            layers,
            LinearVelocity::ZERO,
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

#[cfg(test)]
mod tests;
