//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the player and register it in `PlayerEntity`
//! - FixedUpdate: apply `PlayerInput::move_axis` to the kinematic rigid body
//!
//! `PlayerInput` is the only input surface. Whatever drives the player (a device
//! adapter, `autopilot`, a test) writes it; nothing here reads devices.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::error::CombatError;
use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::combat::contact::ContactKind;
use crate::plugins::combat::health::Health;
use crate::plugins::combat::invulnerability::Invulnerability;
use crate::plugins::combat::ledger::KillCount;
use crate::plugins::projectiles::components::FireGate;

pub mod autopilot;

#[derive(Component)]
pub struct Player;

/// Registry for the one player in the world.
///
/// Hostiles copy this handle at creation instead of searching the world.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerEntity(pub Option<Entity>);

impl PlayerEntity {
    pub fn get(&self) -> Result<Entity, CombatError> {
        self.0.ok_or(CombatError::MissingReference)
    }

    /// Forget the player, but only if it is still the registered one.
    pub fn clear_if(&mut self, player: Entity) {
        if self.0 == Some(player) {
            self.0 = None;
        }
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerInput {
    /// Desired movement, length <= 1.
    pub move_axis: Vec2,
    /// Aim direction; need not be normalized. Zero aims up.
    pub aim: Vec2,
    /// Trigger held this frame.
    pub fire: bool,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>()
        .init_resource::<PlayerEntity>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(FixedUpdate, apply_movement.run_if(in_state(GameState::InGame)));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>, mut registry: ResMut<PlayerEntity>) {
    if let Some(existing) = registry.0 {
        warn!("Player {existing:?} already registered; not spawning another");
        return;
    }

    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy]);

    let e = commands
        .spawn((
            Name::new("Player"),
            Player,
            ContactKind::Player,
            Health::new(tunables.player_max_health),
            Invulnerability::new(tunables.invulnerability_secs),
            FireGate::new(tunables.fire_rate_secs),
            KillCount::default(),
            Transform::from_xyz(0.0, 0.0, 1.0),
            RigidBody::Kinematic,
            Collider::circle(13.0),
            layers,
            LinearVelocity::ZERO,
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    registry.0 = Some(e);
    info!("Player spawned with {} health", tunables.player_max_health);
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis.clamp_length_max(1.0) * tunables.player_speed;
}
