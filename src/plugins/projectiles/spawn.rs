use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::combat::contact::ContactKind;
use crate::plugins::core::PendingDespawn;

use super::components::{Lifetime, Projectile};
use super::messages::SpawnProjectileRequest;

/// Consumer: one projectile per request.
///
/// `CollisionEventsEnabled` opts the projectile into `CollisionStart` messages.
pub fn spawn_projectiles(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnProjectileRequest>,
) {
    let layers = CollisionLayers::new(Layer::PlayerBullet, [Layer::World, Layer::Enemy]);

    for req in reader.read() {
        commands.spawn((
            Name::new("Projectile"),
            Projectile { owner: req.owner },
            ContactKind::Projectile,
            Lifetime(Timer::from_seconds(tunables.projectile_lifetime_secs, TimerMode::Once)),
            Transform::from_translation(req.origin.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(4.0),
            layers,
            // Bouncy: walls don't consume projectiles, only hostiles and lifetime do.
            Restitution::new(0.95).with_combine_rule(CoefficientCombine::Max),
            Friction::ZERO,
            LinearVelocity(req.direction * req.impulse),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Lifetime), Without<PendingDespawn>>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).insert(PendingDespawn);
        }
    }
}
