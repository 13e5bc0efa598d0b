//! Buffered shot intents.
//!
//! The producer (`request_player_shots`) only decides *that* a shot happens.
//! The consumer (`spawn_projectiles`) is the single place projectiles enter the world.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectileRequest {
    pub origin: Vec2,
    /// Unit length.
    pub direction: Vec2,
    /// Impulse along `direction`; projectiles have unit mass.
    pub impulse: f32,
    pub owner: Option<Entity>,
}
