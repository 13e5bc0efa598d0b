//! Projectiles plugin: message-based producer → consumer shooting.
//!
//! ```text
//!   Update (variable dt)
//!     request_player_shots   reads PlayerInput + FireGate, writes SpawnProjectileRequest
//!     spawn_projectiles      reads SpawnProjectileRequest, spawns dynamic bodies
//!
//!   FixedUpdate
//!     expire_projectiles     Lifetime elapsed -> PendingDespawn
//!
//!   FixedPostUpdate (combat plugin)
//!     resolve_contacts       projectile touching a hostile -> PendingDespawn + DamageRequest
//! ```
//!
//! Producers never spawn. The consumer is the single writer of new projectiles,
//! and `core::despawn_pending` the single place they leave the world.

pub mod components;
pub mod messages;
pub mod request;
pub mod spawn;

use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::SpawnProjectileRequest>();

        app.add_systems(
            Update,
            (
                request::request_player_shots,
                spawn::spawn_projectiles.after(request::request_player_shots),
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            spawn::expire_projectiles.run_if(in_state(GameState::InGame)),
        );
    }
}
