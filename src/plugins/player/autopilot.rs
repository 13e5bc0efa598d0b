//! Autopilot: a scripted `PlayerInput` source for the headless binary.
//!
//! Aims at the nearest living hostile, holds the trigger while one exists, and
//! backs away from it when it gets within `KEEP_AWAY`.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::core::PendingDespawn;
use crate::plugins::enemies::Hostile;
use crate::plugins::projectiles::request::request_player_shots;

use super::{Player, PlayerInput};

pub const KEEP_AWAY: f32 = 160.0;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        drive_player
            .before(request_player_shots)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Input for a player at `player` facing the given hostile positions.
pub fn steer(player: Vec2, hostiles: impl IntoIterator<Item = Vec2>) -> PlayerInput {
    let nearest = hostiles
        .into_iter()
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)));

    let Some(target) = nearest else {
        return PlayerInput::default();
    };

    let to_target = target - player;
    let move_axis = if to_target.length() < KEEP_AWAY {
        -to_target.normalize_or_zero()
    } else {
        Vec2::ZERO
    };

    PlayerInput { move_axis, aim: to_target, fire: true }
}

fn drive_player(
    q_player: Query<&Transform, With<Player>>,
    q_hostiles: Query<&Transform, (With<Hostile>, Without<Player>, Without<PendingDespawn>)>,
    mut input: ResMut<PlayerInput>,
) {
    let Ok(player_tf) = q_player.single() else {
        *input = PlayerInput::default();
        return;
    };

    *input = steer(
        player_tf.translation.truncate(),
        q_hostiles.iter().map(|tf| tf.translation.truncate()),
    );
}
