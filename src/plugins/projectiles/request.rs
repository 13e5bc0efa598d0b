use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core::PendingDespawn;
use crate::plugins::player::{Player, PlayerInput};

use super::components::FireGate;
use super::messages::SpawnProjectileRequest;

/// Producer: trigger held + fire gate open -> one SpawnProjectileRequest.
///
/// This system never spawns anything itself.
pub fn request_player_shots(
    time: Res<Time>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<
        (Entity, &Transform, &mut FireGate),
        (With<Player>, Without<PendingDespawn>),
    >,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    if !input.fire {
        return;
    }

    let (player_e, player_tf, mut gate) = match q_player.single_mut() {
        Ok(v) => v,
        Err(e) => {
            debug!("No single live Player: {e:?}");
            return;
        }
    };

    if !gate.try_fire(time.elapsed_secs()) {
        return;
    }

    let direction = input.aim.try_normalize().unwrap_or(Vec2::Y);
    let origin = player_tf.translation.truncate() + direction * tunables.muzzle_offset;

    writer.write(SpawnProjectileRequest {
        origin,
        direction,
        impulse: tunables.shoot_force,
        owner: Some(player_e),
    });
}
