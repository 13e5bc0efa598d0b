//! Kill ledger: confirmed hostile deaths credited to the player.

use bevy::prelude::*;

use super::contact::ContactKind;
use super::messages::EntityDied;

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KillCount(u32);

impl KillCount {
    #[inline]
    pub fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn record_kill(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

/// Credit each hostile death to the player it referenced.
///
/// A reference that no longer resolves (player already gone) is skipped.
pub fn record_kills(mut died: MessageReader<EntityDied>, mut q_kills: Query<&mut KillCount>) {
    for ev in died.read() {
        if ev.kind != ContactKind::Hostile {
            continue;
        }

        let Some(player) = ev.credited_to else {
            debug!("Hostile {:?} died with no player reference; no kill credited", ev.entity);
            continue;
        };

        match q_kills.get_mut(player) {
            Ok(mut kills) => {
                kills.record_kill();
                info!("Kills: {}", kills.get());
            }
            Err(_) => debug!("Player {player:?} no longer exists; kill not credited"),
        }
    }
}
