//! Combat plugin: health, invulnerability, contacts and the kill ledger.
//!
//! Fixed-step pipeline (after avian has written this step's `CollisionStart`):
//!
//! ```text
//! resolve_contacts  ->  DamageRequest  ->  apply_damage  ->  EntityDied  ->  record_kills
//!   (classify pair,                          (invulnerability gate,            on_player_death
//!    consume projectile)                      Health, PendingDespawn)
//! ```
//!
//! Everything runs chained in `FixedPostUpdate`, so by the time `Update` reads
//! the world again every death of this step is already marked.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::error::CombatError;
use crate::common::layers::non_interacting;
use crate::common::state::GameState;
use crate::plugins::core::PendingDespawn;
use crate::plugins::enemies::Hostile;
use crate::plugins::player::PlayerEntity;

pub mod contact;
pub mod health;
pub mod invulnerability;
pub mod ledger;
pub mod messages;

use contact::ContactKind;
use health::{DamageOutcome, Health};
use invulnerability::Invulnerability;
use ledger::KillCount;
use messages::{DamageRequest, EntityDied};

pub fn plugin(app: &mut App) {
    app.add_message::<DamageRequest>()
        .add_message::<EntityDied>();

    app.add_systems(
        FixedUpdate,
        invulnerability::tick_invulnerability.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        (
            contact::resolve_contacts,
            apply_damage,
            (ledger::record_kills, on_player_death),
        )
            .chain()
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Single writer of `Health`.
///
/// Requests against missing, dead or invulnerable targets are dropped. A lethal
/// hit marks the entity `PendingDespawn`, stops it colliding, and reports the
/// death once.
pub fn apply_damage(
    mut commands: Commands,
    mut requests: MessageReader<DamageRequest>,
    mut died: MessageWriter<EntityDied>,
    mut q: Query<(&mut Health, &ContactKind, Option<&mut Invulnerability>, Option<&Hostile>)>,
) {
    for req in requests.read() {
        let Ok((mut health, kind, invulnerability, hostile)) = q.get_mut(req.target) else {
            debug!("Damage target {:?} no longer exists", req.target);
            continue;
        };

        if invulnerability.as_ref().is_some_and(|inv| inv.is_active()) {
            debug!("{kind:?} {:?} is invulnerable; hit absorbed", req.target);
            continue;
        }

        match health.apply_damage(req.amount) {
            Ok(DamageOutcome::Wounded { remaining }) => {
                if let Some(mut inv) = invulnerability {
                    inv.arm();
                }
                info!("{kind:?} hit! Health: {remaining}");
            }
            Ok(DamageOutcome::Killed) => {
                commands
                    .entity(req.target)
                    .insert((PendingDespawn, non_interacting(kind.layer())));

                died.write(EntityDied {
                    entity: req.target,
                    kind: *kind,
                    credited_to: hostile.and_then(|h| h.player),
                });
                info!("{kind:?} {:?} destroyed", req.target);
            }
            Err(CombatError::DoubleDeath) => {
                debug!("{kind:?} {:?} is already dead; hit ignored", req.target);
            }
            Err(e) => warn!("Rejected damage to {:?}: {e}", req.target),
        }
    }
}

/// Player death ends the run.
pub fn on_player_death(
    mut died: MessageReader<EntityDied>,
    q_kills: Query<&KillCount>,
    mut registry: ResMut<PlayerEntity>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for ev in died.read() {
        if ev.kind != ContactKind::Player {
            continue;
        }

        let kills = q_kills.get(ev.entity).map(KillCount::get).unwrap_or(0);
        info!("Player is dead! Total kills: {kills}");

        registry.clear_if(ev.entity);
        next_state.set(GameState::GameOver);
    }
}
