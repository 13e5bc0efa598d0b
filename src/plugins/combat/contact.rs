//! Contact resolver: turns avian `CollisionStart` messages into damage intents.
//!
//! Dispatch table:
//!
//! | pair                  | effect                                              |
//! |-----------------------|-----------------------------------------------------|
//! | Projectile + Hostile  | hostile takes `projectile_damage`, projectile consumed |
//! | Hostile + Player      | player takes `contact_damage`, hostile untouched    |
//! | anything else         | ignored                                             |
//!
//! A projectile is consumed at most once, and always, even if the hostile it
//! touched died earlier in the same step. Health is never touched here:
//! `apply_damage` decides what a request actually does.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;
use crate::plugins::core::PendingDespawn;

use super::messages::DamageRequest;

/// Typed participant tag. Entities without one (walls) never match a rule.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Player,
    Hostile,
    Projectile,
}

impl ContactKind {
    /// Collision layer membership for this kind of participant.
    #[inline]
    pub fn layer(self) -> Layer {
        match self {
            ContactKind::Player => Layer::Player,
            ContactKind::Hostile => Layer::Enemy,
            ContactKind::Projectile => Layer::PlayerBullet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRule {
    ProjectileHitsHostile { projectile: Entity, hostile: Entity },
    HostileTouchesPlayer { hostile: Entity, player: Entity },
}

/// Match a pair against the dispatch table. Argument order does not matter.
pub fn classify(a: (Entity, ContactKind), b: (Entity, ContactKind)) -> Option<ContactRule> {
    use ContactKind::*;

    match (a, b) {
        ((projectile, Projectile), (hostile, Hostile))
        | ((hostile, Hostile), (projectile, Projectile)) => {
            Some(ContactRule::ProjectileHitsHostile { projectile, hostile })
        }
        ((hostile, Hostile), (player, Player)) | ((player, Player), (hostile, Hostile)) => {
            Some(ContactRule::HostileTouchesPlayer { hostile, player })
        }
        _ => None,
    }
}

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    /// Gameplay components live on the body when the collider is a child.
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget { collider: ev.collider1, body: ev.body1 },
        CollisionTarget { collider: ev.collider2, body: ev.body2 },
    )
}

pub fn resolve_contacts(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    q_kind: Query<&ContactKind>,
    q_pending: Query<(), With<PendingDespawn>>,
    mut damage: MessageWriter<DamageRequest>,
    // Projectiles consumed during this run (their PendingDespawn is still queued).
    mut consumed: Local<HashSet<Entity>>,
) {
    consumed.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);
        let (e1, e2) = (t1.gameplay_owner(), t2.gameplay_owner());

        let (Ok(k1), Ok(k2)) = (q_kind.get(e1), q_kind.get(e2)) else {
            continue;
        };

        match classify((e1, *k1), (e2, *k2)) {
            Some(ContactRule::ProjectileHitsHostile { projectile, hostile }) => {
                if q_pending.contains(projectile) || !consumed.insert(projectile) {
                    continue;
                }
                commands.entity(projectile).insert(PendingDespawn);

                damage.write(DamageRequest {
                    target: hostile,
                    amount: tunables.projectile_damage,
                    source: Some(projectile),
                });
            }
            Some(ContactRule::HostileTouchesPlayer { hostile, player }) => {
                if q_pending.contains(hostile) || q_pending.contains(player) {
                    continue;
                }
                damage.write(DamageRequest {
                    target: player,
                    amount: tunables.contact_damage,
                    source: Some(hostile),
                });
            }
            None => {}
        }
    }
}
