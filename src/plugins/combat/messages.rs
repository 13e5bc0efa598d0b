//! Combat intents and results.
//!
//! Producers (contact resolver, tests, scripted events) only describe damage.
//! `apply_damage` is the single writer of `Health`.

use bevy::prelude::*;

use super::contact::ContactKind;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRequest {
    pub target: Entity,
    pub amount: i32,
    /// Whatever caused the hit (projectile, hostile), for logging.
    pub source: Option<Entity>,
}

/// Written exactly once per entity, on its `Alive -> Dead` transition.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityDied {
    pub entity: Entity,
    pub kind: ContactKind,
    /// Player the kill is attributed to, if the dead entity held a reference to one.
    pub credited_to: Option<Entity>,
}
