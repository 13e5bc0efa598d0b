//! Health controller shared by the player and hostiles.

use bevy::prelude::*;

use crate::common::error::CombatError;

/// Current and maximum health.
///
/// Invariant: `0 <= current <= max`. The only mutation is `apply_damage`, so an
/// entity goes `Alive -> Dead` at most once and never comes back.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

/// What a successful damage application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Wounded { remaining: i32 },
    /// Health reached zero on this hit. Returned exactly once per entity.
    Killed,
}

impl Health {
    /// Full health. `max` below 1 is raised to 1 so a fresh entity is always alive.
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn apply_damage(&mut self, amount: i32) -> Result<DamageOutcome, CombatError> {
        if amount <= 0 {
            return Err(CombatError::InvalidDamage(amount));
        }
        if !self.is_alive() {
            return Err(CombatError::DoubleDeath);
        }

        self.current = self.current.saturating_sub(amount).max(0);

        if self.is_alive() {
            Ok(DamageOutcome::Wounded { remaining: self.current })
        } else {
            Ok(DamageOutcome::Killed)
        }
    }
}
