//! Gameplay error taxonomy.
//!
//! None of these are fatal. Each is handled where it is raised: logged and
//! turned into a no-op.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CombatError {
    /// A component needed the player, but none was registered.
    #[error("no player is registered")]
    MissingReference,
    #[error("damage amount must be positive, got {0}")]
    InvalidDamage(i32),
    /// Damage reached an entity whose health is already zero.
    #[error("entity is already dead")]
    DoubleDeath,
}
