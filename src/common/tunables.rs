//! Tunable gameplay constants.

use bevy::prelude::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_max_health: i32,
    /// Damage immunity after a non-lethal hit, in seconds of game time.
    pub invulnerability_secs: f32,
    /// Minimum seconds between two accepted shots. Zero allows a shot every tick.
    pub fire_rate_secs: f32,
    /// Impulse applied to a fresh projectile (unit mass, so this is its speed).
    pub shoot_force: f32,
    /// Distance from the player centre to the shoot origin.
    pub muzzle_offset: f32,
    pub projectile_lifetime_secs: f32,
    pub projectile_damage: i32,
    pub hostile_max_health: i32,
    pub hostile_speed: f32,
    /// Damage a hostile deals by touching the player.
    pub contact_damage: i32,
    pub spawn_interval_secs: f32,
    pub spawn_points: Vec<Vec2>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_max_health: 10,
            invulnerability_secs: 1.0,
            fire_rate_secs: 0.5,
            shoot_force: 900.0,
            muzzle_offset: 18.0,
            projectile_lifetime_secs: 3.0,
            projectile_damage: 1,
            hostile_max_health: 3,
            hostile_speed: 140.0,
            contact_damage: 1,
            spawn_interval_secs: 2.0,
            spawn_points: vec![Vec2::new(0.0, 480.0)],
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TunablesError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} is not a representable duration, got {value}")]
    NotADuration { name: &'static str, value: f32 },
}

impl Tunables {
    /// Check the invariants the gameplay systems rely on.
    pub fn validate(&self) -> Result<(), TunablesError> {
        positive("pixels_per_meter", self.pixels_per_meter)?;
        positive("player_max_health", self.player_max_health as f32)?;
        positive("hostile_max_health", self.hostile_max_health as f32)?;
        positive("projectile_damage", self.projectile_damage as f32)?;
        positive("contact_damage", self.contact_damage as f32)?;
        positive("spawn_interval_secs", self.spawn_interval_secs)?;
        positive("projectile_lifetime_secs", self.projectile_lifetime_secs)?;
        non_negative("fire_rate_secs", self.fire_rate_secs)?;
        non_negative("invulnerability_secs", self.invulnerability_secs)?;
        seconds("spawn_interval_secs", self.spawn_interval_secs)?;
        seconds("projectile_lifetime_secs", self.projectile_lifetime_secs)?;
        seconds("fire_rate_secs", self.fire_rate_secs)?;
        seconds("invulnerability_secs", self.invulnerability_secs)?;
        non_negative("shoot_force", self.shoot_force)?;
        non_negative("player_speed", self.player_speed)?;
        non_negative("hostile_speed", self.hostile_speed)?;
        Ok(())
    }
}

// NaN and infinities fail both checks.
fn positive(name: &'static str, value: f32) -> Result<(), TunablesError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TunablesError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), TunablesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TunablesError::Negative { name, value })
    }
}

/// Timers are built from these values; anything `Duration` cannot hold would panic there.
fn seconds(name: &'static str, value: f32) -> Result<(), TunablesError> {
    Duration::try_from_secs_f32(value)
        .map(|_| ())
        .map_err(|_| TunablesError::NotADuration { name, value })
}
