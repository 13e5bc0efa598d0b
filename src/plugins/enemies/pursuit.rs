//! Pursuit controller and the seek-to-point movement capability.
//!
//! Pursuit only chooses a destination. `Seek` is the movement capability: it
//! accepts a destination and moves straight towards it; how it gets there is
//! its own business. Each directive replaces the last one.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::core::PendingDespawn;
use crate::plugins::player::Player;

use super::Hostile;

/// Last known player position.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Pursuit {
    pub target: Option<Vec2>,
}

/// Seek-to-point locomotion request.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Seek {
    destination: Option<Vec2>,
    pub speed: f32,
}

impl Seek {
    /// Close enough to stop.
    pub const ARRIVAL_RADIUS: f32 = 4.0;

    pub fn new(speed: f32) -> Self {
        Self { destination: None, speed }
    }

    #[inline]
    pub fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    /// Fire-and-forget directive; supersedes any earlier destination.
    #[inline]
    pub fn seek_to(&mut self, destination: Vec2) {
        self.destination = Some(destination);
    }

    /// Velocity that moves `from` towards the destination.
    pub fn velocity_from(&self, from: Vec2) -> Vec2 {
        let Some(dest) = self.destination else {
            return Vec2::ZERO;
        };
        let to_dest = dest - from;
        if to_dest.length() <= Self::ARRIVAL_RADIUS {
            return Vec2::ZERO;
        }
        to_dest.normalize() * self.speed
    }
}

/// Every tick: refresh each hostile's target from its player and issue a seek directive.
///
/// Hostiles created without a player stay inert. If the player has since been
/// removed, no directive is issued.
pub fn pursue_player(
    q_player: Query<&Transform, With<Player>>,
    mut q_hostiles: Query<(&Hostile, &mut Pursuit, &mut Seek), Without<PendingDespawn>>,
) {
    for (hostile, mut pursuit, mut seek) in &mut q_hostiles {
        let Some(player) = hostile.player else {
            continue;
        };
        let Ok(player_tf) = q_player.get(player) else {
            continue;
        };

        let target = player_tf.translation.truncate();
        pursuit.target = Some(target);
        seek.seek_to(target);
    }
}

pub fn steer_towards_destination(
    mut q: Query<(&Transform, &Seek, &mut LinearVelocity), Without<PendingDespawn>>,
) {
    for (tf, seek, mut vel) in &mut q {
        vel.0 = seek.velocity_from(tf.translation.truncate());
    }
}
