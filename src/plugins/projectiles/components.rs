use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: Option<Entity>,
}

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

/// Fire-rate gate: at most one accepted shot per `fire_rate` seconds of game time.
///
/// Denied shots leave no trace; there is no queue and no error.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FireGate {
    fire_rate: f32,
    next_fire_time: f32,
}

impl FireGate {
    /// Negative rates are treated as zero (a shot every tick).
    pub fn new(fire_rate: f32) -> Self {
        Self { fire_rate: fire_rate.max(0.0), next_fire_time: 0.0 }
    }

    #[inline]
    pub fn fire_rate(&self) -> f32 {
        self.fire_rate
    }

    #[inline]
    pub fn next_fire_time(&self) -> f32 {
        self.next_fire_time
    }

    #[inline]
    pub fn can_fire(&self, now: f32) -> bool {
        now >= self.next_fire_time
    }

    /// Accept a shot at `now` if the cooldown has passed, and restart it.
    pub fn try_fire(&mut self, now: f32) -> bool {
        if !self.can_fire(now) {
            return false;
        }
        self.next_fire_time = now + self.fire_rate;
        true
    }
}
