//! Post-hit damage immunity for the player.
//!
//! ```text
//! Vulnerable --non-lethal hit--> Invulnerable --window elapsed--> Vulnerable
//! ```
//!
//! Hits that land while invulnerable are dropped by the damage system, so they
//! can neither stack nor extend the window.

use bevy::prelude::*;
use std::time::Duration;

#[derive(Component, Debug, Clone)]
pub struct Invulnerability {
    duration: Duration,
    window: Option<Timer>,
}

impl Invulnerability {
    pub fn new(secs: f32) -> Self {
        Self {
            duration: Duration::from_secs_f32(secs.max(0.0)),
            window: None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.window.is_some()
    }

    /// Time left in the current window, zero when vulnerable.
    pub fn remaining(&self) -> Duration {
        self.window.as_ref().map_or(Duration::ZERO, Timer::remaining)
    }

    /// Open a window. Returns `false` if one is already open or the duration is zero.
    pub fn arm(&mut self) -> bool {
        if self.is_active() || self.duration.is_zero() {
            return false;
        }
        self.window = Some(Timer::new(self.duration, TimerMode::Once));
        true
    }

    /// Advance by elapsed game time and close the window once it has run out.
    pub fn tick(&mut self, delta: Duration) {
        let Some(timer) = self.window.as_mut() else {
            return;
        };
        timer.tick(delta);
        if timer.is_finished() {
            self.window = None;
        }
    }
}

pub fn tick_invulnerability(time: Res<Time>, mut q: Query<&mut Invulnerability>) {
    let dt = time.delta();
    for mut inv in &mut q {
        if !inv.is_active() {
            continue;
        }
        inv.tick(dt);
        if !inv.is_active() {
            debug!("Invulnerability window closed");
        }
    }
}
