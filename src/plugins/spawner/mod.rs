//! Spawner plugin: timed hostile generation at fixed spawn points.
//!
//! Each spawn point runs an indefinite loop:
//!
//! ```text
//! loop {
//!     wait(interval)        // Timer ticked by game time; never blocks
//!     if !active { break }  // checked once the in-flight wait completes
//!     emit SpawnHostileRequest
//! }
//! ```
//!
//! The spawner owns nothing it creates. It only writes intents; the enemies
//! plugin turns them into hostiles.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use std::time::Duration;

use crate::common::{state::GameState, tunables::Tunables};

/// Smallest interval a spawner accepts.
pub const MIN_INTERVAL_SECS: f32 = 0.001;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnHostileRequest {
    pub position: Vec2,
    pub spawner: Entity,
}

#[derive(Component, Debug, Clone)]
pub struct Spawner {
    interval: Duration,
    active: bool,
    /// In-flight wait. `None` once the loop has stopped.
    wait: Option<Timer>,
}

impl Spawner {
    /// A running spawner. The first emission comes after one full interval.
    pub fn new(interval_secs: f32) -> Self {
        let interval = Duration::from_secs_f32(interval_secs.max(MIN_INTERVAL_SECS));
        Self {
            interval,
            active: true,
            wait: Some(Timer::new(interval, TimerMode::Repeating)),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The loop is still waiting on an interval (possibly its last one).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.wait.is_some()
    }

    /// Start a fresh loop. Any in-flight wait is discarded, never resumed.
    pub fn activate(&mut self) {
        self.active = true;
        self.wait = Some(Timer::new(self.interval, TimerMode::Repeating));
    }

    /// Stop emitting. Takes effect when the in-flight wait completes.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Advance the loop by `delta` and return how many hostiles to emit.
    ///
    /// A long `delta` covering several intervals emits once per completed interval.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        let Some(wait) = self.wait.as_mut() else {
            return 0;
        };

        wait.tick(delta);
        let completed = wait.times_finished_this_tick();
        if completed == 0 {
            return 0;
        }

        if !self.active {
            self.wait = None;
            return 0;
        }
        completed
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnHostileRequest>()
        .add_systems(OnEnter(GameState::InGame), spawn_spawn_points)
        .add_systems(Update, tick_spawners.run_if(in_state(GameState::InGame)));
}

fn spawn_spawn_points(mut commands: Commands, tunables: Res<Tunables>) {
    for (i, point) in tunables.spawn_points.iter().enumerate() {
        commands.spawn((
            Name::new(format!("SpawnPoint{i}")),
            Spawner::new(tunables.spawn_interval_secs),
            Transform::from_translation(point.extend(0.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn tick_spawners(
    time: Res<Time>,
    mut q: Query<(Entity, &Transform, &mut Spawner)>,
    mut writer: MessageWriter<SpawnHostileRequest>,
) {
    for (e, tf, mut spawner) in &mut q {
        if !spawner.is_running() {
            continue;
        }

        let count = spawner.tick(time.delta());
        let position = tf.translation.truncate();
        for _ in 0..count {
            writer.write(SpawnHostileRequest { position, spawner: e });
        }

        if !spawner.is_running() {
            info!("Spawn loop at {position} stopped");
        }
    }
}

#[cfg(test)]
mod tests;
