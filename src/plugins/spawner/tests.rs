use bevy::prelude::*;
use std::time::Duration;

use super::{tick_spawners, SpawnHostileRequest, Spawner, MIN_INTERVAL_SECS};
use crate::common::test_utils::{
    advance_time, clear_messages, collect_messages, init_messages, run_system_once,
};

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

#[test]
fn emits_once_per_elapsed_interval() {
    let mut spawner = Spawner::new(2.0);

    // 0.5s steps over 7s: emissions at 2, 4 and 6.
    let mut emitted = Vec::new();
    for step in 1..=14 {
        if spawner.tick(secs(0.5)) > 0 {
            emitted.push(step as f32 * 0.5);
        }
    }
    assert_eq!(emitted, vec![2.0, 4.0, 6.0]);
}

#[test]
fn long_tick_covers_several_intervals() {
    let mut spawner = Spawner::new(2.0);
    assert_eq!(spawner.tick(secs(7.0)), 3);
    assert_eq!(spawner.tick(secs(1.0)), 1);
}

#[test]
fn interval_is_clamped_to_minimum() {
    assert_eq!(Spawner::new(0.0).interval(), secs(MIN_INTERVAL_SECS));
}

#[test]
fn deactivate_lets_wait_finish_then_emits_nothing() {
    let mut spawner = Spawner::new(2.0);
    assert_eq!(spawner.tick(secs(1.0)), 0);

    spawner.deactivate();
    assert!(spawner.is_running());

    assert_eq!(spawner.tick(secs(1.5)), 0);
    assert!(!spawner.is_running());
    assert_eq!(spawner.tick(secs(10.0)), 0);
}

#[test]
fn reactivation_starts_a_fresh_loop() {
    let mut spawner = Spawner::new(2.0);
    spawner.tick(secs(1.5));
    spawner.deactivate();
    spawner.activate();

    // The discarded wait had 0.5s left; a fresh loop needs the full interval.
    assert_eq!(spawner.tick(secs(1.0)), 0);
    assert_eq!(spawner.tick(secs(1.0)), 1);
}

#[test]
fn tick_spawners_writes_requests_at_spawner_position() {
    let mut world = World::new();
    world.insert_resource(Time::<()>::default());
    init_messages::<SpawnHostileRequest>(&mut world);

    let spawner = world
        .spawn((Spawner::new(2.0), Transform::from_xyz(0.0, 480.0, 0.0)))
        .id();

    advance_time(&mut world, 1.0);
    run_system_once(&mut world, tick_spawners);
    assert!(collect_messages::<SpawnHostileRequest>(&mut world).is_empty());

    advance_time(&mut world, 1.0);
    run_system_once(&mut world, tick_spawners);
    assert_eq!(
        collect_messages::<SpawnHostileRequest>(&mut world),
        vec![SpawnHostileRequest { position: Vec2::new(0.0, 480.0), spawner }]
    );
}

#[test]
fn stopped_spawner_is_skipped() {
    let mut world = World::new();
    world.insert_resource(Time::<()>::default());
    init_messages::<SpawnHostileRequest>(&mut world);

    let mut stopped = Spawner::new(2.0);
    stopped.deactivate();
    world.spawn((stopped, Transform::default()));

    for _ in 0..3 {
        advance_time(&mut world, 2.0);
        run_system_once(&mut world, tick_spawners);
        assert!(collect_messages::<SpawnHostileRequest>(&mut world).is_empty());
        clear_messages::<SpawnHostileRequest>(&mut world);
    }

    let mut q = world.query::<&Spawner>();
    let s = q.single(&world).unwrap();
    assert!(!s.is_running());
}
