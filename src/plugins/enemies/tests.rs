use avian2d::prelude::*;
use bevy::prelude::*;

use super::pursuit::{pursue_player, steer_towards_destination, Pursuit, Seek};
use super::{spawn_hostiles, Hostile};
use crate::common::test_utils::{run_system_once, send_message};
use crate::common::tunables::Tunables;
use crate::plugins::combat::health::Health;
use crate::plugins::core::PendingDespawn;
use crate::plugins::player::{Player, PlayerEntity};
use crate::plugins::spawner::SpawnHostileRequest;

fn request(world: &mut World, position: Vec2) {
    let spawner = world.spawn_empty().id();
    send_message(world, SpawnHostileRequest { position, spawner });
}

#[test]
fn hostile_links_to_registered_player() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    let player = world.spawn(Player).id();
    world.insert_resource(PlayerEntity(Some(player)));

    request(&mut world, Vec2::new(0.0, 480.0));
    run_system_once(&mut world, spawn_hostiles);

    let mut q = world.query::<(&Hostile, &Health, &Transform)>();
    let (hostile, health, tf) = q.single(&world).unwrap();
    assert_eq!(hostile.player, Some(player));
    assert_eq!(health.current(), Tunables::default().hostile_max_health);
    assert_eq!(tf.translation.truncate(), Vec2::new(0.0, 480.0));
}

#[test]
fn hostile_without_player_is_inert() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<PlayerEntity>();

    request(&mut world, Vec2::ZERO);
    run_system_once(&mut world, spawn_hostiles);
    run_system_once(&mut world, pursue_player);

    let mut q = world.query::<(&Hostile, &Pursuit, &Seek)>();
    let (hostile, pursuit, seek) = q.single(&world).unwrap();
    assert_eq!(hostile.player, None);
    assert_eq!(pursuit.target, None);
    assert_eq!(seek.destination(), None);
}

#[test]
fn pursuit_tracks_player_every_tick() {
    let mut world = World::new();
    let player = world.spawn((Player, Transform::from_xyz(10.0, 0.0, 1.0))).id();
    let hostile = world
        .spawn((Hostile { player: Some(player) }, Pursuit::default(), Seek::new(100.0)))
        .id();

    run_system_once(&mut world, pursue_player);
    assert_eq!(world.get::<Seek>(hostile).unwrap().destination(), Some(Vec2::new(10.0, 0.0)));

    world.get_mut::<Transform>(player).unwrap().translation = Vec3::new(-5.0, 7.0, 1.0);
    run_system_once(&mut world, pursue_player);
    assert_eq!(world.get::<Pursuit>(hostile).unwrap().target, Some(Vec2::new(-5.0, 7.0)));
    assert_eq!(world.get::<Seek>(hostile).unwrap().destination(), Some(Vec2::new(-5.0, 7.0)));
}

#[test]
fn pursuit_holds_last_directive_once_player_is_gone() {
    let mut world = World::new();
    let player = world.spawn((Player, Transform::from_xyz(3.0, 4.0, 1.0))).id();
    let hostile = world
        .spawn((Hostile { player: Some(player) }, Pursuit::default(), Seek::new(100.0)))
        .id();

    run_system_once(&mut world, pursue_player);
    world.despawn(player);
    run_system_once(&mut world, pursue_player);

    assert_eq!(world.get::<Seek>(hostile).unwrap().destination(), Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn seek_moves_at_speed_and_stops_on_arrival() {
    let mut seek = Seek::new(50.0);
    assert_eq!(seek.velocity_from(Vec2::ZERO), Vec2::ZERO);

    seek.seek_to(Vec2::new(0.0, 100.0));
    assert_eq!(seek.velocity_from(Vec2::ZERO), Vec2::new(0.0, 50.0));
    assert_eq!(seek.velocity_from(Vec2::new(0.0, 98.0)), Vec2::ZERO);

    seek.seek_to(Vec2::new(-100.0, 0.0));
    assert_eq!(seek.velocity_from(Vec2::ZERO), Vec2::new(-50.0, 0.0));
}

#[test]
fn steering_skips_dead_hostiles() {
    let mut world = World::new();
    let mut seek = Seek::new(20.0);
    seek.seek_to(Vec2::new(100.0, 0.0));

    let alive = world.spawn((Transform::default(), seek, LinearVelocity::ZERO)).id();
    let dead = world
        .spawn((Transform::default(), seek, LinearVelocity::ZERO, PendingDespawn))
        .id();

    run_system_once(&mut world, steer_towards_destination);

    assert_eq!(world.get::<LinearVelocity>(alive).unwrap().0, Vec2::new(20.0, 0.0));
    assert_eq!(world.get::<LinearVelocity>(dead).unwrap().0, Vec2::ZERO);
}
