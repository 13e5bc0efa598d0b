//! World plugin: arena walls.
//!
//! Walls carry no `ContactKind`, so the contact resolver ignores them and
//! projectiles simply bounce until their lifetime runs out.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

const TILE: f32 = 64.0;
pub const HALF_W: f32 = TILE * 16.0;
pub const HALF_H: f32 = TILE * 9.0;
const WALL_THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

fn spawn_arena(mut commands: Commands) {
    let wall_layers = CollisionLayers::new(
        Layer::World,
        [Layer::Player, Layer::Enemy, Layer::PlayerBullet],
    );

    let t = WALL_THICKNESS;
    let walls = [
        ("WallTop", Vec2::new(0.0, HALF_H + t * 0.5), Vec2::new(HALF_W * 2.0 + t * 2.0, t)),
        ("WallBottom", Vec2::new(0.0, -HALF_H - t * 0.5), Vec2::new(HALF_W * 2.0 + t * 2.0, t)),
        ("WallLeft", Vec2::new(-HALF_W - t * 0.5, 0.0), Vec2::new(t, HALF_H * 2.0)),
        ("WallRight", Vec2::new(HALF_W + t * 0.5, 0.0), Vec2::new(t, HALF_H * 2.0)),
    ];

    for (name, pos, size) in walls {
        commands.spawn((
            Name::new(name),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
