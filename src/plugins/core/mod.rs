//! Core plugin: shared resources and deferred destruction.
//!
//! Gameplay systems never despawn directly. They mark `PendingDespawn` and
//! `despawn_pending` removes the entity at the `PostUpdate` boundary, after
//! every fixed step of the frame has finished with it.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Marker: entity is destroyed and will be removed from the world.
///
/// Also the "dead" filter for hot paths: pursuit, steering and contact
/// resolution skip anything carrying it.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    let tunables = match app.world().get_resource::<Tunables>() {
        Some(existing) => match existing.validate() {
            Ok(()) => existing.clone(),
            Err(e) => {
                warn!("Invalid tunables ({e}); falling back to defaults");
                Tunables::default()
            }
        },
        None => Tunables::default(),
    };

    app.insert_resource(tunables);
    app.add_systems(PostUpdate, despawn_pending);
}

/// Despawn entities marked for removal.
///
/// Centralizing despawn in one system keeps structural changes predictable.
pub fn despawn_pending(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
