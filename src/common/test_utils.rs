//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system without
//! building a full schedule. Systems that use `Commands` only enqueue structural changes,
//! so we call `world.flush()` after running to apply them before assertions.
//!
//! Every `run_system_once` call builds a fresh system, so a `MessageReader` inside it
//! starts from the oldest retained message. Tests that run the same reader twice must
//! clear the buffer in between (`clear_messages`).

use bevy::ecs::message::{Message, MessageReader, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;
use std::time::Duration;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Write a message, creating its backing storage on first use.
pub fn send_message<M: Message>(world: &mut World, message: M) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
    world.write_message(message);
}

/// Make sure a message type has storage so `MessageWriter<M>` can run.
pub fn init_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

pub fn clear_messages<M: Message>(world: &mut World) {
    world.resource_mut::<Messages<M>>().clear();
}

/// Every retained message of type `M`, oldest first.
pub fn collect_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    run_system_once(world, |mut reader: MessageReader<M>| {
        reader.read().cloned().collect::<Vec<_>>()
    })
}

/// A default-clock `Time` advanced once by `secs`, so both `delta` and `elapsed` equal `secs`.
pub fn time_advanced_by(secs: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(secs));
    t
}

/// Advance the world's `Time` resource by `secs` (delta becomes `secs`).
pub fn advance_time(world: &mut World, secs: f32) {
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
}
