//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `SimWorld` and draws it as a flat 2D scene.

mod components;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use crate::simulation::TICK;
use input::handle_input;
use spawner::spawn_initial_visuals;
use sync::{sync_lamps, sync_vehicle, tick_simulation, update_phase_text};
use world::setup_world;

/// Plugin to register all UI systems
pub struct SignalCrossingUIPlugin;

impl Plugin for SignalCrossingUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .insert_resource(Time::<Fixed>::from_duration(TICK))
            .insert_resource(ClearColor(Color::srgb(0.2, 0.2, 0.2)))
            .add_systems(
                Startup,
                (setup_world, spawn_initial_visuals.after(setup_world)),
            )
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (sync_vehicle, sync_lamps, update_phase_text, handle_input),
            );
    }
}
