//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{to_screen, Lamp, LampColor, PhaseText, SimWorldResource, VehicleBody};
use crate::simulation::VEHICLE_LANE_Y;

/// System to run simulation tick
pub fn tick_simulation(time: Res<Time>, mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick(time.delta());
}

/// System to move the car to its rendered position
pub fn sync_vehicle(
    sim_world: Res<SimWorldResource>,
    mut vehicle_query: Query<&mut Transform, With<VehicleBody>>,
) {
    let position = to_screen(sim_world.0.rendered_vehicle_x(), VEHICLE_LANE_Y);
    for mut transform in vehicle_query.iter_mut() {
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

/// System to light or dim each lamp for the current phase
pub fn sync_lamps(
    sim_world: Res<SimWorldResource>,
    lamp_query: Query<(&Lamp, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let lamps = sim_world.0.lamps();
    for (lamp, material_handle) in lamp_query.iter() {
        let lit = match lamp.0 {
            LampColor::Red => lamps.red,
            LampColor::Amber => lamps.amber,
            LampColor::Green => lamps.green,
        };
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = if lit { lamp.0.lit() } else { lamp.0.dimmed() };
        }
    }
}

/// System to update the phase readout
pub fn update_phase_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<&mut Text, With<PhaseText>>,
) {
    let signal = &sim_world.0.signal;
    for mut text in text_query.iter_mut() {
        text.0 = format!(
            "{}  ({:.1}s left)",
            signal.phase(),
            signal.remaining_in_phase().as_secs_f32()
        );
    }
}
