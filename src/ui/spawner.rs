//! Systems for spawning visual entities from simulation state

use bevy::prelude::*;

use super::components::{
    layer, rect_at, to_screen, Lamp, LampColor, PhaseText, SimWorldResource, VehicleBody,
};
use crate::simulation::{
    LampSet, LIGHT_POST_X, LIGHT_POST_Y, VEHICLE_BODY_HEIGHT, VEHICLE_LANE_Y, VEHICLE_LENGTH,
};

const LAMP_RADIUS: f32 = 18.0;
const WHEEL_RADIUS: f32 = 18.0;
const CABIN_HEIGHT: f32 = 35.0;

/// System to create the car, the signal head and the phase readout
pub fn spawn_initial_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim_world: Res<SimWorldResource>,
) {
    let world = &sim_world.0;

    spawn_vehicle(
        &mut commands,
        &mut meshes,
        &mut materials,
        world.rendered_vehicle_x(),
    );
    spawn_signal(&mut commands, &mut meshes, &mut materials, world.lamps());

    commands.spawn((
        PhaseText,
        Text::new(world.phase().to_string()),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

/// Offset of a body part inside the car, given by its bottom-left corner
fn part(x: f32, y: f32, width: f32, height: f32, depth: f32) -> Transform {
    Transform::from_xyz(x + width / 2.0, y + height / 2.0, depth)
}

fn spawn_vehicle(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    rendered_x: f32,
) {
    let wheel_mesh = meshes.add(Circle::new(WHEEL_RADIUS));
    let wheel_material = materials.add(Color::BLACK);

    commands
        .spawn((
            VehicleBody,
            Transform::from_translation(
                to_screen(rendered_x, VEHICLE_LANE_Y).extend(layer::VEHICLE),
            ),
            Visibility::default(),
        ))
        .with_children(|car| {
            car.spawn((
                Sprite::from_color(
                    Color::srgb(1.0, 0.0, 0.0),
                    Vec2::new(VEHICLE_LENGTH, VEHICLE_BODY_HEIGHT),
                ),
                part(0.0, 0.0, VEHICLE_LENGTH, VEHICLE_BODY_HEIGHT, 0.0),
            ));
            // Cabin frame and glass
            car.spawn((
                Sprite::from_color(Color::WHITE, Vec2::new(70.0, CABIN_HEIGHT)),
                part(25.0, VEHICLE_BODY_HEIGHT, 70.0, CABIN_HEIGHT, 0.0),
            ));
            car.spawn((
                Sprite::from_color(Color::srgb(0.3, 0.3, 0.4), Vec2::new(58.0, 27.0)),
                part(31.0, VEHICLE_BODY_HEIGHT + 3.0, 58.0, 27.0, 0.1),
            ));
            // Air vent and headlight
            car.spawn((
                Sprite::from_color(Color::srgb(0.7, 0.0, 0.0), Vec2::new(10.0, 10.0)),
                part(95.0, 25.0, 10.0, 10.0, 0.1),
            ));
            car.spawn((
                Sprite::from_color(Color::srgb(1.0, 1.0, 0.1), Vec2::new(10.0, 5.0)),
                part(110.0, 35.0, 10.0, 5.0, 0.1),
            ));
            for wheel_x in [30.0, 90.0] {
                car.spawn((
                    Mesh2d(wheel_mesh.clone()),
                    MeshMaterial2d(wheel_material.clone()),
                    Transform::from_xyz(wheel_x, 0.0, 0.2),
                ));
            }
        });
}

fn spawn_signal(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    lamps: LampSet,
) {
    let (x, y) = (LIGHT_POST_X, LIGHT_POST_Y);

    // Pole and housing
    commands.spawn((
        Sprite::from_color(Color::BLACK, Vec2::new(12.0, 75.0)),
        rect_at(x - 6.0, y - 5.0, 12.0, 75.0, layer::SIGNAL),
    ));
    commands.spawn((
        Sprite::from_color(Color::BLACK, Vec2::new(50.0, 110.0)),
        rect_at(x - 25.0, y + 70.0, 50.0, 110.0, layer::SIGNAL),
    ));

    let lamp_mesh = meshes.add(Circle::new(LAMP_RADIUS));
    for (color, height, lit) in [
        (LampColor::Red, 155.0, lamps.red),
        (LampColor::Amber, 115.0, lamps.amber),
        (LampColor::Green, 75.0, lamps.green),
    ] {
        let shade = if lit { color.lit() } else { color.dimmed() };
        commands.spawn((
            Lamp(color),
            Mesh2d(lamp_mesh.clone()),
            // One material per lamp, recoloured in place by sync_lamps
            MeshMaterial2d(materials.add(shade)),
            Transform::from_translation(to_screen(x, y + height).extend(layer::SIGNAL + 0.1)),
        ));
    }
}
