//! World setup systems for camera, ground, roads and markings

use bevy::prelude::*;

use super::components::{layer, rect_at, MainCamera};
use crate::simulation::{
    FIELD_HEIGHT, FIELD_WIDTH, LANE_DASH_LENGTH, LANE_DASH_SPACING, ROAD_WIDTH, STOP_LINE_DROP,
    STOP_LINE_LENGTH, STOP_LINE_X,
};

const GRASS: Color = Color::srgb(0.1, 0.5, 0.1);
const ASPHALT: Color = Color::srgb(0.2, 0.2, 0.2);
const DASH: Color = Color::srgb(0.8, 0.8, 0.8);
const DASH_WIDTH: f32 = 3.0;
const STOP_LINE_WIDTH: f32 = 6.0;

/// System to setup the static scene
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));

    commands.spawn((
        Sprite::from_color(GRASS, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)),
        rect_at(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, layer::GROUND),
    ));

    // Vertical then horizontal road
    let half_road = ROAD_WIDTH / 2.0;
    commands.spawn((
        Sprite::from_color(ASPHALT, Vec2::new(ROAD_WIDTH, FIELD_HEIGHT)),
        rect_at(
            FIELD_WIDTH / 2.0 - half_road,
            0.0,
            ROAD_WIDTH,
            FIELD_HEIGHT,
            layer::ROAD,
        ),
    ));
    commands.spawn((
        Sprite::from_color(ASPHALT, Vec2::new(FIELD_WIDTH, ROAD_WIDTH)),
        rect_at(
            0.0,
            FIELD_HEIGHT / 2.0 - half_road,
            FIELD_WIDTH,
            ROAD_WIDTH,
            layer::ROAD,
        ),
    ));

    spawn_centre_lines(&mut commands);

    commands.spawn((
        Sprite::from_color(Color::WHITE, Vec2::new(STOP_LINE_LENGTH, STOP_LINE_WIDTH)),
        rect_at(
            STOP_LINE_X,
            FIELD_HEIGHT / 2.0 - STOP_LINE_DROP - STOP_LINE_WIDTH / 2.0,
            STOP_LINE_LENGTH,
            STOP_LINE_WIDTH,
            layer::MARKING,
        ),
    ));
}

fn spawn_centre_lines(commands: &mut Commands) {
    let mut y = 0.0;
    while y < FIELD_HEIGHT {
        commands.spawn((
            Sprite::from_color(DASH, Vec2::new(DASH_WIDTH, LANE_DASH_LENGTH)),
            rect_at(
                FIELD_WIDTH / 2.0 - DASH_WIDTH / 2.0,
                y,
                DASH_WIDTH,
                LANE_DASH_LENGTH,
                layer::MARKING,
            ),
        ));
        y += LANE_DASH_SPACING;
    }

    let mut x = 0.0;
    while x < FIELD_WIDTH {
        commands.spawn((
            Sprite::from_color(DASH, Vec2::new(LANE_DASH_LENGTH, DASH_WIDTH)),
            rect_at(
                x,
                FIELD_HEIGHT / 2.0 - DASH_WIDTH / 2.0,
                LANE_DASH_LENGTH,
                DASH_WIDTH,
                layer::MARKING,
            ),
        ));
        x += LANE_DASH_SPACING;
    }
}
