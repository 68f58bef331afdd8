//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{SimWorld, FIELD_HEIGHT, FIELD_WIDTH};

/// Resource wrapper for the simulation world
#[derive(Resource, Default)]
pub struct SimWorldResource(pub SimWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Root entity of the car; children carry the individual body parts
#[derive(Component)]
pub struct VehicleBody;

/// Which lamp of the signal head an entity draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampColor {
    Red,
    Amber,
    Green,
}

impl LampColor {
    pub fn lit(self) -> Color {
        match self {
            LampColor::Red => Color::srgb(1.0, 0.1, 0.1),
            LampColor::Amber => Color::srgb(1.0, 1.0, 0.1),
            LampColor::Green => Color::srgb(0.1, 1.0, 0.1),
        }
    }

    pub fn dimmed(self) -> Color {
        match self {
            LampColor::Red => Color::srgb(0.2, 0.05, 0.05),
            LampColor::Amber => Color::srgb(0.2, 0.2, 0.05),
            LampColor::Green => Color::srgb(0.05, 0.2, 0.05),
        }
    }
}

/// Links a Bevy entity to one lamp of the signal head
#[derive(Component)]
pub struct Lamp(pub LampColor);

/// Marker for the on-screen phase readout
#[derive(Component)]
pub struct PhaseText;

/// Draw order, back to front
pub mod layer {
    pub const GROUND: f32 = 0.0;
    pub const ROAD: f32 = 1.0;
    pub const MARKING: f32 = 2.0;
    pub const VEHICLE: f32 = 3.0;
    pub const SIGNAL: f32 = 4.0;
}

/// Convert field coordinates (bottom-left origin) to a centred screen position
pub fn to_screen(x: f32, y: f32) -> Vec2 {
    Vec2::new(x - FIELD_WIDTH / 2.0, y - FIELD_HEIGHT / 2.0)
}

/// Transform placing a rectangle by its bottom-left corner
pub fn rect_at(x: f32, y: f32, width: f32, height: f32, z: f32) -> Transform {
    Transform::from_translation(to_screen(x + width / 2.0, y + height / 2.0).extend(z))
}
