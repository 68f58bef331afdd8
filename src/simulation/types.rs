//! Scene geometry and motion constants for the crossing
//!
//! Coordinates use a bottom-left origin with x to the right and y up,
//! matching the layout of the rendered field.

use std::time::Duration;

/// Width of the visible field in world units
pub const FIELD_WIDTH: f32 = 1000.0;

/// Height of the visible field in world units
pub const FIELD_HEIGHT: f32 = 600.0;

/// Width of each road surface
pub const ROAD_WIDTH: f32 = 140.0;

/// Spacing and length of the dashed centre-line segments
pub const LANE_DASH_SPACING: f32 = 40.0;
pub const LANE_DASH_LENGTH: f32 = 20.0;

/// X coordinate of the stop line the vehicle's leading edge must not cross
pub const STOP_LINE_X: f32 = FIELD_WIDTH / 2.0 + 5.0;

/// Painted length of the stop line and its offset below the road centre
pub const STOP_LINE_LENGTH: f32 = 60.0;
pub const STOP_LINE_DROP: f32 = 75.0;

/// Base of the signal post
pub const LIGHT_POST_X: f32 = FIELD_WIDTH / 2.0 + 50.0;
pub const LIGHT_POST_Y: f32 = FIELD_HEIGHT / 2.0 - 100.0;

/// Length of the vehicle body along the road
pub const VEHICLE_LENGTH: f32 = 120.0;

/// Height of the vehicle body (cabin excluded)
pub const VEHICLE_BODY_HEIGHT: f32 = 45.0;

/// Vertical position of the vehicle's lower edge
pub const VEHICLE_LANE_Y: f32 = FIELD_HEIGHT / 2.0 + 5.0;

/// Where the vehicle is placed when the process starts
pub const VEHICLE_START_X: f32 = FIELD_WIDTH / 2.0 - 200.0;

/// Once `position_x` passes this bound the vehicle is sent back to the left
pub const WRAP_BOUND_X: f32 = FIELD_WIDTH + 50.0;

/// Off-screen coordinate the vehicle re-enters from after wrapping
pub const WRAP_RESET_X: f32 = -200.0;

/// Advance per native tick while the signal shows Go
pub const FAST_SPEED: f32 = 1.8;

/// Advance per native tick while creeping up to the stop line
pub const SLOW_SPEED: f32 = 0.8;

/// Peak displacement of the idle jitter during anticipation
pub const OSCILLATION_AMPLITUDE: f32 = 2.5;

/// Radians of jitter per millisecond spent in the anticipation phase
pub const OSCILLATION_FREQUENCY: f32 = 0.5;

/// Length of one simulation tick
pub const TICK: Duration = Duration::from_millis(16);
