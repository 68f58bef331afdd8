//! Vehicle motion for the crossing
//!
//! Standalone implementation that doesn't depend on Bevy. Motion reads the
//! signal but never writes to it.

use std::time::Duration;

use super::signal::SignalPhase;
use super::types::{
    FAST_SPEED, OSCILLATION_AMPLITUDE, OSCILLATION_FREQUENCY, SLOW_SPEED, STOP_LINE_X, TICK,
    VEHICLE_LENGTH, VEHICLE_START_X, WRAP_BOUND_X, WRAP_RESET_X,
};

/// Position the vehicle holds while waiting at the stop line
pub const HOLD_X: f32 = STOP_LINE_X - VEHICLE_LENGTH;

/// What the vehicle did during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStep {
    Cruising, // Go: full speed, stop line ignored
    Creeping, // Rolling slowly up to the stop line
    Holding,  // Frozen with the leading edge on the stop line
    Wrapped,  // Left the field and re-entered from the left
}

/// The single car approaching the crossing
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Authoritative x coordinate of the rear of the body
    pub position_x: f32,
    /// Draw-time jitter, never folded into `position_x`
    pub oscillation_offset: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle {
    pub fn new() -> Self {
        Self::at(VEHICLE_START_X)
    }

    pub fn at(position_x: f32) -> Self {
        Self {
            position_x,
            oscillation_offset: 0.0,
        }
    }

    /// Forward-most point of the body
    pub fn leading_edge(&self) -> f32 {
        self.position_x + VEHICLE_LENGTH
    }

    /// Where the body should be drawn this frame
    pub fn rendered_x(&self) -> f32 {
        self.position_x + self.oscillation_offset
    }

    pub fn is_at_stop_line(&self) -> bool {
        self.leading_edge() >= STOP_LINE_X
    }

    /// Move the vehicle for one tick of length `delta` under `phase`.
    ///
    /// Speeds are per native [`TICK`] and scale linearly with `delta`. Outside
    /// Go the leading edge never ends up past the stop line: a vehicle already
    /// on or over it is pinned to the line, and a creeping step stops at it.
    /// A vehicle beyond the right margin is reset before any other motion.
    pub fn advance(
        &mut self,
        delta: Duration,
        phase: SignalPhase,
        elapsed_in_phase: Duration,
    ) -> MotionStep {
        self.oscillation_offset = oscillation(phase, elapsed_in_phase);

        if self.position_x > WRAP_BOUND_X {
            self.position_x = WRAP_RESET_X;
            return MotionStep::Wrapped;
        }

        let scale = delta.as_secs_f32() / TICK.as_secs_f32();

        if phase.allows_crossing() {
            self.position_x += FAST_SPEED * scale;
            MotionStep::Cruising
        } else if self.is_at_stop_line() {
            self.position_x = HOLD_X;
            MotionStep::Holding
        } else {
            self.position_x = (self.position_x + SLOW_SPEED * scale).min(HOLD_X);
            MotionStep::Creeping
        }
    }
}

/// Idle jitter shown while the signal announces Go
pub fn oscillation(phase: SignalPhase, elapsed_in_phase: Duration) -> f32 {
    if phase != SignalPhase::Anticipation {
        return 0.0;
    }
    let elapsed_ms = elapsed_in_phase.as_secs_f32() * 1000.0;
    OSCILLATION_AMPLITUDE * (elapsed_ms * OSCILLATION_FREQUENCY).sin()
}
