//! Standalone crossing simulation
//!
//! This module contains the signal and vehicle logic and can run without
//! the Bevy game engine, so it can be exercised from the console or tests
//! without opening a window.

mod scheduler;
mod signal;
mod types;
mod vehicle;
mod world;

pub use scheduler::FixedTimestep;
pub use signal::{LampSet, PhaseChange, PhaseSpec, SignalController, SignalPhase, PHASE_TABLE};
pub use types::*;
pub use vehicle::{oscillation, MotionStep, Vehicle, HOLD_X};
pub use world::{Frame, SimWorld, TickReport, WorldStats};
