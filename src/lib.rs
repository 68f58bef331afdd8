//! Signal Crossing Library
//!
//! A single signalised crossing with one car, runnable headless or with a
//! Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
