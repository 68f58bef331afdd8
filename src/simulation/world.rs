//! Main simulation world that ties everything together
//!
//! Owns the signal and the vehicle, advances them in a fixed order each
//! tick and answers the read-only queries a display needs.

use log::{debug, info};
use std::fmt::Write as _;
use std::time::Duration;

use super::signal::{LampSet, PhaseChange, SignalController, SignalPhase};
use super::types::{FIELD_WIDTH, STOP_LINE_X, VEHICLE_LENGTH};
use super::vehicle::{MotionStep, Vehicle};

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub phase_change: Option<PhaseChange>,
    pub motion: MotionStep,
}

/// Everything a display needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub time: Duration,
    pub phase: SignalPhase,
    pub elapsed_in_phase: Duration,
    pub lamps: LampSet,
    /// Authoritative vehicle position
    pub vehicle_x: f32,
    /// Vehicle position including draw-time jitter
    pub rendered_x: f32,
}

/// Running totals kept for the headless summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub phase_changes: u64,
    pub completed_cycles: u64,
    pub wraps: u64,
    pub ticks_holding: u64,
}

/// The main simulation world
#[derive(Debug, Clone, Default)]
pub struct SimWorld {
    pub signal: SignalController,
    pub vehicle: Vehicle,

    /// Number of ticks run so far
    pub ticks: u64,

    /// Simulation time
    pub time: Duration,

    pub stats: WorldStats,
}

impl SimWorld {
    /// A world as it looks at process start
    pub fn new() -> Self {
        Self::default()
    }

    /// A world with an explicit signal and vehicle, mostly for tests
    pub fn with_parts(signal: SignalController, vehicle: Vehicle) -> Self {
        Self {
            signal,
            vehicle,
            ..Self::default()
        }
    }

    /// Advance the signal, then the vehicle, by one tick of length `delta`
    pub fn tick(&mut self, delta: Duration) -> TickReport {
        self.ticks += 1;
        self.time += delta;

        let phase_change = self.signal.advance(delta);
        if let Some(change) = phase_change {
            self.stats.phase_changes += 1;
            if change.to == SignalPhase::Stop {
                self.stats.completed_cycles += 1;
            }
        }

        let motion = self.vehicle.advance(
            delta,
            self.signal.phase(),
            self.signal.elapsed_in_phase(),
        );
        match motion {
            MotionStep::Wrapped => {
                self.stats.wraps += 1;
                debug!("Vehicle wrapped back to x={:.1}", self.vehicle.position_x);
            }
            MotionStep::Holding => self.stats.ticks_holding += 1,
            MotionStep::Cruising | MotionStep::Creeping => {}
        }

        TickReport {
            phase_change,
            motion,
        }
    }

    pub fn phase(&self) -> SignalPhase {
        self.signal.phase()
    }

    pub fn lamps(&self) -> LampSet {
        self.signal.phase().lamps()
    }

    pub fn rendered_vehicle_x(&self) -> f32 {
        self.vehicle.rendered_x()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.ticks,
            time: self.time,
            phase: self.signal.phase(),
            elapsed_in_phase: self.signal.elapsed_in_phase(),
            lamps: self.lamps(),
            vehicle_x: self.vehicle.position_x,
            rendered_x: self.vehicle.rendered_x(),
        }
    }

    /// One-line status for headless output
    pub fn summary(&self) -> String {
        format!(
            "t={:>7.2}s tick={:<6} signal={:<7} ({:>4}ms left) car x={:>7.1} front={:>7.1}",
            self.time.as_secs_f32(),
            self.ticks,
            self.signal.phase(),
            self.signal.remaining_in_phase().as_millis(),
            self.vehicle.position_x,
            self.vehicle.leading_edge(),
        )
    }

    pub fn log_totals(&self) {
        info!("=== RUN COMPLETE ===");
        info!("Ticks: {}", self.ticks);
        info!("Simulated time: {:.2}s", self.time.as_secs_f32());
        info!("Phase changes: {}", self.stats.phase_changes);
        info!("Completed cycles: {}", self.stats.completed_cycles);
        info!("Wrap-arounds: {}", self.stats.wraps);
        info!("Ticks held at stop line: {}", self.stats.ticks_holding);
    }

    /// Draw the approach lane as a single row of text.
    ///
    /// Each column covers `FIELD_WIDTH / STRIP_COLUMNS` units. `|` marks the
    /// stop line, `#` the body of the car and the bracket on the right shows
    /// the lit lamps.
    pub fn draw_strip(&self) -> String {
        const STRIP_COLUMNS: usize = 100;
        let units_per_column = FIELD_WIDTH / STRIP_COLUMNS as f32;

        let to_column = |x: f32| -> Option<usize> {
            if !(0.0..FIELD_WIDTH).contains(&x) {
                return None;
            }
            Some(((x / units_per_column) as usize).min(STRIP_COLUMNS - 1))
        };

        let mut row = vec!['.'; STRIP_COLUMNS];

        let rear = self.vehicle.rendered_x();
        let front = rear + VEHICLE_LENGTH;
        for (column, cell) in row.iter_mut().enumerate() {
            let left = column as f32 * units_per_column;
            let right = left + units_per_column;
            if right > rear && left < front {
                *cell = '#';
            }
        }

        if let Some(column) = to_column(STOP_LINE_X) {
            if row[column] == '#' {
                row[column] = '!';
            } else {
                row[column] = '|';
            }
        }

        let lamps = self.lamps();
        let lamp = |lit: bool, symbol: char| if lit { symbol } else { '-' };

        let mut line: String = row.into_iter().collect();
        let _ = write!(
            line,
            " [{}{}{}]",
            lamp(lamps.red, 'R'),
            lamp(lamps.amber, 'A'),
            lamp(lamps.green, 'G'),
        );
        line
    }
}
