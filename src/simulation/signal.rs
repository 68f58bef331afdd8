//! Signal controller for the crossing
//!
//! The light cycles Stop → Anticipation → Go → Caution → Stop. How long each
//! phase lasts and which phase follows it live in [`PHASE_TABLE`], which
//! `advance` consults instead of branching per phase.

use log::debug;
use std::fmt;
use std::time::Duration;

/// Phase currently shown by the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignalPhase {
    /// Red only
    #[default]
    Stop,
    /// Red and amber together, announcing Go
    Anticipation,
    /// Green only
    Go,
    /// Amber only
    Caution,
}

/// One row of the phase table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpec {
    pub phase: SignalPhase,
    pub duration: Duration,
    pub next: SignalPhase,
}

/// Duration and successor of every phase, indexed by `SignalPhase as usize`
pub const PHASE_TABLE: [PhaseSpec; 4] = [
    PhaseSpec {
        phase: SignalPhase::Stop,
        duration: Duration::from_millis(6000),
        next: SignalPhase::Anticipation,
    },
    PhaseSpec {
        phase: SignalPhase::Anticipation,
        duration: Duration::from_millis(1000),
        next: SignalPhase::Go,
    },
    PhaseSpec {
        phase: SignalPhase::Go,
        duration: Duration::from_millis(8000),
        next: SignalPhase::Caution,
    },
    PhaseSpec {
        phase: SignalPhase::Caution,
        duration: Duration::from_millis(2500),
        next: SignalPhase::Stop,
    },
];

/// Which lamps are lit on the signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LampSet {
    pub red: bool,
    pub amber: bool,
    pub green: bool,
}

impl SignalPhase {
    /// All phases in cycle order, starting from the initial phase
    pub const ALL: [SignalPhase; 4] = [
        SignalPhase::Stop,
        SignalPhase::Anticipation,
        SignalPhase::Go,
        SignalPhase::Caution,
    ];

    fn spec(self) -> &'static PhaseSpec {
        &PHASE_TABLE[self as usize]
    }

    /// How long the signal stays in this phase
    pub fn duration(self) -> Duration {
        self.spec().duration
    }

    /// The phase that follows this one in the cycle
    pub fn next(self) -> SignalPhase {
        self.spec().next
    }

    pub fn lamps(self) -> LampSet {
        match self {
            SignalPhase::Stop => LampSet {
                red: true,
                ..LampSet::default()
            },
            SignalPhase::Anticipation => LampSet {
                red: true,
                amber: true,
                green: false,
            },
            SignalPhase::Go => LampSet {
                green: true,
                ..LampSet::default()
            },
            SignalPhase::Caution => LampSet {
                amber: true,
                ..LampSet::default()
            },
        }
    }

    /// Whether a vehicle may cross the stop line
    pub fn allows_crossing(self) -> bool {
        self == SignalPhase::Go
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalPhase::Stop => "STOP",
            SignalPhase::Anticipation => "READY",
            SignalPhase::Go => "GO",
            SignalPhase::Caution => "CAUTION",
        }
    }
}

impl fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transition reported by [`SignalController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: SignalPhase,
    pub to: SignalPhase,
}

/// Holds the current phase and the time spent in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalController {
    phase: SignalPhase,
    elapsed_in_phase: Duration,
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalController {
    /// A controller at the start of the Stop phase
    pub fn new() -> Self {
        Self::starting_at(SignalPhase::Stop)
    }

    /// A controller at the start of an arbitrary phase
    pub fn starting_at(phase: SignalPhase) -> Self {
        Self {
            phase,
            elapsed_in_phase: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> SignalPhase {
        self.phase
    }

    pub fn elapsed_in_phase(&self) -> Duration {
        self.elapsed_in_phase
    }

    /// Time left before the next transition
    pub fn remaining_in_phase(&self) -> Duration {
        self.phase.duration().saturating_sub(self.elapsed_in_phase)
    }

    /// Accumulate `delta` and move to the next phase once its duration is reached.
    ///
    /// At most one transition happens per call. On a transition the elapsed
    /// time restarts at zero and any surplus beyond the phase duration is
    /// dropped, so a delta longer than a whole phase never skips phases.
    pub fn advance(&mut self, delta: Duration) -> Option<PhaseChange> {
        self.elapsed_in_phase = self.elapsed_in_phase.saturating_add(delta);

        if self.elapsed_in_phase < self.phase.duration() {
            return None;
        }

        let change = PhaseChange {
            from: self.phase,
            to: self.phase.next(),
        };
        self.phase = change.to;
        self.elapsed_in_phase = Duration::ZERO;
        debug!("Signal {} -> {}", change.from, change.to);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_their_index() {
        for (index, row) in PHASE_TABLE.iter().enumerate() {
            assert_eq!(row.phase as usize, index);
        }
    }

    #[test]
    fn successors_form_a_single_cycle() {
        let mut phase = SignalPhase::Stop;
        let mut seen = Vec::new();
        for _ in 0..PHASE_TABLE.len() {
            seen.push(phase);
            phase = phase.next();
        }
        assert_eq!(phase, SignalPhase::Stop);
        assert_eq!(seen, SignalPhase::ALL.to_vec());
    }
}
