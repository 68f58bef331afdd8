//! Fixed-timestep loop driving the simulation
//!
//! Every iteration waits for the next tick boundary and hands back the
//! fixed delta to advance by. Unpaced loops skip the wait so headless runs
//! and tests finish immediately.

use log::debug;
use std::thread;
use std::time::{Duration, Instant};

/// A single-threaded fixed-rate ticker
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    paced: bool,
    next_deadline: Option<Instant>,
}

impl FixedTimestep {
    /// Tick at wall-clock rate, sleeping between ticks
    pub fn paced(step: Duration) -> Self {
        Self {
            step,
            paced: true,
            next_deadline: None,
        }
    }

    /// Tick as fast as the caller can consume them
    pub fn unpaced(step: Duration) -> Self {
        Self {
            step,
            paced: false,
            next_deadline: None,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Block until the next tick boundary and return the delta to advance by.
    ///
    /// The first call returns immediately. A loop that falls more than one
    /// step behind re-anchors on the current instant rather than bursting
    /// through the missed ticks.
    pub fn wait(&mut self) -> Duration {
        if !self.paced {
            return self.step;
        }

        let now = Instant::now();
        match self.next_deadline {
            None => {
                self.next_deadline = Some(now + self.step);
            }
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                self.next_deadline = Some(deadline + self.step);
            }
            Some(deadline) => {
                let behind = now - deadline;
                if behind > self.step {
                    debug!("Ticker fell behind by {:?}, re-anchoring", behind);
                    self.next_deadline = Some(now + self.step);
                } else {
                    self.next_deadline = Some(deadline + self.step);
                }
            }
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaced_returns_step_without_sleeping() {
        let mut ticker = FixedTimestep::unpaced(Duration::from_millis(500));
        let started = Instant::now();
        for _ in 0..10 {
            assert_eq!(ticker.wait(), Duration::from_millis(500));
        }
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn paced_spaces_ticks_by_at_least_one_step() {
        let step = Duration::from_millis(5);
        let mut ticker = FixedTimestep::paced(step);
        let started = Instant::now();
        for _ in 0..4 {
            ticker.wait();
        }
        // First wait is immediate, the remaining three each wait one step
        assert!(started.elapsed() >= step * 3);
    }
}
