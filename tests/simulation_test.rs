//! End-to-end crossing scenarios and headless binary checks

use std::process::Command;
use std::time::Duration;

use signal_crossing::simulation::{
    MotionStep, SignalController, SignalPhase, SimWorld, Vehicle, HOLD_X, STOP_LINE_X, TICK,
    VEHICLE_LENGTH, VEHICLE_START_X, WRAP_BOUND_X, WRAP_RESET_X,
};

/// Tick until the signal shows `phase`, returning how many ticks it took
fn tick_until(world: &mut SimWorld, phase: SignalPhase, limit: u32) -> u32 {
    for count in 1..=limit {
        world.tick(TICK);
        if world.phase() == phase {
            return count;
        }
    }
    panic!("signal never reached {:?} within {} ticks", phase, limit);
}

#[test]
fn test_new_world_matches_process_start() {
    let world = SimWorld::new();
    assert_eq!(world.phase(), SignalPhase::Stop);
    assert_eq!(world.vehicle.position_x, VEHICLE_START_X);
    assert_eq!(world.rendered_vehicle_x(), VEHICLE_START_X);
    assert_eq!(world.ticks, 0);
}

#[test]
fn test_vehicle_waits_through_stop_and_anticipation_then_goes() {
    let start = STOP_LINE_X - VEHICLE_LENGTH - 200.0;
    let mut world = SimWorld::with_parts(SignalController::new(), Vehicle::at(start));

    // 200 units at 0.8 per tick is 250 ticks, well inside the 6s Stop phase
    for _ in 0..260 {
        world.tick(TICK);
    }
    assert_eq!(world.phase(), SignalPhase::Stop);
    assert_eq!(world.vehicle.position_x, HOLD_X);
    assert_eq!(world.vehicle.leading_edge(), STOP_LINE_X);

    // Frozen for the rest of Stop and all of Anticipation
    loop {
        let report = world.tick(TICK);
        if world.phase() == SignalPhase::Go {
            assert_eq!(report.motion, MotionStep::Cruising);
            break;
        }
        assert_eq!(report.motion, MotionStep::Holding);
        assert_eq!(world.vehicle.position_x, HOLD_X);
    }

    assert!(world.vehicle.position_x > HOLD_X);
    assert_eq!(world.vehicle.oscillation_offset, 0.0);
}

#[test]
fn test_vehicle_jitters_during_anticipation() {
    let mut world = SimWorld::with_parts(SignalController::new(), Vehicle::at(HOLD_X));
    tick_until(&mut world, SignalPhase::Anticipation, 1000);

    let mut saw_jitter = false;
    while world.phase() == SignalPhase::Anticipation {
        let frame = world.frame();
        assert_eq!(frame.vehicle_x, HOLD_X);
        assert!((frame.rendered_x - frame.vehicle_x).abs() <= 2.5 + 1e-3);
        saw_jitter |= frame.rendered_x != frame.vehicle_x;
        world.tick(TICK);
    }
    assert!(saw_jitter);
}

#[test]
fn test_stop_line_never_crossed_outside_go() {
    let mut world = SimWorld::new();
    // Several full cycles, including wrap-arounds
    for _ in 0..10_000 {
        world.tick(TICK);
        if world.phase() != SignalPhase::Go {
            assert!(
                world.vehicle.leading_edge() <= STOP_LINE_X,
                "crossed the line at tick {} in {:?}",
                world.ticks,
                world.phase()
            );
        }
    }
    assert!(world.stats.wraps > 0);
    assert!(world.stats.completed_cycles >= 9);
}

#[test]
fn test_wrap_resets_regardless_of_phase() {
    for phase in SignalPhase::ALL {
        let mut world = SimWorld::with_parts(
            SignalController::starting_at(phase),
            Vehicle::at(WRAP_BOUND_X + 25.0),
        );
        let report = world.tick(TICK);
        assert_eq!(report.motion, MotionStep::Wrapped);
        assert_eq!(world.vehicle.position_x, WRAP_RESET_X);
        assert_eq!(world.stats.wraps, 1);
    }
}

#[test]
fn test_signal_advances_before_vehicle() {
    // One tick short of Go: the transition tick must already move the car
    let mut signal = SignalController::starting_at(SignalPhase::Anticipation);
    signal.advance(SignalPhase::Anticipation.duration() - TICK);
    let mut world = SimWorld::with_parts(signal, Vehicle::at(HOLD_X));

    let report = world.tick(TICK);
    assert!(report.phase_change.is_some());
    assert_eq!(world.phase(), SignalPhase::Go);
    assert_eq!(report.motion, MotionStep::Cruising);
}

#[test]
fn test_full_cycle_counts() {
    let mut world = SimWorld::new();
    for phase in SignalPhase::ALL {
        world.signal = SignalController::starting_at(phase);
        world.tick(phase.duration());
    }
    assert_eq!(world.phase(), SignalPhase::Stop);
    assert_eq!(world.stats.phase_changes, 4);
    assert_eq!(world.stats.completed_cycles, 1);
    assert_eq!(world.time, Duration::from_millis(17_500));
}

#[test]
fn test_strip_shows_stop_line_car_and_lamps() {
    let world = SimWorld::new();
    let strip = world.draw_strip();
    assert!(strip.ends_with(" [R--]"));
    assert!(strip.contains('|'));
    assert!(strip.contains('#'));

    let held = SimWorld::with_parts(
        SignalController::starting_at(SignalPhase::Go),
        Vehicle::at(HOLD_X),
    );
    let strip = held.draw_strip();
    assert!(strip.ends_with(" [--G]"));
    // Leading edge sits on the stop line column
    assert!(strip.contains('!'));
}

#[test]
fn test_headless_binary_runs() {
    let output = Command::new(env!("CARGO_BIN_EXE_signal_crossing"))
        .args(["--ticks", "400", "--frame-every", "100"])
        .env("RUST_LOG", "warn,signal_crossing=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(
        output.status.success(),
        "Simulation failed in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Initial frame plus one every 100 ticks, two lines each
    assert_eq!(stdout.lines().count(), 10, "stdout: {}", stdout);
    assert!(stdout.contains("[R--]"));
    assert!(stdout.contains("[RA-]"));
    assert!(stderr.contains("Signal STOP -> READY"), "stderr: {}", stderr);
    assert!(stderr.contains("RUN COMPLETE"), "stderr: {}", stderr);
}

#[test]
fn test_headless_binary_rejects_zero_frame_interval() {
    let output = Command::new(env!("CARGO_BIN_EXE_signal_crossing"))
        .args(["--ticks", "10", "--frame-every", "0"])
        .output()
        .expect("Failed to execute simulation");

    assert!(!output.status.success());
}
