use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, Write};

use signal_crossing::simulation::{FixedTimestep, SimWorld, TICK};

#[derive(Parser)]
#[command(name = "signal_crossing")]
#[command(about = "Single signalised crossing with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "1200")]
    ticks: u64,

    /// Print a frame every N ticks in headless mode
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    frame_every: u64,

    /// Pace headless ticks to wall-clock time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
        }
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,signal_crossing=info"),
    )
    .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_headless(&cli, &mut out)
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut ticker = if cli.realtime {
        FixedTimestep::paced(TICK)
    } else {
        FixedTimestep::unpaced(TICK)
    };
    let mut world = SimWorld::new();

    info!(
        "Running crossing headless: {} ticks of {}ms{}",
        cli.ticks,
        ticker.step().as_millis(),
        if cli.realtime { ", paced" } else { "" }
    );

    write_frame(out, &world)?;

    for _ in 0..cli.ticks {
        let delta = ticker.wait();
        let report = world.tick(delta);

        if let Some(change) = report.phase_change {
            info!(
                "Signal {} -> {} at {:.2}s",
                change.from,
                change.to,
                world.time.as_secs_f32()
            );
        }

        if world.ticks % cli.frame_every == 0 {
            write_frame(out, &world)?;
        }
    }

    world.log_totals();
    out.flush().context("Failed to flush frame output")
}

fn write_frame(out: &mut impl Write, world: &SimWorld) -> Result<()> {
    writeln!(out, "{}", world.summary()).context("Failed to write summary")?;
    writeln!(out, "{}", world.draw_strip()).context("Failed to write lane strip")?;
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use signal_crossing::simulation::{FIELD_HEIGHT, FIELD_WIDTH};

    println!("Starting Signal Crossing UI...");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,signal_crossing=info".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Signal Crossing".into(),
                        resolution: (FIELD_WIDTH as u32, FIELD_HEIGHT as u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(signal_crossing::ui::SignalCrossingUIPlugin)
        .run();
}
