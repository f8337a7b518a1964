//! Robo Harvest entry point
//!
//! Headless native driver: runs the fixed-rate frame loop with the autopilot
//! at the controls and renders every frame into a recording canvas. A
//! windowed backend plugs into the same `tick` + `draw_frame` pair.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use robo_harvest::GameConfig;
use robo_harvest::consts::FRAME_RATE;
use robo_harvest::platform::InputEvent;
use robo_harvest::renderer::{CommandBuffer, draw_frame};
use robo_harvest::sim::{FrameInput, GameEvent, Session, tick};

#[derive(Parser, Debug)]
#[command(name = "robo-harvest", about = "Let the robot clear the garden on its own")]
struct Args {
    /// RNG seed for the vegetable layout (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rounds to play, restarting through the "Play again" button
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Give up after this many frames
    #[arg(long, default_value_t = 100_000)]
    max_frames: u64,

    /// Write the draw commands of the last frame as JSON
    #[arg(long)]
    dump_frame: Option<PathBuf>,
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Robo Harvest (native) starting, seed {}", seed);

    let mut session = Session::new(config, seed);
    let mut canvas = CommandBuffer::new();
    let mut cleared_rounds = 0;
    let mut harvested = 0;

    while session.frame() < args.max_frames {
        let mut input = FrameInput {
            autopilot: true,
            ..Default::default()
        };

        // Press "Play again" once the last vegetable has faded out
        if session.is_complete() && session.garden.is_empty() {
            if cleared_rounds >= args.rounds {
                break;
            }
            let button = session.config().restart_button().center();
            input.events.push(InputEvent::Click {
                x: button.x,
                y: button.y,
            });
        }

        tick(&mut session, &input);

        for event in session.drain_events() {
            match event {
                GameEvent::Harvested { .. } => harvested += 1,
                GameEvent::GardenCleared { round } => {
                    cleared_rounds += 1;
                    log::info!(
                        "Round {} cleared at frame {} ({:.1}s)",
                        round,
                        session.frame(),
                        session.frame() as f32 / FRAME_RATE as f32
                    );
                }
                GameEvent::Restarted { .. } => {}
            }
        }

        canvas.clear_commands();
        draw_frame(&session, &mut canvas);
    }

    println!(
        "seed {}: {} rounds cleared, {} vegetables harvested in {} frames",
        seed,
        cleared_rounds,
        harvested,
        session.frame()
    );

    if let Some(path) = &args.dump_frame {
        let written = canvas
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
        if let Err(e) = written {
            log::error!("Failed to write frame dump {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        log::info!("Last frame written to {}", path.display());
    }

    if cleared_rounds < args.rounds {
        log::warn!(
            "Stopped after {} frames with {} of {} rounds cleared",
            session.frame(),
            cleared_rounds,
            args.rounds
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
