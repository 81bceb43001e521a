//! Crimson Pong headless runner
//!
//! Plays a full match with an autopilot standing in for the mouse, routing
//! events through the same audio/UI/render boundaries a real host uses.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use crimson_pong::audio::LogAudio;
use crimson_pong::sim::{GameState, RenderSink, Snapshot};
use crimson_pong::ui::Hud;
use crimson_pong::{FrameDriver, InputAdapter, InputEvent, Tuning};

/// Frame length of the simulated 60 Hz display
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Frames the autopilot waits before serving
const SERVE_DELAY: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "crimson-pong", about = "Headless Crimson Pong match runner")]
struct Args {
    /// Seed for cosmetic randomness
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Stop after this many frames even if the match is still running
    #[arg(long, default_value_t = 60 * 60 * 10)]
    frames: u64,

    /// JSON tuning file (missing fields use defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the default tuning as JSON and exit
    #[arg(long)]
    dump_tuning: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Counts frames and tracks effect load instead of drawing
#[derive(Default)]
struct StatsRenderer {
    frames: u64,
    peak_particles: usize,
}

impl RenderSink for StatsRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self.frames += 1;
        self.peak_particles = self.peak_particles.max(snapshot.particles.len());
    }
}

/// Follows the ball with a wandering error so both sides win points
fn autopilot_pointer(state: &GameState, frame: u64) -> Vec2 {
    let t = frame as f32 * 0.013;
    let error = t.sin() * 60.0 + (t * 2.7).sin() * 25.0;
    Vec2::new(state.player.center().x, state.ball.pos.y + error)
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("parsing tuning file {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    if args.dump_tuning {
        println!("{}", Tuning::default().to_json()?);
        return Ok(());
    }

    let tuning = load_tuning(args.tuning.as_ref())?;
    log::info!("Crimson Pong (headless) starting, seed {}", args.seed);

    let state = GameState::new(args.seed, tuning);
    let mut driver = FrameDriver::new(
        state,
        InputAdapter::default(),
        LogAudio::default(),
        Hud::new(),
    );
    let mut renderer = StatsRenderer::default();
    let mut serving_since = 0;
    let mut watched_ending = false;

    for frame in 0..args.frames {
        let pointer = autopilot_pointer(&driver.state, frame);
        driver.handle_input(InputEvent::PointerMoved {
            x: pointer.x,
            y: pointer.y,
        });

        if driver.state.is_serving() && !driver.state.is_game_over() {
            serving_since += 1;
            if serving_since >= SERVE_DELAY {
                driver.handle_input(InputEvent::Click);
                serving_since = 0;
            }
        }

        driver.frame(frame as f64 * FRAME_MS, &mut renderer);

        if driver.state.is_game_over() && driver.state.is_paused() {
            if watched_ending {
                break;
            }
            // Resume once to let the loser's paddle fall off court
            watched_ending = true;
            driver.resume();
        }
    }

    let (player, opponent) = driver.state.scores();
    log::info!(
        "Finished after {} frames, {} sounds, peak {} particles, {} stains",
        renderer.frames,
        driver.audio.sink().played,
        renderer.peak_particles,
        driver.state.stains.len()
    );

    if args.json {
        let json = serde_json::to_string_pretty(&driver.state.snapshot())
            .context("serializing final snapshot")?;
        println!("{json}");
    } else {
        let result = match driver.state.winner() {
            Some(winner) => format!("{} wins", winner.as_str()),
            None => "no winner yet".to_string(),
        };
        println!("Final score {player} - {opponent} ({result})");
    }

    Ok(())
}
