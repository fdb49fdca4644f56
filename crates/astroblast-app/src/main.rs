use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use astroblast_app::audio::LoggingAudio;
use astroblast_app::autopilot::Autopilot;
use astroblast_app::control;
use astroblast_app::game_loop::{run_headless, HeadlessOptions, RunReport, TICK_DURATION};
use astroblast_app::state::AppState;
use astroblast_core::commands::PlayerCommand;
use astroblast_core::enums::SessionPhase;
use astroblast_core::level::LevelTable;
use astroblast_core::types::Viewport;
use astroblast_sim::{Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "astroblast")]
#[command(about = "Run the AstroBlast simulation headless with an autopilot")]
struct Cli {
    /// RNG seed; the same seed replays the same session
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Level to start on
    #[arg(long, default_value_t = 1)]
    level: u32,
    /// Simulated seconds to run for
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,
    /// Tick length in milliseconds
    #[arg(long, default_value_t = TICK_DURATION.as_millis() as u64)]
    tick_ms: u64,
    /// JSON level table replacing the built-in tuning
    #[arg(long)]
    levels: Option<PathBuf>,
    /// Drive the game loop thread at wall-clock speed instead of a fixed-step run
    #[arg(long)]
    realtime: bool,
    /// Move on to the next level after completing one
    #[arg(long)]
    advance: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let levels = match &cli.levels {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading level table {}", path.display()))?;
            LevelTable::from_json(&json)
                .with_context(|| format!("parsing level table {}", path.display()))?
        }
        None => LevelTable::default(),
    };
    let config = SessionConfig {
        seed: cli.seed,
        levels,
        start_level: cli.level,
    };
    let tick = Duration::from_millis(cli.tick_ms.max(1));
    let max_ticks = (f64::from(cli.seconds.max(0.0)) / tick.as_secs_f64()).ceil() as u64;

    let report = if cli.realtime {
        run_realtime(config, tick, max_ticks, cli.advance)?
    } else {
        let mut session = Session::with_ports(
            config,
            Box::new(LoggingAudio::new()),
            Box::new(Viewport::default()),
        );
        let pilot = Autopilot::new();
        run_headless(
            &mut session,
            HeadlessOptions {
                max_ticks,
                dt: tick.as_secs_f32(),
                advance_on_complete: cli.advance,
            },
            |snapshot| pilot.steer(snapshot),
        )
    };

    info!(
        ticks = report.ticks,
        score = report.score,
        level = report.final_level,
        "run finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Run on the game loop thread, steering from the latest snapshot.
///
/// Event counts are sampled from polled snapshots, so ticks the host did
/// not observe are missing from them.
fn run_realtime(config: SessionConfig, tick: Duration, max_ticks: u64, advance: bool) -> Result<RunReport> {
    let max_level = config.levels.max_level();
    let state = AppState::new();
    control::start_session(&state, config, tick, Box::new(LoggingAudio::new()))?;

    let pilot = Autopilot::new();
    let deadline = Instant::now() + tick.saturating_mul(u32::try_from(max_ticks).unwrap_or(u32::MAX));
    let mut report = RunReport::default();
    let mut last_seen = None;

    while Instant::now() < deadline {
        std::thread::sleep(tick);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        let seen = (snapshot.level, snapshot.time.tick);
        if last_seen != Some(seen) {
            report.record(&snapshot);
            report.ticks += 1;
            last_seen = Some(seen);
        }

        match snapshot.phase {
            SessionPhase::LevelCompleted if advance => {
                if snapshot.level >= max_level {
                    report.campaign_complete = true;
                    break;
                }
                control::send_command(&state, PlayerCommand::AdvanceLevel)?;
            }
            SessionPhase::LevelCompleted | SessionPhase::GameOver | SessionPhase::CampaignComplete => break,
            SessionPhase::Active | SessionPhase::Paused => {
                control::send_input(&state, pilot.steer(&snapshot))?;
            }
        }
    }

    control::stop_session(&state)?;
    Ok(report)
}
