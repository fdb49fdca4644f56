//! Game loop: drives a `Session` at a fixed wall-clock cadence on its own
//! thread, or as a deterministic fixed-step run for batch use.
//!
//! The session is created inside the loop thread and never leaves it.
//! Commands and input arrive over an `mpsc` channel; each snapshot is stored
//! in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use astroblast_core::commands::TickInput;
use astroblast_core::enums::SessionPhase;
use astroblast_core::events::GameEvent;
use astroblast_core::state::SessionSnapshot;
use astroblast_core::types::Viewport;
use astroblast_sim::ports::AudioSink;
use astroblast_sim::{LevelAdvance, Session, SessionConfig};

use crate::state::GameLoopCommand;

/// Nominal tick length (30 Hz).
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 30);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SessionConfig,
    tick: Duration,
    audio: Box<dyn AudioSink + Send>,
    latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("astroblast-game-loop".into())
        .spawn(move || {
            let session = Session::with_ports(config, audio, Box::new(Viewport::default()));
            run_game_loop(session, tick, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut session: Session,
    tick: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SessionSnapshot>>,
) {
    let dt = tick.as_secs_f32();
    let mut input = TickInput::idle();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => session.queue_command(cmd),
                Ok(GameLoopCommand::Input(latest)) => input = latest,
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (session handles pause and terminal states)
        let snapshot = session.tick(dt, &input);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind; reset rather than replay a burst of ticks
            debug!(behind = ?(now - next_tick_time), "game loop fell behind");
            next_tick_time = now;
        }
    }
}

/// Settings for a fixed-step run.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    pub max_ticks: u64,
    pub dt: f32,
    /// Move on to the next tier when a level completes, instead of stopping.
    pub advance_on_complete: bool,
}

/// Summary of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub ticks: u64,
    pub final_level: u32,
    pub score: u32,
    pub lives: u32,
    pub phase: SessionPhase,
    pub levels_completed: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
    pub hits_taken: u32,
    pub campaign_complete: bool,
}

impl RunReport {
    /// Fold one snapshot's events and status into the report.
    pub fn record(&mut self, snapshot: &SessionSnapshot) {
        for event in &snapshot.events {
            match event {
                GameEvent::PlayerFired { .. } => self.shots_fired += 1,
                GameEvent::EnemyDestroyed { .. } => self.enemies_destroyed += 1,
                GameEvent::PlayerHit { .. } => self.hits_taken += 1,
                GameEvent::LevelCompleted { .. } => self.levels_completed += 1,
                _ => {}
            }
        }
        self.final_level = snapshot.level;
        self.score = snapshot.score;
        self.lives = snapshot.lives;
        self.phase = snapshot.phase;
    }
}

/// Run `session` for up to `options.max_ticks` fixed steps, asking `steer` for
/// each tick's input. Stops early on game over, on campaign completion, or on
/// level completion when not advancing.
pub fn run_headless(
    session: &mut Session,
    options: HeadlessOptions,
    mut steer: impl FnMut(&SessionSnapshot) -> TickInput,
) -> RunReport {
    let mut report = RunReport::default();
    let mut last = session.snapshot();
    report.record(&last);

    while report.ticks < options.max_ticks {
        let input = steer(&last);
        last = session.tick(options.dt, &input);
        report.ticks += 1;
        report.record(&last);

        match last.phase {
            SessionPhase::GameOver | SessionPhase::CampaignComplete => break,
            SessionPhase::LevelCompleted if options.advance_on_complete => {
                if session.advance_to_next_level() == LevelAdvance::CampaignComplete {
                    report.campaign_complete = true;
                    report.phase = session.phase();
                    break;
                }
                last = session.snapshot();
                report.record(&last);
            }
            SessionPhase::LevelCompleted => break,
            SessionPhase::Active | SessionPhase::Paused => {}
        }
    }

    report
}
