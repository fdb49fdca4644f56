//! Host-facing controls over a running game loop.
//!
//! The headless counterpart of an IPC layer: start the loop, forward
//! commands and input, poll the latest snapshot, shut down.

use anyhow::{anyhow, bail, Result};
use std::time::Duration;

use astroblast_core::commands::{PlayerCommand, TickInput};
use astroblast_core::state::SessionSnapshot;
use astroblast_sim::ports::AudioSink;
use astroblast_sim::SessionConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the game loop thread if it is not already running.
pub fn start_session(
    state: &AppState,
    config: SessionConfig,
    tick: Duration,
    audio: Box<dyn AudioSink + Send>,
) -> Result<()> {
    let mut running = state
        .running
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))?;
    if *running {
        bail!("session already running");
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, tick, audio, state.latest_snapshot.clone())?;

    *state
        .command_tx
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))? = Some(cmd_tx);
    *state
        .loop_handle
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))? = Some(handle);
    *running = true;
    Ok(())
}

pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<()> {
    send(state, GameLoopCommand::Player(command))
}

pub fn send_input(state: &AppState, input: TickInput) -> Result<()> {
    send(state, GameLoopCommand::Input(input))
}

/// Latest snapshot, or `None` before the first tick.
pub fn get_snapshot(state: &AppState) -> Result<Option<SessionSnapshot>> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|e| anyhow!("snapshot lock poisoned: {e}"))?;
    Ok(lock.clone())
}

/// Stop the loop thread and wait for it to exit.
pub fn stop_session(state: &AppState) -> Result<()> {
    let mut running = state
        .running
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))?;
    if !*running {
        return Ok(());
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))?
        .take()
    {
        // The loop may already have exited; a closed channel is fine.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state
        .loop_handle
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))?
        .take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?;
    }
    *running = false;
    Ok(())
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<()> {
    let lock = state
        .command_tx
        .lock()
        .map_err(|e| anyhow!("state lock poisoned: {e}"))?;
    let tx = lock
        .as_ref()
        .ok_or_else(|| anyhow!("session not started"))?;
    tx.send(message)
        .map_err(|_| anyhow!("game loop has stopped"))
}
