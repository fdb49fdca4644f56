//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use astroblast_core::commands::{PlayerCommand, TickInput};
use astroblast_core::state::SessionSnapshot;

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forwarded to the session's command queue.
    Player(PlayerCommand),
    /// Controls to apply from the next tick on.
    Input(TickInput),
    /// Stop the loop thread.
    Shutdown,
}

/// Host-side handle on a running game loop.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state can be shared across threads
/// - the latest snapshot sits behind `Arc<Mutex<..>>`, written by the loop thread
pub struct AppState {
    /// `None` until a session is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
