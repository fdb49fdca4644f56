//! AstroBlast headless host.
//!
//! Drives a `Session` either on a wall-clock game-loop thread fed through a
//! command channel, or as a deterministic fixed-step run. Audio goes to the
//! log; input comes from a simple autopilot.

pub mod audio;
pub mod autopilot;
pub mod control;
pub mod game_loop;
pub mod state;

pub use astroblast_core as core;
