//! Simulation core for AstroBlast.
//!
//! `Session` owns every entity collection, processes commands, runs the
//! per-tick systems and produces `SessionSnapshot`s. Headless: audio,
//! display and input reach it only through the traits in [`ports`].

pub mod ports;
pub mod session;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use astroblast_core as core;
pub use session::{LevelAdvance, Session, SessionConfig};
