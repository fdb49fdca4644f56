//! Core types and definitions for the AstroBlast simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, entities, commands, events, snapshot views, constants and
//! the level tuning table. It has no dependency on any runtime or platform.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod error;
pub mod events;
pub mod level;
pub mod state;
pub mod types;
