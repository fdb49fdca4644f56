//! Boss behavior for AstroBlast.
//!
//! Movement state machine and the repeating firing cycle. Pure functions
//! over plain data; the session owns the boss entity and applies results.

pub mod cycle;
pub mod fsm;

pub use astroblast_core as core;

#[cfg(test)]
mod tests;
