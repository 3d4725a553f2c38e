//! SPACE_BASES headless driver.
//!
//! Runs the base simulation on a game-loop thread at a fixed wall-clock
//! period, feeds it player commands read from stdin, and emits snapshots
//! as JSON lines.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod logger;
pub mod state;

pub use spacebase_core as core;
