//! Base economy simulation for SPACE_BASES.
//!
//! Owns the hecs ECS world holding modules and construction projects,
//! advances the resource economy one tick at a time, applies player
//! actions immediately, and produces `BaseSnapshot`s for a frontend.

pub mod config;
pub mod engine;
pub mod mission_log;
pub mod systems;
pub mod world_setup;

pub use config::{SimConfig, SimConfigError};
pub use engine::{ActionOutcome, BaseSimulation};
pub use spacebase_core as core;
