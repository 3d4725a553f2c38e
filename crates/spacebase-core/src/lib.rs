//! Core types and definitions for the SPACE_BASES economy simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! resources, the blueprint catalog, components, commands, log entries,
//! snapshot views and tuning constants. Its only dependency is serde.

pub mod blueprints;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
