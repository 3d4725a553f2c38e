//! ECS systems that operate on the base world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Ledger and log state is passed in by the engine.

pub mod construction;
pub mod economy;
pub mod snapshot;
