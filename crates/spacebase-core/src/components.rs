//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::blueprints::Blueprint;
use crate::enums::*;
use crate::types::ResourceSet;

/// What a module contributes to the base while it exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleEffects {
    /// Per-tick production added on top of the base rates.
    pub rates: ResourceSet,
    /// Storage added on top of the base capacity.
    pub capacity: ResourceSet,
    /// Flat contribution to base integrity.
    pub integrity: f64,
}

/// An active module attached to the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub instance_id: String,
    pub blueprint_id: String,
    pub name: String,
    pub category: String,
    pub flavor: String,
    pub status: ModuleStatus,
    /// Structural integrity, 0-100.
    pub integrity: u32,
    pub rarity: Rarity,
    /// Creation order. Lower is older.
    pub ordinal: u64,
}

/// An in-flight construction project.
#[derive(Debug, Clone)]
pub struct Construction {
    pub project_id: u64,
    pub blueprint: &'static Blueprint,
    /// Ticks until completion. Never below zero.
    pub remaining: u32,
    /// Tick at which the project was queued.
    pub started_at_tick: u64,
}
