//! Base state snapshot: the complete visible state handed to a frontend.

use serde::{Deserialize, Serialize};

use crate::components::ModuleEffects;
use crate::enums::*;
use crate::events::LogEntry;
use crate::types::SimTime;

/// Complete base state, produced after each tick or action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseSnapshot {
    pub time: SimTime,
    /// One row per resource kind, in display order.
    pub resources: Vec<ResourceView>,
    /// Overall base integrity, 0-100.
    pub base_integrity: u32,
    /// Active modules, oldest first.
    pub modules: Vec<ModuleView>,
    /// In-flight projects, in queue order.
    pub projects: Vec<ProjectView>,
    pub selected_blueprint: String,
    pub log: Vec<LogEntry>,
}

/// A resource gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceView {
    pub kind: ResourceKind,
    pub quantity: f64,
    pub capacity: f64,
    /// Production per tick.
    pub rate: f64,
    /// How full storage is, 0-100.
    pub fill_percent: u32,
}

/// An active module card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleView {
    pub instance_id: String,
    pub blueprint_id: String,
    pub name: String,
    pub category: String,
    pub flavor: String,
    pub status: ModuleStatus,
    pub integrity: u32,
    pub rarity: Rarity,
    pub effects: ModuleEffects,
}

/// A construction queue row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectView {
    pub project_id: u64,
    pub blueprint_id: String,
    pub name: String,
    pub remaining: u32,
    pub build_ticks: u32,
    /// Build progress, 0-100.
    pub progress_percent: u32,
    pub started_at_tick: u64,
}
