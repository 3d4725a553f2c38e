//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The five stockpiled resources of a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Energy,
    Alloys,
    Credits,
    Research,
    Crew,
}

impl ResourceKind {
    /// Every resource kind, in display order.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Energy,
        ResourceKind::Alloys,
        ResourceKind::Credits,
        ResourceKind::Research,
        ResourceKind::Crew,
    ];

    /// Human-readable label ("Energy", "Alloys", ...).
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Energy => "Energy",
            ResourceKind::Alloys => "Alloys",
            ResourceKind::Credits => "Credits",
            ResourceKind::Research => "Research",
            ResourceKind::Crew => "Crew",
        }
    }
}

/// Operational status of an active module.
///
/// Completed builds always come online. Nothing in the simulation currently
/// produces `Damaged`; it exists so snapshots can carry the status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    #[default]
    Online,
    Damaged,
}

/// Rarity tier shown on module cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Shipped with the base at session start.
    Core,
    #[default]
    Advanced,
    /// Built from an experimental blueprint.
    Prototype,
}

/// Tone of a mission log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTone {
    Success,
    Warning,
    Info,
}
