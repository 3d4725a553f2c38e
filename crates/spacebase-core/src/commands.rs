//! Player commands sent from a frontend to the simulation.
//!
//! Commands take effect immediately when applied; they are not deferred to
//! the next tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Construction ---
    /// Choose the blueprint used by `QueueSelected`.
    SelectBlueprint { blueprint_id: String },
    /// Start building a specific blueprint.
    QueueBuild { blueprint_id: String },
    /// Start building the currently selected blueprint.
    QueueSelected,
    /// Spend energy to shorten a project's timer.
    BoostProject { project_id: u64 },

    // --- Operations ---
    /// Receive a free supply shuttle.
    SupplyDrop,
    /// Roll for salvage that improves alloy yield.
    DeepScan,
    /// Empty the mission log.
    ClearLog,
}
