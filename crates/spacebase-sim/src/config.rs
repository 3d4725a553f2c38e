//! Configuration for starting a new simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spacebase_core::blueprints::{find_blueprint, starting_capacity};
use spacebase_core::constants::STARTING_RESOURCES;
use spacebase_core::enums::ResourceKind;
use spacebase_core::types::ResourceSet;

/// Why a `SimConfig` cannot start a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimConfigError {
    #[error("starting resources must be finite and non-negative")]
    InvalidStock,
    #[error("starting {} ({value}) exceeds capacity ({capacity})", .kind.label().to_lowercase())]
    OverCapacity {
        kind: ResourceKind,
        value: f64,
        capacity: f64,
    },
    #[error("unknown blueprint '{0}'")]
    UnknownBlueprint(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Blueprint selected at start. `None` picks the first catalog entry.
    pub selected_blueprint: Option<String>,
    /// Ledger before the first tick.
    pub starting_resources: ResourceSet,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            selected_blueprint: None,
            starting_resources: STARTING_RESOURCES,
        }
    }
}

impl SimConfig {
    /// Check that the config describes a reachable starting state.
    pub fn validate(&self) -> Result<(), SimConfigError> {
        if !self.starting_resources.is_valid_stock() {
            return Err(SimConfigError::InvalidStock);
        }

        let capacity = starting_capacity();
        for (kind, value) in self.starting_resources.iter() {
            if value > capacity[kind] {
                return Err(SimConfigError::OverCapacity {
                    kind,
                    value,
                    capacity: capacity[kind],
                });
            }
        }

        if let Some(id) = &self.selected_blueprint {
            if find_blueprint(id).is_none() {
                return Err(SimConfigError::UnknownBlueprint(id.clone()));
            }
        }

        Ok(())
    }
}
