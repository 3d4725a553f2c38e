//! Driver configuration, loaded from TOML.
//!
//! ```toml
//! tick_interval_ms = 1000
//! max_ticks = 600
//!
//! [sim]
//! seed = 7
//! selected_blueprint = "hab-ring"
//!
//! [sim.starting_resources]
//! energy = 520
//! alloys = 260
//! ```
//!
//! Every key is optional. A `starting_resources` table replaces the whole
//! default ledger; kinds it leaves out start at zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spacebase_core::constants::TICK_RATE;
use spacebase_sim::{SimConfig, SimConfigError};

/// Default wall-clock period between ticks, one tick per `TICK_RATE` hertz.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000 / TICK_RATE as u64;

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("invalid config: {0}")]
    Sim(#[from] SimConfigError),
}

/// Top-level driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Wall-clock milliseconds per tick.
    pub tick_interval_ms: u64,
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    pub sim: SimConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            max_ticks: None,
            sim: SimConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".into(),
            ));
        }
        self.sim.validate()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
