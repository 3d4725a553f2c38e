//! Mission log entries emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::LogTone;

/// One line of the mission log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique within a session, increasing.
    pub id: u64,
    pub message: String,
    pub tone: LogTone,
}
