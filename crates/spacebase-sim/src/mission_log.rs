//! Mission log: bounded feed of player-facing messages.
//!
//! Stored in `BaseSimulation`, NOT as ECS entities.

use std::collections::VecDeque;

use spacebase_core::constants::{LOG_BOOT_MESSAGE, LOG_CAPACITY};
use spacebase_core::enums::LogTone;
use spacebase_core::events::LogEntry;

/// Append-only log that keeps the most recent `LOG_CAPACITY` entries.
#[derive(Debug, Clone)]
pub struct MissionLog {
    entries: VecDeque<LogEntry>,
    next_id: u64,
}

impl Default for MissionLog {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
            next_id: 0,
        }
    }
}

impl MissionLog {
    /// A log holding only the boot message.
    pub fn booted() -> Self {
        let mut log = Self::default();
        log.push(LogTone::Info, LOG_BOOT_MESSAGE);
        log
    }

    /// Append an entry, evicting the oldest once full.
    pub fn push(&mut self, tone: LogTone, message: impl Into<String>) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id: self.next_id,
            message: message.into(),
            tone,
        });
        self.next_id += 1;
    }

    /// Drop every entry. Ids keep counting up.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}
