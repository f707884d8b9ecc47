//! Recent actions log
//!
//! Keeps the last few user-visible actions, newest first. Purely cosmetic.

use std::collections::VecDeque;

use chrono::Local;
use uuid::Uuid;

/// 最多保留的操作记录数
pub const ACTION_LOG_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogEntry {
    pub id: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action stamped with the local wall-clock time
    pub fn log(&mut self, message: impl Into<String>) -> &ActionLogEntry {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.push(ActionLogEntry {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            timestamp,
        })
    }

    pub fn push(&mut self, entry: ActionLogEntry) -> &ActionLogEntry {
        self.entries.push_front(entry);
        self.entries.truncate(ACTION_LOG_CAPACITY);
        &self.entries[0]
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ActionLogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
