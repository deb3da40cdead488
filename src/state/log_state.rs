//! LogState - Activity Log with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff),  // Green
            LogLevel::Warn => gpui::rgba(0xf59e0bff),  // Amber
            LogLevel::Error => gpui::rgba(0xef4444ff), // Red
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Activity log shown under the table
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a new log entry, evicting the oldest when full
    pub fn push(
        &mut self,
        level: LogLevel,
        message: impl Into<String>,
        timestamp: DateTime<Local>,
    ) {
        if self.capacity == 0 {
            return;
        }

        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Get all log entries, oldest first
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries at `level` or more severe
    pub fn count_at_least(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level >= level).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::ACTIVITY_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_eviction() {
        let mut logs = LogState::new(2);
        logs.push(LogLevel::Info, "page 1 loaded", Local::now());
        logs.push(LogLevel::Warn, "page 2 failed", Local::now());
        logs.push(LogLevel::Info, "page 2 loaded", Local::now());

        let messages: Vec<_> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["page 2 failed", "page 2 loaded"]);
        assert_eq!(logs.entries().back().map(|e| e.id), Some(3));
    }

    #[test]
    fn test_zero_capacity() {
        let mut logs = LogState::new(0);
        logs.push(LogLevel::Error, "dropped", Local::now());
        assert!(logs.is_empty());
    }

    #[test]
    fn test_count_at_least() {
        let mut logs = LogState::new(10);
        logs.push(LogLevel::Info, "page 1 loaded", Local::now());
        logs.push(LogLevel::Warn, "selection cancelled", Local::now());
        logs.push(LogLevel::Error, "page 3 failed", Local::now());

        assert_eq!(logs.count_at_least(LogLevel::Info), 3);
        assert_eq!(logs.count_at_least(LogLevel::Warn), 2);
        assert_eq!(logs.count_at_least(LogLevel::Error), 1);
    }
}
