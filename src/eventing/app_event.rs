//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::services::catalog::PageLoad;
use crate::services::eager_select::EagerOutcome;
use crate::state::log_state::LogLevel;
use crate::state::table_state::TableKind;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Activity log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// A page fetch finished (successfully or not)
    PageLoaded { table: TableKind, load: PageLoad },

    /// An eager selection finished
    SelectionFinished {
        table: TableKind,
        generation: u64,
        outcome: EagerOutcome,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}
