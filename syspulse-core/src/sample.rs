//! Sample and record types
//!
//! A [`Sample`] is one utilization reading; a [`Record`] is what sinks
//! accept, covering data samples as well as session-boundary messages.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used when rendering records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One host utilization reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// CPU utilization percentage (0.0-100.0)
    pub cpu_percent: f64,

    /// Memory utilization percentage (0.0-100.0)
    pub memory_percent: f64,

    /// When the reading was taken
    pub timestamp: DateTime<Local>,
}

impl Sample {
    /// Create a sample stamped with the current local time (percentages
    /// clamped to 0.0-100.0)
    pub fn new(cpu_percent: f64, memory_percent: f64) -> Self {
        Self {
            cpu_percent: cpu_percent.clamp(0.0, 100.0),
            memory_percent: memory_percent.clamp(0.0, 100.0),
            timestamp: Local::now(),
        }
    }
}

/// A single line destined for the sinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// When the record was produced
    pub timestamp: DateTime<Local>,

    /// What the record carries
    pub kind: RecordKind,
}

/// Payload of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordKind {
    /// A utilization reading
    Sample {
        /// CPU utilization percentage (0.0-100.0)
        cpu_percent: f64,
        /// Memory utilization percentage (0.0-100.0)
        memory_percent: f64,
    },

    /// A session-boundary message
    Message(String),

    /// A fatal error that ended the session
    Error(String),
}

impl Record {
    /// Create a message record stamped with the current local time
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind: RecordKind::Message(message.into()),
        }
    }

    /// Create an error record stamped with the current local time
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind: RecordKind::Error(message.into()),
        }
    }
}

impl From<Sample> for Record {
    fn from(sample: Sample) -> Self {
        Self {
            timestamp: sample.timestamp,
            kind: RecordKind::Sample {
                cpu_percent: sample.cpu_percent,
                memory_percent: sample.memory_percent,
            },
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.format(TIMESTAMP_FORMAT);
        match &self.kind {
            RecordKind::Sample {
                cpu_percent,
                memory_percent,
            } => write!(
                f,
                "{} - CPU: {:.1}%, Memory: {:.1}%",
                timestamp, cpu_percent, memory_percent
            ),
            RecordKind::Message(message) => write!(f, "{} - {}", timestamp, message),
            RecordKind::Error(message) => write!(f, "{} - ERROR: {}", timestamp, message),
        }
    }
}
