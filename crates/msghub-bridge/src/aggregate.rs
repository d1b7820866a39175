use serde::{Deserialize, Serialize};

use crate::message::MessageType;

/// Fixed total order over message severities, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Information,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// The message type whose messages are counted for this severity.
    pub fn message_type(self) -> MessageType {
        match self {
            Severity::Information => MessageType::Information,
            Severity::Success => MessageType::Success,
            Severity::Warning => MessageType::Warning,
            Severity::Error => MessageType::Error,
        }
    }
}

/// Icon token shown on the message surface trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Information,
    Error,
    Alert,
    Success,
}

impl Icon {
    pub fn token(self) -> &'static str {
        match self {
            Icon::Information => "information",
            Icon::Error => "error",
            Icon::Alert => "alert",
            Icon::Success => "success",
        }
    }
}

/// Visual emphasis level of the message surface trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Emphasis {
    #[default]
    Neutral,
    Negative,
    Critical,
    Success,
}

/// The three scalars derived from a message list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Aggregate {
    pub icon: Icon,
    pub emphasis: Emphasis,
    /// Number of messages at the winning severity.
    pub count: usize,
}

impl Aggregate {
    /// Builds the aggregate for a winning severity and the number of
    /// messages that carry it.
    pub fn for_severity(severity: Severity, count: usize) -> Self {
        let (icon, emphasis) = match severity {
            Severity::Error => (Icon::Error, Emphasis::Negative),
            Severity::Warning => (Icon::Alert, Emphasis::Critical),
            Severity::Success => (Icon::Success, Emphasis::Success),
            Severity::Information => (Icon::Information, Emphasis::Neutral),
        };
        Self {
            icon,
            emphasis,
            count,
        }
    }
}
