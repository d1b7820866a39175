use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity or category of a user-facing diagnostic message.
///
/// The four named variants form the closed set the aggregate indicator is
/// computed over. [`MessageType::Other`] keeps a type string that came from
/// an external payload verbatim; it aggregates like
/// [`MessageType::Information`] but is never equal to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    /// An error or failure the user has to act on.
    Error,
    /// A non-critical issue the user should be aware of.
    Warning,
    /// A successful operation or positive outcome.
    Success,
    /// Neutral informational message.
    Information,
    /// Unrecognised type string, passed through from a service payload.
    Other(String),
}

impl MessageType {
    /// Maps a service-side severity string: the lowercase literal `"error"`
    /// becomes [`MessageType::Error`], anything else is passed through.
    pub fn from_severity(severity: &str) -> Self {
        if severity == "error" {
            MessageType::Error
        } else {
            MessageType::from(severity)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Error => "Error",
            MessageType::Warning => "Warning",
            MessageType::Success => "Success",
            MessageType::Information => "Information",
            MessageType::Other(raw) => raw,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MessageType::Error)
    }
}

impl From<&str> for MessageType {
    fn from(value: &str) -> Self {
        match value {
            "Error" => MessageType::Error,
            "Warning" => MessageType::Warning,
            "Success" => MessageType::Success,
            "Information" => MessageType::Information,
            other => MessageType::Other(other.to_string()),
        }
    }
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Error" | "Warning" | "Success" | "Information" => MessageType::from(value.as_str()),
            _ => MessageType::Other(value),
        }
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Other(raw) => raw,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(self.as_str())
    }
}

/// A normalized diagnostic record, as shown in a message list.
///
/// Messages are immutable once they are appended to a store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// The type/severity of the message.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Text shown as the message heading.
    pub title: String,
    /// Secondary line, usually an error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Long-form detail text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the title is interactive.
    #[serde(default, rename = "activeTitle")]
    pub active_title_pressable: bool,
}

impl Message {
    pub fn new(kind: MessageType, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: None,
            description: None,
            active_title_pressable: false,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(MessageType::Error, title)
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_active_title(mut self, pressable: bool) -> Self {
        self.active_title_pressable = pressable;
        self
    }
}
