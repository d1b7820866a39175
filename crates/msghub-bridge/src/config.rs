use serde::{Deserialize, Serialize};

/// How the children of an `<errordetail>` element are located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLookup {
    /// Look up `code`, `message`, `severity` and `target` by element name.
    #[default]
    Named,
    /// Read child nodes 1, 2, 4 and 5 by position, counting every node
    /// including whitespace text. Pinned to one upstream service layout.
    Positional,
}

/// Caller-side defaults for the append operation. The store itself has no
/// defaults; callers read these and pass them explicitly.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppendDefaults {
    /// Whether a new batch replaces the current list.
    pub clear: bool,
    /// Whether a batch containing an error reveals the message surface.
    pub open_on_error: bool,
}

impl Default for AppendDefaults {
    fn default() -> Self {
        Self {
            clear: false,
            open_on_error: true,
        }
    }
}

/// Settings for converting XML service errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Child lookup strategy for `<errordetail>` elements.
    pub lookup: DetailLookup,
    /// Title used for every converted message instead of the document's
    /// `<message>` text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_title: Option<String>,
}

/// Global configuration of the message hub.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HubConfig {
    /// Buffer capacity of each bridge channel.
    pub channel_capacity: usize,
    /// Defaults used by callers of the append operation.
    pub append: AppendDefaults,
    /// XML converter settings.
    pub xml: XmlConfig,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            append: AppendDefaults::default(),
            xml: XmlConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: HubConfig = toml::from_str(
            r#"
            [xml]
            lookup = "positional"
            "#,
        )
        .unwrap();
        assert_eq!(config.xml.lookup, DetailLookup::Positional);
        assert_eq!(config.xml.message_title, None);
        assert!(config.append.open_on_error);
        assert!(!config.append.clear);
        assert_eq!(config.channel_capacity, 64);
    }
}
