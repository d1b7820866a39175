//! Conversion of XML-bodied service errors.
//!
//! The expected document carries a `<message>` element (used as the default
//! title) and any number of `<errordetail>` elements, each with `code`,
//! `message`, `severity` and `target` children.

use msghub_bridge::config::{DetailLookup, XmlConfig};
use msghub_bridge::message::{Message, MessageType};
use roxmltree::{Document, Node};

use crate::error::ConvertError;

/// Title of the fallback message when the caller gave none.
pub const FALLBACK_TITLE: &str = "ERROR";

/// Child node positions read by [`DetailLookup::Positional`].
const CODE_INDEX: usize = 1;
const MESSAGE_INDEX: usize = 2;
const SEVERITY_INDEX: usize = 4;
const TARGET_INDEX: usize = 5;

/// Caller options for [`convert_xml`].
#[derive(Debug, Clone, Default)]
pub struct XmlOptions {
    /// Replaces the document's `<message>` text as the title of every message.
    pub message_title: Option<String>,
    pub lookup: DetailLookup,
}

impl XmlOptions {
    pub fn with_message_title(mut self, title: impl Into<String>) -> Self {
        self.message_title = Some(title.into());
        self
    }

    pub fn with_lookup(mut self, lookup: DetailLookup) -> Self {
        self.lookup = lookup;
        self
    }
}

impl From<&XmlConfig> for XmlOptions {
    fn from(config: &XmlConfig) -> Self {
        Self {
            message_title: config.message_title.clone(),
            lookup: config.lookup,
        }
    }
}

/// The values read from one `<errordetail>` element.
#[derive(Debug)]
struct ErrorDetail {
    code: String,
    message: String,
    severity: String,
    target: Option<String>,
}

/// Converts an XML service error into one message per `<errordetail>`.
///
/// A document that cannot be read yields one error message titled with the
/// caller's title (or [`FALLBACK_TITLE`]) whose description is the raw input.
pub fn convert_xml(raw: &str, options: &XmlOptions) -> Vec<Message> {
    match parse_xml(raw, options) {
        Ok(messages) => messages,
        Err(err) => {
            log::warn!("Falling back to the raw xml response: {err}");
            let title = options.message_title.as_deref().unwrap_or(FALLBACK_TITLE);
            vec![Message::error(title).with_description(raw)]
        }
    }
}

/// Reads `raw` in its structured form.
pub fn parse_xml(raw: &str, options: &XmlOptions) -> Result<Vec<Message>, ConvertError> {
    let document = Document::parse(raw)?;
    let document_title = document
        .descendants()
        .find(|node| is_element_named(node, "message"))
        .map(text_content)
        .ok_or(ConvertError::MissingField("message"))?;
    let title = options.message_title.clone().unwrap_or(document_title);

    document
        .descendants()
        .filter(|node| is_element_named(node, "errordetail"))
        .map(|node| -> Result<Message, ConvertError> {
            let detail = match options.lookup {
                DetailLookup::Named => read_named(node)?,
                DetailLookup::Positional => read_positional(node)?,
            };
            // not shown anywhere yet
            log::debug!("Read error detail {} targeting {:?}", detail.code, detail.target);
            Ok(Message {
                kind: MessageType::from_severity(&detail.severity),
                title: title.clone(),
                subtitle: Some(detail.code),
                description: Some(detail.message),
                active_title_pressable: false,
            })
        })
        .collect()
}

fn read_named(node: Node) -> Result<ErrorDetail, ConvertError> {
    let child = |name: &'static str| {
        node.children()
            .find(|child| is_element_named(child, name))
            .map(text_content)
    };
    Ok(ErrorDetail {
        code: child("code").ok_or(ConvertError::MissingField("errordetail/code"))?,
        message: child("message").ok_or(ConvertError::MissingField("errordetail/message"))?,
        severity: child("severity").ok_or(ConvertError::MissingField("errordetail/severity"))?,
        target: child("target"),
    })
}

fn read_positional(node: Node) -> Result<ErrorDetail, ConvertError> {
    let child = |index: usize| {
        node.children()
            .nth(index)
            .map(text_content)
            .ok_or(ConvertError::MissingChild(index))
    };
    Ok(ErrorDetail {
        code: child(CODE_INDEX)?,
        message: child(MESSAGE_INDEX)?,
        severity: child(SEVERITY_INDEX)?,
        target: Some(child(TARGET_INDEX)?),
    })
}

fn is_element_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Concatenated text of a node and all of its descendants.
fn text_content(node: Node) -> String {
    if node.is_text() {
        return node.text().unwrap_or_default().to_string();
    }
    node.descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|descendant| descendant.text())
        .collect()
}
