//! Conversion of JSON-bodied service errors.
//!
//! The expected body layout is
//! `{"error": {"message": {"value": ..}, "innererror": {"errordetails": [..]}}}`
//! where each detail carries `severity`, `message`, `description` and `code`.

use msghub_bridge::message::{Message, MessageType};
use serde_json::Value;

use crate::error::ConvertError;

/// A failed service call as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceException {
    /// Top-level human readable message.
    pub message: String,
    /// HTTP status code, kept as text.
    pub status_code: String,
    /// Raw response body, if the call produced one.
    pub response_body: Option<String>,
}

impl ServiceException {
    pub fn new(message: impl Into<String>, status_code: impl ToString) -> Self {
        Self {
            message: message.into(),
            status_code: status_code.to_string(),
            response_body: None,
        }
    }

    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.response_body = Some(body.into());
        self
    }
}

/// Converts a service exception into messages.
///
/// Returns nothing when there is no response body. A body that cannot be
/// read in its structured form yields one error message whose description is
/// the raw body.
pub fn convert_exception(exception: &ServiceException) -> Vec<Message> {
    let Some(body) = exception
        .response_body
        .as_deref()
        .filter(|body| !body.is_empty())
    else {
        return Vec::new();
    };

    match parse_exception_body(exception, body) {
        Ok(messages) => messages,
        Err(err) => {
            log::warn!("Falling back to the raw response body: {err}");
            vec![
                Message::error(exception.message.as_str())
                    .with_subtitle(exception.status_code.as_str())
                    .with_description(body),
            ]
        }
    }
}

/// Reads `body` in its structured form.
///
/// Detailed errors are returned in payload order. Without any, a single
/// error message is built from the exception and `error.message.value`;
/// only a missing `error.message` is an error.
pub fn parse_exception_body(
    exception: &ServiceException,
    body: &str,
) -> Result<Vec<Message>, ConvertError> {
    let payload: Value = serde_json::from_str(body)?;
    let error = payload
        .get("error")
        .ok_or(ConvertError::MissingField("error"))?;
    if !error.is_object() {
        return Err(ConvertError::UnexpectedShape("error"));
    }

    let details = error
        .pointer("/innererror/errordetails")
        .and_then(Value::as_array)
        .filter(|details| !details.is_empty());
    if let Some(details) = details {
        return details.iter().map(detail_to_message).collect();
    }

    let summary = error
        .get("message")
        .ok_or(ConvertError::MissingField("error.message"))?;

    Ok(vec![Message {
        kind: MessageType::Error,
        title: exception.message.clone(),
        subtitle: Some(exception.status_code.clone()),
        description: summary.get("value").and_then(value_text),
        active_title_pressable: false,
    }])
}

fn detail_to_message(detail: &Value) -> Result<Message, ConvertError> {
    let detail = detail
        .as_object()
        .ok_or(ConvertError::UnexpectedShape("error.innererror.errordetails"))?;
    let field = |name: &str| detail.get(name).and_then(value_text);

    let severity = field("severity").unwrap_or_default();
    Ok(Message {
        kind: MessageType::from_severity(&severity),
        title: field("message").unwrap_or_default(),
        subtitle: field("code"),
        description: field("description"),
        active_title_pressable: false,
    })
}

/// Renders a JSON leaf as text. `null` counts as absent.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
