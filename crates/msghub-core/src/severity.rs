//! Aggregate severity resolution over a message list.
//!
//! The result is a max-reduction under the fixed order
//! Error > Warning > Success > Information. Unrecognised message types rank
//! as Information.

use msghub_bridge::aggregate::{Aggregate, Severity};
use msghub_bridge::message::{Message, MessageType};

/// Returns the rank of a message type in the severity order.
pub fn severity_of(kind: &MessageType) -> Severity {
    match kind {
        MessageType::Error => Severity::Error,
        MessageType::Warning => Severity::Warning,
        MessageType::Success => Severity::Success,
        MessageType::Information | MessageType::Other(_) => Severity::Information,
    }
}

/// Returns the highest severity present, or `None` for an empty list.
pub fn highest_severity(messages: &[Message]) -> Option<Severity> {
    messages
        .iter()
        .map(|message| severity_of(&message.kind))
        .max()
}

/// Computes icon, emphasis and count for the whole list.
///
/// The count only includes messages whose type is exactly the winning one,
/// so pass-through types never count towards an information result.
pub fn resolve(messages: &[Message]) -> Aggregate {
    let Some(severity) = highest_severity(messages) else {
        return Aggregate::default();
    };

    let winning_type = severity.message_type();
    let count = messages
        .iter()
        .filter(|message| message.kind == winning_type)
        .count();
    Aggregate::for_severity(severity, count)
}
