//! Shared proptest strategies.

use msghub_bridge::message::{Message, MessageType};
use proptest::prelude::*;

/// Any message type, including pass-through strings such as `"error"`.
pub(crate) fn arb_message_type() -> impl Strategy<Value = MessageType> {
    prop_oneof![
        Just(MessageType::Error),
        Just(MessageType::Warning),
        Just(MessageType::Success),
        Just(MessageType::Information),
        "[a-z]{0,8}".prop_map(MessageType::Other),
    ]
}

/// A batch of messages titled `{prefix}{index}`.
pub(crate) fn arb_batch(prefix: &'static str) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message_type(), 0..8).prop_map(move |kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| Message::new(kind, format!("{prefix}{index}")))
            .collect()
    })
}
