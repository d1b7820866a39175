//! The mutable, newest-first list of messages and its derived state.

use msghub_bridge::aggregate::{Aggregate, Emphasis, Icon};
use msghub_bridge::message::Message;

use crate::notifier::Notifier;
use crate::severity;

type ActiveTitleHandler = Box<dyn FnMut(&Message)>;
type StateObserver = Box<dyn FnMut(&Aggregate, &[Message])>;

/// Owns the message list of one session.
///
/// The list is only changed through [`MessageStore::append`] and
/// [`MessageStore::clear`]; the aggregate is recomputed after every change,
/// so it is never stale.
pub struct MessageStore<N: Notifier> {
    messages: Vec<Message>,
    aggregate: Aggregate,
    notifier: N,
    active_title_handler: Option<ActiveTitleHandler>,
    observers: Vec<StateObserver>,
}

impl<N: Notifier> MessageStore<N> {
    /// Creates an empty store with the default aggregate.
    pub fn new(notifier: N) -> Self {
        Self {
            messages: Vec::new(),
            aggregate: Aggregate::default(),
            notifier,
            active_title_handler: None,
            observers: Vec::new(),
        }
    }

    /// Sets the handler invoked by [`MessageStore::press_active_title`].
    pub fn with_active_title_handler(mut self, handler: impl FnMut(&Message) + 'static) -> Self {
        self.active_title_handler = Some(Box::new(handler));
        self
    }

    /// Registers an observer called with the new state after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&Aggregate, &[Message]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Inserts a batch of messages at the front of the list.
    ///
    /// Each message is inserted at index 0 in input order, so the batch ends
    /// up reversed ahead of whatever was kept. With `clear` the previous list
    /// is dropped first. The notifier fires only when this batch contains an
    /// error and `open_on_error` is set; older errors in the list do not count.
    pub fn append(&mut self, messages: Vec<Message>, clear: bool, open_on_error: bool) -> Aggregate {
        if clear {
            self.messages.clear();
        }

        let error_count = messages.iter().filter(|message| message.kind.is_error()).count();
        let batch_len = messages.len();
        self.messages.splice(0..0, messages.into_iter().rev());

        self.aggregate = severity::resolve(&self.messages);
        log::debug!(
            "Appended {batch_len} message(s) ({error_count} error(s), clear: {clear}), {} total, aggregate: {:?}",
            self.messages.len(),
            self.aggregate
        );

        for observer in &mut self.observers {
            observer(&self.aggregate, &self.messages);
        }

        if error_count > 0 && open_on_error {
            self.notifier.reveal();
        }

        self.aggregate
    }

    /// Discards every message and resets the aggregate.
    pub fn clear(&mut self) -> Aggregate {
        self.append(Vec::new(), true, false)
    }

    /// Invokes the active-title handler for the message at `index`.
    ///
    /// Returns `false` if there is no such message, its title is not
    /// pressable, or no handler was set.
    pub fn press_active_title(&mut self, index: usize) -> bool {
        let Some(message) = self.messages.get(index) else {
            return false;
        };
        if !message.active_title_pressable {
            return false;
        }
        match self.active_title_handler.as_mut() {
            Some(handler) => {
                handler(message);
                true
            }
            None => false,
        }
    }

    /// Current list, newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    pub fn icon(&self) -> Icon {
        self.aggregate.icon
    }

    pub fn emphasis(&self) -> Emphasis {
        self.aggregate.emphasis
    }

    pub fn count(&self) -> usize {
        self.aggregate.count
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use msghub_bridge::message::MessageType;
    use proptest::prelude::*;

    use crate::notifier::NoopNotifier;
    use crate::strategies::arb_batch;

    use super::*;

    fn message(kind: MessageType, title: &str) -> Message {
        Message::new(kind, title)
    }

    fn titles<N: Notifier>(store: &MessageStore<N>) -> Vec<&str> {
        store.messages().iter().map(|message| message.title.as_str()).collect()
    }

    fn counting_store() -> (MessageStore<impl Notifier>, Rc<Cell<usize>>) {
        let reveals = Rc::new(Cell::new(0));
        let counter = reveals.clone();
        let store = MessageStore::new(move || counter.set(counter.get() + 1));
        (store, reveals)
    }

    #[test]
    fn test_new_store_is_empty_with_default_aggregate() {
        let store = MessageStore::new(NoopNotifier);
        assert!(store.is_empty());
        assert_eq!(store.icon(), Icon::Information);
        assert_eq!(store.emphasis(), Emphasis::Neutral);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_batch_is_inserted_reversed_ahead_of_previous() {
        let mut store = MessageStore::new(NoopNotifier);
        store.append(
            vec![
                message(MessageType::Information, "a"),
                message(MessageType::Information, "b"),
            ],
            false,
            false,
        );
        store.append(
            vec![
                message(MessageType::Warning, "c"),
                message(MessageType::Success, "d"),
            ],
            false,
            false,
        );
        assert_eq!(titles(&store), vec!["d", "c", "b", "a"]);
        assert_eq!(store.emphasis(), Emphasis::Critical);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear_flag_discards_previous_messages() {
        let mut store = MessageStore::new(NoopNotifier);
        store.append(vec![message(MessageType::Error, "old")], false, false);
        let aggregate = store.append(vec![message(MessageType::Success, "new")], true, false);
        assert_eq!(titles(&store), vec!["new"]);
        assert_eq!(aggregate.icon, Icon::Success);
        assert_eq!(aggregate.count, 1);
    }

    #[test]
    fn test_clear_twice_is_idempotent() {
        let mut store = MessageStore::new(NoopNotifier);
        store.append(vec![message(MessageType::Error, "x")], false, false);
        assert_eq!(store.clear(), Aggregate::default());
        assert!(store.is_empty());
        assert_eq!(store.clear(), Aggregate::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_notifier_fires_for_error_batch_with_open_on_error() {
        let (mut store, reveals) = counting_store();
        store.append(
            vec![
                message(MessageType::Error, "e1"),
                message(MessageType::Error, "e2"),
            ],
            false,
            true,
        );
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn test_notifier_ignores_errors_without_open_on_error() {
        let (mut store, reveals) = counting_store();
        store.append(vec![message(MessageType::Error, "e")], false, false);
        assert_eq!(reveals.get(), 0);
    }

    #[test]
    fn test_notifier_ignores_older_errors() {
        let (mut store, reveals) = counting_store();
        store.append(vec![message(MessageType::Error, "e")], false, false);
        store.append(vec![message(MessageType::Success, "s")], false, true);
        assert_eq!(reveals.get(), 0);
        assert_eq!(store.emphasis(), Emphasis::Negative);
    }

    #[test]
    fn test_lowercase_error_type_does_not_trigger_notifier() {
        let (mut store, reveals) = counting_store();
        store.append(
            vec![message(MessageType::Other("error".to_string()), "e")],
            false,
            true,
        );
        assert_eq!(reveals.get(), 0);
        assert_eq!(store.emphasis(), Emphasis::Neutral);
    }

    #[test]
    fn test_observers_see_every_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut store = MessageStore::new(NoopNotifier);
        store.subscribe(move |aggregate, messages| {
            sink.borrow_mut().push((aggregate.emphasis, messages.len()));
        });

        store.append(vec![message(MessageType::Warning, "w")], false, false);
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![(Emphasis::Critical, 1), (Emphasis::Neutral, 0)]
        );
    }

    #[test]
    fn test_press_active_title_only_for_pressable_messages() {
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let sink = pressed.clone();
        let mut store = MessageStore::new(NoopNotifier)
            .with_active_title_handler(move |message| sink.borrow_mut().push(message.title.clone()));

        store.append(
            vec![
                message(MessageType::Information, "plain"),
                message(MessageType::Information, "link").with_active_title(true),
            ],
            false,
            false,
        );

        assert!(store.press_active_title(0));
        assert!(!store.press_active_title(1));
        assert!(!store.press_active_title(5));
        assert_eq!(*pressed.borrow(), vec!["link".to_string()]);
    }

    proptest! {
        #[test]
        fn prop_second_batch_lands_reversed_ahead_of_first(
            first in arb_batch("a"),
            second in arb_batch("b"),
            clear in any::<bool>(),
            open_on_error in any::<bool>(),
        ) {
            let (mut store, reveals) = counting_store();
            store.append(first.clone(), false, true);
            reveals.set(0);

            let aggregate = store.append(second.clone(), clear, open_on_error);

            let mut expected: Vec<Message> = second.iter().rev().cloned().collect();
            if !clear {
                expected.extend(first.iter().rev().cloned());
            }
            prop_assert_eq!(store.messages(), expected.as_slice());
            prop_assert_eq!(aggregate, severity::resolve(&expected));

            let batch_has_error = second.iter().any(|message| message.kind == MessageType::Error);
            prop_assert_eq!(reveals.get(), usize::from(batch_has_error && open_on_error));
        }
    }
}
