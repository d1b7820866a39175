//! Presentation command dispatching.
//!
//! The hub owns the session's [`MessageStore`] together with the core ends of
//! the bridge channels, routes incoming commands to the store and pushes the
//! resulting state back to the presentation layer.

use std::cell::RefCell;
use std::rc::Rc;

use msghub_bridge::message::Message;
use msghub_bridge::{PresentationCommand, PresentationEvent};
use tokio::sync::mpsc::{Receiver, Sender, error::TryRecvError};

use crate::notifier::{ChannelNotifier, send_event};
use crate::store::MessageStore;

/// Message store wired to a presentation layer through the bridge.
pub struct MessageHub {
    store: MessageStore<ChannelNotifier>,
    rx: Receiver<PresentationCommand>,
    tx: Sender<PresentationEvent>,
    pressed: Rc<RefCell<Vec<Message>>>,
}

impl MessageHub {
    /// Creates a hub from the core ends of a [`msghub_bridge::BridgeChannels`].
    pub fn new(rx: Receiver<PresentationCommand>, tx: Sender<PresentationEvent>) -> Self {
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let sink = pressed.clone();
        let store = MessageStore::new(ChannelNotifier::new(tx.clone()))
            .with_active_title_handler(move |message| sink.borrow_mut().push(message.clone()));
        Self {
            store,
            rx,
            tx,
            pressed,
        }
    }

    pub fn store(&self) -> &MessageStore<ChannelNotifier> {
        &self.store
    }

    /// Dispatches every queued command without blocking. Returns the number
    /// of commands handled.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.rx.try_recv() {
                Ok(command) => {
                    self.dispatch(command);
                    handled += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Presentation command channel closed");
                    break;
                }
            }
        }
        handled
    }

    /// Routes a single command to the store.
    pub fn dispatch(&mut self, command: PresentationCommand) {
        log::debug!("Got a presentation command: {command:?}");
        match command {
            PresentationCommand::Append {
                messages,
                clear,
                open_on_error,
            } => {
                self.store.append(messages, clear, open_on_error);
                self.publish_state();
            }
            PresentationCommand::ClearAll => {
                self.store.clear();
                self.publish_state();
            }
            PresentationCommand::PressActiveTitle(index) => {
                if !self.store.press_active_title(index) {
                    log::debug!("Message at {index} has no pressable title");
                }
                let pressed: Vec<Message> = self.pressed.borrow_mut().drain(..).collect();
                for message in pressed {
                    send_event(&self.tx, PresentationEvent::ActiveTitlePressed(message));
                }
            }
            PresentationCommand::RequestSnapshot => self.publish_state(),
        }
    }

    fn publish_state(&self) {
        send_event(
            &self.tx,
            PresentationEvent::StateChanged {
                aggregate: self.store.aggregate(),
                messages: self.store.messages().to_vec(),
            },
        );
    }
}
