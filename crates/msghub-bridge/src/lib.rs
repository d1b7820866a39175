//! Communication bridge between the message core and a presentation layer.
//!
//! This crate defines the value types shared by every other crate (messages,
//! the derived aggregate, configuration) and the protocol used to connect a
//! message surface, such as a popover, to the store that owns the list.
//!
//! The protocol is unidirectional in each direction:
//! - The presentation layer sends commands (append a batch, clear, press an
//!   active title, ask for the current state).
//! - The core pushes events (state changed, reveal requested, active title
//!   pressed).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`]. The core only uses their non-blocking halves, so no
//! async runtime is needed on its side.

pub mod aggregate;
pub mod config;
pub mod message;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::aggregate::Aggregate;
use crate::message::Message;

/// Events emitted by the core to inform the presentation layer.
#[derive(Debug, Clone)]
pub enum PresentationEvent {
    /// The message list or its aggregate changed.
    StateChanged {
        aggregate: Aggregate,
        /// Current list, newest first.
        messages: Vec<Message>,
    },
    /// A newly appended batch contained an error and auto-reveal was asked for.
    RevealRequested,
    /// The user pressed the interactive title of a message.
    ActiveTitlePressed(Message),
}

/// Commands issued by the presentation layer (or any other caller) to the core.
#[derive(Debug, Clone)]
pub enum PresentationCommand {
    /// Append a batch of messages.
    Append {
        messages: Vec<Message>,
        clear: bool,
        open_on_error: bool,
    },
    /// Discard every message.
    ClearAll,
    /// The title of the message at this list index was pressed.
    PressActiveTitle(usize),
    /// Ask for a [`PresentationEvent::StateChanged`] with the current state.
    RequestSnapshot,
}

/// Paired `tokio::mpsc` channels between the presentation layer and the core.
pub struct BridgeChannels {
    /// Receiver used by the presentation layer to get events from the core.
    pub presentation_rx: Receiver<PresentationEvent>,
    /// Sender used by the presentation layer to send commands to the core.
    pub presentation_tx: Sender<PresentationCommand>,

    /// Receiver used by the core to get commands.
    pub core_rx: Receiver<PresentationCommand>,
    /// Sender used by the core to send events to the presentation layer.
    pub core_tx: Sender<PresentationEvent>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_core_tx, to_core_rx) = mpsc::channel(buffer);
        let (to_presentation_tx, to_presentation_rx) = mpsc::channel(buffer);
        Self {
            presentation_tx: to_core_tx,
            presentation_rx: to_presentation_rx,
            core_rx: to_core_rx,
            core_tx: to_presentation_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
