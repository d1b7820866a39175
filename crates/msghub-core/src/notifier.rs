use msghub_bridge::PresentationEvent;
use tokio::sync::mpsc::{Sender, error::TrySendError};

/// Hook the store calls to reveal the message surface.
///
/// It is triggered only when a freshly appended batch contains an error and
/// the caller asked for auto-reveal.
pub trait Notifier {
    fn reveal(&mut self);
}

impl<F> Notifier for F
where
    F: FnMut(),
{
    fn reveal(&mut self) {
        self()
    }
}

/// Notifier that ignores every reveal request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn reveal(&mut self) {}
}

/// Forwards reveal requests to the presentation layer over the bridge.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<PresentationEvent>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<PresentationEvent>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn reveal(&mut self) {
        send_event(&self.tx, PresentationEvent::RevealRequested);
    }
}

/// Sends an event without blocking. A full or closed channel is logged and
/// the event dropped.
pub(crate) fn send_event(tx: &Sender<PresentationEvent>, event: PresentationEvent) {
    match tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            log::error!("Presentation channel is full, dropping event: {event:?}");
        }
        Err(TrySendError::Closed(_)) => {
            log::error!("Presentation channel is closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn test_closure_notifier_is_called() {
        let mut calls = 0;
        {
            let mut notifier = || calls += 1;
            notifier.reveal();
            notifier.reveal();
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_channel_notifier_sends_reveal() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut notifier = ChannelNotifier::new(tx);
        notifier.reveal();
        assert!(matches!(rx.try_recv(), Ok(PresentationEvent::RevealRequested)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_survives_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut notifier = ChannelNotifier::new(tx);
        notifier.reveal();
    }
}
