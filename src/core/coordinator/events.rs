//=========================================================================
// UI Events
//=========================================================================
//
// Lifecycle notifications and their fan-out to subscribers.
//
// Architecture:
//   Panel / UiCoordinator → outbox: Vec<UiEvent>
//                              ↓ flush() after each operation
//   EventHub ──► Sender<UiEvent> (one per subscriber, crossbeam)
//
// Events are buffered while an operation mutates state and only sent
// once it returns, so a subscriber never observes a notification before
// the state change it describes.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::panel::PanelId;

//=== UiEvent =============================================================

/// Everything a consumer can observe about the panel UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    //--- Panel Lifecycle --------------------------------------------------
    /// Panel entered `Opening`.
    OpenStarted(PanelId),

    /// Panel reached `Open`.
    Opened(PanelId),

    /// Panel entered `Closing`.
    CloseStarted(PanelId),

    /// Panel reached `Closed`.
    Closed(PanelId),

    //--- Coordinator ------------------------------------------------------
    /// An open request was accepted.
    PanelOpened(PanelId),

    /// A close request was accepted.
    PanelClosed(PanelId),

    /// `close_all_panels` finished.
    AllPanelsClosed,

    /// The UI-active flag flipped.
    UiActiveChanged(bool),
}

//=== EventHub ============================================================

/// Broadcasts buffered events to every live subscriber.
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: Vec<Sender<UiEvent>>,
    outbox: Vec<UiEvent>,
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// Registers a subscriber. Events sent from now on are delivered.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<UiEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Buffer events are pushed into until the next flush.
    pub(crate) fn outbox(&mut self) -> &mut Vec<UiEvent> {
        &mut self.outbox
    }

    pub(crate) fn push(&mut self, event: UiEvent) {
        self.outbox.push(event);
    }

    /// Sends all buffered events, pruning disconnected subscribers.
    pub(crate) fn flush(&mut self) {
        if self.outbox.is_empty() {
            return;
        }

        for event in self.outbox.drain(..) {
            self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        }

        debug!("Flushed UI events to {} subscriber(s)", self.subscribers.len());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_held_until_flush() {
        let mut hub = EventHub::new();
        let rx = hub.subscribe();

        hub.push(UiEvent::UiActiveChanged(true));
        assert!(rx.try_recv().is_err());

        hub.flush();
        assert_eq!(rx.try_recv(), Ok(UiEvent::UiActiveChanged(true)));
    }

    #[test]
    fn every_subscriber_receives_every_event_in_order() {
        let mut hub = EventHub::new();
        let first = hub.subscribe();
        let second = hub.subscribe();

        hub.outbox().push(UiEvent::PanelOpened("Map".into()));
        hub.outbox().push(UiEvent::AllPanelsClosed);
        hub.flush();

        for rx in [first, second] {
            let received: Vec<_> = rx.try_iter().collect();
            assert_eq!(
                received,
                vec![UiEvent::PanelOpened("Map".into()), UiEvent::AllPanelsClosed]
            );
        }
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut hub = EventHub::new();
        let kept = hub.subscribe();
        drop(hub.subscribe());
        assert_eq!(hub.subscriber_count(), 2);

        hub.push(UiEvent::AllPanelsClosed);
        hub.flush();

        assert_eq!(hub.subscriber_count(), 1);
        assert_eq!(kept.try_iter().count(), 1);
    }

    #[test]
    fn late_subscriber_misses_earlier_events() {
        let mut hub = EventHub::new();
        hub.push(UiEvent::AllPanelsClosed);
        hub.flush();

        let rx = hub.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
