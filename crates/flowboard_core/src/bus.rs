//! Board event publish/subscribe.
//!
//! # Responsibility
//! - Fan out structural board changes to registered listeners.
//! - Allow listeners to deregister on view teardown so closures do not
//!   outlive the views that created them.
//!
//! # Invariants
//! - Listener ids are unique per subscription.
//! - Publishing runs synchronously on the caller's event loop; there is
//!   no background delivery.

use crate::drag::controller::IgnoreReason;
use crate::model::board::{CardId, ColumnId};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Handle returned by `subscribe`, used to deregister.
pub type ListenerId = Uuid;

/// Structural change notifications emitted after drop handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A card changed position. `from_column == to_column` for a pure
    /// reorder.
    CardMoved {
        card_uuid: CardId,
        from_column: ColumnId,
        to_column: ColumnId,
    },
    /// A column changed position among its siblings.
    ColumnMoved { column_uuid: ColumnId },
    /// A drop degraded to a no-op.
    DropIgnored { reason: IgnoreReason },
}

/// Synchronous listener registry.
#[derive(Default)]
pub struct EventBus {
    listeners: BTreeMap<ListenerId, Box<dyn Fn(&BoardEvent)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener and returns its deregistration handle.
    pub fn subscribe(&mut self, listener: impl Fn(&BoardEvent) + 'static) -> ListenerId {
        let id = Uuid::new_v4();
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes one listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers one event to every registered listener, in id order.
    pub fn publish(&self, event: &BoardEvent) {
        for listener in self.listeners.values() {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardEvent, EventBus};
    use crate::drag::controller::IgnoreReason;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn unsubscribed_listener_receives_no_further_events() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = bus.subscribe(move |event: &BoardEvent| sink.borrow_mut().push(event.clone()));

        let event = BoardEvent::DropIgnored {
            reason: IgnoreReason::SelfDrop,
        };
        bus.publish(&event);
        assert_eq!(seen.borrow().len(), 1);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&event);
        assert_eq!(seen.borrow().len(), 1);
        assert!(bus.is_empty());
    }
}
