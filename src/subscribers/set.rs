//! # SubscriberSet: ordered synchronous fan-out
//!
//! [`SubscriberSet`] delivers each [`LayOffEvent`] to every registered subscriber,
//! one after another, before [`SubscriberSet::emit`] returns.
//!
//! ## What it guarantees
//! - Delivery order equals registration order.
//! - `emit` iterates a snapshot taken at raise time: handlers may unsubscribe
//!   themselves (or anyone else) without skipping or repeating a delivery.
//! - Subscribers registered during an emit only see later events.
//!
//! ## What it does **not** guarantee
//! - No ownership of subscribers: handles are weak. A subscriber whose owner was
//!   dropped is skipped and pruned on the next emit.
//!
//! ## Diagram
//! ```text
//!    emit(source, &event)
//!        │   snapshot = [(id1, S1), (id2, S2), (idN, SN)]
//!        ├──► S1.on_event(source, &event)   (may unsubscribe id1)
//!        ├──► S2.on_event(source, &event)
//!        └──► SN.on_event(source, &event)
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Weak;

use tracing::trace;

use crate::events::LayOffEvent;
use crate::staff::Employee;

use super::Subscribe;

/// Handle returned by [`SubscriberSet::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Registered subscriber with its handle.
#[derive(Clone)]
struct Slot {
    id: SubscriptionId,
    sub: Weak<dyn Subscribe>,
}

/// Ordered set of weakly held subscribers.
#[derive(Default)]
pub struct SubscriberSet {
    slots: RefCell<Vec<Slot>>,
    next_id: Cell<u64>,
}

impl SubscriberSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscriber; it will be called after every subscriber registered before it.
    pub fn subscribe(&self, sub: Weak<dyn Subscribe>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.slots.borrow_mut().push(Slot { id, sub });
        id
    }

    /// Removes the subscriber registered under `id`.
    ///
    /// Returns `false` if `id` is unknown (already removed or never issued here).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let before = slots.len();
        slots.retain(|slot| slot.id != id);
        slots.len() != before
    }

    /// Delivers `event` to every subscriber registered at call time, in order.
    pub fn emit(&self, source: &Employee, event: &LayOffEvent) {
        let snapshot: Vec<Slot> = self.slots.borrow().clone();

        let mut dead = Vec::new();
        for slot in &snapshot {
            match slot.sub.upgrade() {
                Some(sub) => {
                    trace!(subscriber = sub.name(), seq = event.seq, "delivering lay-off event");
                    sub.on_event(source, event);
                }
                None => dead.push(slot.id),
            }
        }

        if !dead.is_empty() {
            trace!(count = dead.len(), "pruning dropped subscribers");
            self.slots
                .borrow_mut()
                .retain(|slot| !dead.contains(&slot.id));
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Number of registered subscribers (including ones not yet pruned).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl std::fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::events::LayOffCause;
    use crate::subscribers::SubscribeFn;
    use chrono::NaiveDate;

    fn employee() -> Employee {
        Employee::new(1, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), 10)
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Rc<dyn Subscribe> {
        let log = Rc::clone(log);
        SubscribeFn::rc(name, move |_src: &Employee, _ev: &LayOffEvent| {
            log.borrow_mut().push(name);
        })
    }

    #[test]
    fn test_delivery_follows_registration_order() {
        let set = SubscriberSet::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let c = recorder("c", &log);
        set.subscribe(Rc::downgrade(&b));
        set.subscribe(Rc::downgrade(&a));
        set.subscribe(Rc::downgrade(&c));

        set.emit(&employee(), &LayOffEvent::new(LayOffCause::Resigned));
        assert_eq!(*log.borrow(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_noop() {
        let set = SubscriberSet::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let id = set.subscribe(Rc::downgrade(&a));

        assert!(set.unsubscribe(id));
        assert!(!set.unsubscribe(id));
        assert!(set.is_empty());
    }

    #[test]
    fn test_self_unsubscribe_during_emit_keeps_others() {
        let set = Rc::new(SubscriberSet::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let quitter: Rc<dyn Subscribe> = {
            let set = Rc::clone(&set);
            let log = Rc::clone(&log);
            let own_id = Rc::clone(&own_id);
            SubscribeFn::rc("quitter", move |_src: &Employee, _ev: &LayOffEvent| {
                log.borrow_mut().push("quitter");
                if let Some(id) = own_id.get() {
                    set.unsubscribe(id);
                }
            })
        };
        let stayer = recorder("stayer", &log);

        own_id.set(Some(set.subscribe(Rc::downgrade(&quitter))));
        set.subscribe(Rc::downgrade(&stayer));

        let emp = employee();
        set.emit(&emp, &LayOffEvent::new(LayOffCause::Resigned));
        set.emit(&emp, &LayOffEvent::new(LayOffCause::Resigned));

        assert_eq!(*log.borrow(), vec!["quitter", "stayer", "stayer"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let set = SubscriberSet::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let keep = recorder("keep", &log);
        {
            let gone = recorder("gone", &log);
            set.subscribe(Rc::downgrade(&gone));
        }
        set.subscribe(Rc::downgrade(&keep));
        assert_eq!(set.len(), 2);

        set.emit(&employee(), &LayOffEvent::new(LayOffCause::AgeAbove60));
        assert_eq!(*log.borrow(), vec!["keep"]);
        assert_eq!(set.len(), 1);
    }
}
