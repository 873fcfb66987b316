//! # Roster - event-driven group membership.
//!
//! A [`Roster`] is the shared core of [`Department`](super::Department) and
//! [`Club`](super::Club). It subscribes to every member's lay-off channel and
//! evicts members according to its [`EvictionPolicy`].
//!
//! ## Architecture
//! ```text
//! add(employee)
//!   ├─► already member      → no-op
//!   └─► employee.subscribe(weak roster) → members[id] = subscription
//!
//! Employee ─► Roster::on_event(source, event)
//!               ├─► not a member          → ignore
//!               ├─► policy keeps cause    → ignore
//!               └─► policy evicts cause   → remove + source.unsubscribe(subscription)
//! ```
//!
//! ## Rules
//! - Members are keyed by employee id; a duplicate add is a no-op.
//! - The roster only holds ids; the employee holds a weak handle back. Neither
//!   keeps the other alive.
//! - Removal unsubscribes, so a later notification cannot evict twice. Re-adding
//!   subscribes again.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use tracing::{info, trace};

use crate::events::LayOffEvent;
use crate::policies::EvictionPolicy;
use crate::staff::{Employee, EmployeeId};
use crate::subscribers::{Subscribe, SubscriptionId};

use super::GroupId;

/// Membership list with an eviction policy.
#[derive(Debug)]
pub(crate) struct Roster {
    kind: &'static str,
    id: GroupId,
    name: String,
    policy: EvictionPolicy,
    members: RefCell<BTreeMap<EmployeeId, SubscriptionId>>,
}

impl Roster {
    /// Creates an empty roster; `kind` is used in narration ("Department", "Club").
    pub(crate) fn new(
        kind: &'static str,
        id: GroupId,
        name: impl Into<String>,
        policy: EvictionPolicy,
    ) -> Rc<Self> {
        Rc::new(Self {
            kind,
            id,
            name: name.into(),
            policy,
            members: RefCell::new(BTreeMap::new()),
        })
    }

    /// Adds `employee` and subscribes to its notifications.
    ///
    /// Returns `false` if the employee was already a member.
    pub(crate) fn add(self: &Rc<Self>, employee: &Employee) -> bool {
        let id = employee.id();
        if self.contains(id) {
            trace!(employee = id, group = %self.name, "already a member");
            return false;
        }

        let handle: Weak<Self> = Rc::downgrade(self);
        let subscription = employee.subscribe(handle);
        self.members.borrow_mut().insert(id, subscription);

        info!(group = %self.name, "Employee {id} added to {}.", self.kind);
        true
    }

    pub(crate) fn contains(&self, id: EmployeeId) -> bool {
        self.members.borrow().contains_key(&id)
    }

    /// Member ids in ascending order.
    pub(crate) fn members(&self) -> Vec<EmployeeId> {
        self.members.borrow().keys().copied().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub(crate) fn id(&self) -> GroupId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Subscribe for Roster {
    fn on_event(&self, source: &Employee, event: &LayOffEvent) {
        let id = source.id();
        if !self.policy.evicts(event.cause) {
            trace!(employee = id, group = %self.name, cause = %event.cause, "cause ignored");
            return;
        }

        let removed = self.members.borrow_mut().remove(&id);
        let Some(subscription) = removed else {
            trace!(employee = id, group = %self.name, "not a member, nothing to evict");
            return;
        };

        source.unsubscribe(subscription);
        info!(group = %self.name, cause = %event.cause, "Employee {id} removed from {}.", self.kind);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
