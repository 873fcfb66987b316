//! Club: member roster evicting on a negative vacation balance only.

use std::rc::Rc;

use crate::policies::EvictionPolicy;
use crate::staff::{Employee, EmployeeId};

use super::GroupId;
use super::roster::Roster;

/// Employee club.
///
/// Narrower than a [`Department`](super::Department): only `VacationStockNegative`
/// evicts; age, sales and resignation causes keep the member.
#[derive(Debug)]
pub struct Club {
    roster: Rc<Roster>,
}

impl Club {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            roster: Roster::new("Club", id, name, EvictionPolicy::Club),
        }
    }

    /// Adds `employee` as a member and subscribes to its lay-off notifications.
    ///
    /// Returns `false` (and does nothing) if the employee is already a member.
    pub fn add_member(&self, employee: &Employee) -> bool {
        self.roster.add(employee)
    }

    #[inline]
    pub fn id(&self) -> GroupId {
        self.roster.id()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.roster.name()
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.roster.contains(id)
    }

    /// Member ids in ascending order.
    pub fn members(&self) -> Vec<EmployeeId> {
        self.roster.members()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
