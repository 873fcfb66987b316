//! Department: staff roster evicting on vacation or age causes.

use std::rc::Rc;

use crate::policies::EvictionPolicy;
use crate::staff::{Employee, EmployeeId};

use super::GroupId;
use super::roster::Roster;

/// Department with a staff roster.
///
/// Evicts a member on `VacationStockNegative` or `AgeAbove60`; other causes keep
/// the member.
#[derive(Debug)]
pub struct Department {
    roster: Rc<Roster>,
}

impl Department {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            roster: Roster::new("Department", id, name, EvictionPolicy::Department),
        }
    }

    /// Adds `employee` to the staff and subscribes to its lay-off notifications.
    ///
    /// Returns `false` (and does nothing) if the employee is already staff.
    pub fn add_staff(&self, employee: &Employee) -> bool {
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

    /// Staff ids in ascending order.
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
