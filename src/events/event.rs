//! # Lay-off notifications raised by employees.
//!
//! The [`LayOffCause`] enum classifies why an employee signalled a lay-off:
//! - **Year-end causes**: detected by the year-end evaluation (vacation, age)
//! - **Role causes**: raised by role-specific operations (missed sales target, resignation)
//!
//! The [`LayOffEvent`] struct is the one-shot value delivered to subscribers. It is built
//! when the condition is detected, handed to every subscriber, then dropped.
//!
//! ## Ordering guarantees
//! Each event has a process-wide sequence number (`seq`) that increases monotonically.
//! It is only an aid for reading logs; delivery order is the subscription order.
//!
//! ## Example
//! ```rust
//! use staffvisor::{LayOffCause, LayOffEvent};
//!
//! let ev = LayOffEvent::new(LayOffCause::AgeAbove60).with_employee(7);
//!
//! assert_eq!(ev.cause, LayOffCause::AgeAbove60);
//! assert_eq!(ev.employee, Some(7));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::staff::EmployeeId;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Reason attached to a lay-off notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayOffCause {
    // === Year-end evaluation ===
    /// Vacation balance dropped below zero.
    VacationStockNegative,

    /// Employee is older than the age limit (strictly greater).
    AgeAbove60,

    // === Role-specific ===
    /// Sales figure fell short of the quota passed to `check_target`.
    SalesTargetNotMet,

    /// Board member resigned voluntarily.
    Resigned,
}

impl LayOffCause {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            LayOffCause::VacationStockNegative => "vacation_stock_negative",
            LayOffCause::AgeAbove60 => "age_above_60",
            LayOffCause::SalesTargetNotMet => "sales_target_not_met",
            LayOffCause::Resigned => "resigned",
        }
    }
}

impl fmt::Display for LayOffCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Lay-off notification with optional metadata.
///
/// - `seq`: monotonic global sequence (for logs)
/// - `employee`: id of the raising employee, set by the employee before delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayOffEvent {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Id of the employee that raised the event.
    pub employee: Option<EmployeeId>,
    /// Why the lay-off was signalled.
    pub cause: LayOffCause,
}

impl LayOffEvent {
    /// Creates a new event with the given cause and the next sequence number.
    pub fn new(cause: LayOffCause) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            employee: None,
            cause,
        }
    }

    /// Attaches the raising employee's id.
    #[inline]
    pub fn with_employee(mut self, id: EmployeeId) -> Self {
        self.employee = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_increases() {
        let a = LayOffEvent::new(LayOffCause::Resigned);
        let b = LayOffEvent::new(LayOffCause::Resigned);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(LayOffCause::VacationStockNegative.to_string(), "vacation_stock_negative");
        assert_eq!(LayOffCause::SalesTargetNotMet.as_label(), "sales_target_not_met");
    }
}
