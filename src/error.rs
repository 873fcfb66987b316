//! Error types used by the staffvisor library.
//!
//! Domain failures (a vacation shortfall, a missed target, a negative balance) are
//! **not** errors: they surface as `bool` results or lay-off notifications.
//! [`StaffError`] only covers API misuse, such as calling a sales-only operation
//! on a board member.
//!
//! Like the notification causes, errors provide `as_label` / `as_message` helpers
//! for logs.

use thiserror::Error;

use crate::staff::{EmployeeId, PositionKind};

/// # Errors produced by employee operations.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StaffError {
    /// A role-specific operation was invoked on an employee holding another position.
    #[error("employee {employee} is {actual}, operation requires {expected}")]
    PositionMismatch {
        /// Employee the operation was called on.
        employee: EmployeeId,
        /// Position the operation needs.
        expected: PositionKind,
        /// Position the employee actually holds.
        actual: PositionKind,
    },
}

impl StaffError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use staffvisor::{PositionKind, StaffError};
    ///
    /// let err = StaffError::PositionMismatch {
    ///     employee: 3,
    ///     expected: PositionKind::Sales,
    ///     actual: PositionKind::Board,
    /// };
    /// assert_eq!(err.as_label(), "staff_position_mismatch");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StaffError::PositionMismatch { .. } => "staff_position_mismatch",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StaffError::PositionMismatch {
                employee,
                expected,
                actual,
            } => format!("position mismatch: employee={employee} expected={expected} actual={actual}"),
        }
    }
}
