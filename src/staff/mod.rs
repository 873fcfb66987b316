//! Employees: identity, vacation balance, positions and year-end evaluation.
//!
//! ## Contents
//! - [`Employee`] the entity and its notification channel
//! - [`Position`] / [`PositionKind`] closed set of employee kinds
//! - [`age_on`] / [`AGE_LIMIT`] whole-year age rule used at year end

mod age;
mod employee;
mod position;

pub use age::{AGE_LIMIT, age_on};
pub use employee::Employee;
pub use position::{Position, PositionKind};

/// Stable identity of an employee; groups key their rosters by it.
pub type EmployeeId = u32;
