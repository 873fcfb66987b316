//! Lay-off events: cause classification and the notification payload.
//!
//! ## Contents
//! - [`LayOffCause`] why an employee signalled a lay-off
//! - [`LayOffEvent`] one-shot value handed to every subscriber
//!
//! ## Quick reference
//! - **Publishers**: `Employee::end_of_year_operation`, `Employee::check_target`,
//!   `Employee::resign`.
//! - **Consumers**: group rosters (`Department`, `Club`) and any custom
//!   [`Subscribe`](crate::Subscribe) implementation.

mod event;

pub use event::{LayOffCause, LayOffEvent};
