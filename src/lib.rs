//! # staffvisor
//!
//! **Staffvisor** models a small organisation (employees, departments, clubs) with a
//! year-end evaluation that can remove employees from the groups they belong to.
//!
//! Employees broadcast lay-off notifications; groups subscribe when an employee is
//! added and evict the member when their policy says the cause qualifies.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Employee   │   │   Employee   │   │   Employee   │
//!     │  (Standard)  │   │   (Sales)    │   │   (Board)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ end_of_year      │ check_target     │ resign
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  SubscriberSet (per employee, ordered, weak handles)              │
//! │  emit(source, &LayOffEvent) over a snapshot, synchronously        │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!  ┌────────────┐    ┌────────────┐    ┌──────────────────────┐
//!  │ Department │    │    Club    │    │ SubscribeFn / custom │
//!  │  (Roster)  │    │  (Roster)  │    │      LogWriter       │
//!  └────────────┘    └────────────┘    └──────────────────────┘
//!   vacation|age      vacation only
//!   → evict +         → evict +
//!     unsubscribe       unsubscribe
//! ```
//!
//! ### Lifecycle
//! ```text
//! Department::add_staff(&emp) ──► emp.subscribe(weak roster)
//!
//! emp.end_of_year_operation_on(today)
//!   ├─► stock < 0   ──► raise VacationStockNegative ──► each subscriber, in order
//!   └─► age > 60    ──► raise AgeAbove60            ──► each subscriber, in order
//!                                                        └─ Roster: evict? remove + unsubscribe
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Staff**         | Employees, positions, vacation and year-end evaluation.      | [`Employee`], [`Position`]                 |
//! | **Events**        | Lay-off notification payload and causes.                     | [`LayOffEvent`], [`LayOffCause`]           |
//! | **Subscriber API**| React to lay-offs (groups, logging, custom handlers).        | [`Subscribe`], [`SubscriberSet`]           |
//! | **Groups**        | Rosters with eviction policies.                              | [`Department`], [`Club`]                   |
//! | **Policies**      | Which causes evict from which group.                         | [`EvictionPolicy`]                         |
//! | **Errors**        | Typed errors for role-specific API misuse.                   | [`StaffError`]                             |
//! | **Configuration** | Settings for the built-in scenario.                          | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use chrono::NaiveDate;
//! use staffvisor::{Club, Department, Employee};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let hr = Department::new(1, "HR");
//! let club = Club::new(101, "Employee Club");
//!
//! let veteran = Employee::new(1, NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(), 5);
//! hr.add_staff(&veteran);
//! club.add_member(&veteran);
//!
//! veteran.end_of_year_operation_on(today);
//!
//! assert!(!hr.contains(1));  // age evicts from the department
//! assert!(club.contains(1)); // but not from the club
//! ```
mod config;
mod error;
mod events;
mod groups;
mod policies;
mod staff;
mod subscribers;

pub mod scenario;

// ---- Public re-exports ----

pub use config::Config;
pub use error::StaffError;
pub use events::{LayOffCause, LayOffEvent};
pub use groups::{Club, Department, GroupId};
pub use policies::EvictionPolicy;
pub use staff::{AGE_LIMIT, Employee, EmployeeId, Position, PositionKind, age_on};
pub use subscribers::{Subscribe, SubscribeFn, SubscriberSet, SubscriptionId};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
