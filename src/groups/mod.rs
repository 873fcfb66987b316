//! Groups tracking employees: departments and clubs.
//!
//! Both keep a roster keyed by employee id and subscribe to each member's lay-off
//! notifications on add. They differ only in their
//! [`EvictionPolicy`](crate::EvictionPolicy).
//!
//! Membership is independent per group: an employee may belong to any number of
//! departments and clubs, and dropping a group never affects its members.
//!
//! ## Per employee, per group
//! ```text
//! NotMember ── add ──► Member ── evicting cause ──► Removed (unsubscribed)
//!                        ▲                              │
//!                        └──────────── add ─────────────┘
//! ```

mod club;
mod department;
mod roster;

pub use club::Club;
pub use department::Department;

/// Identity of a department or club.
pub type GroupId = u32;
