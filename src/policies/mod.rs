//! Eviction policies.
//!
//! This module groups the rule that decides **which** lay-off causes remove an
//! employee from a group roster.
//!
//! ## Contents
//! - [`EvictionPolicy`] department rule vs club rule
//!
//! ## Quick wiring
//! ```text
//! Department / Club ─► Roster { policy: EvictionPolicy }
//!      └─► Roster::on_event uses policy.evicts(cause) to decide remove/keep
//! ```

mod eviction;

pub use eviction::EvictionPolicy;
