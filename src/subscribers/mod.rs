//! # Lay-off subscribers.
//!
//! This module provides the [`Subscribe`] trait, the ordered [`SubscriberSet`]
//! every employee carries, and small built-in implementations.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Employee ── raise(cause) ──► SubscriberSet::emit (snapshot, in order)
//!                                      │
//!                                      ├──► Roster (Department)  ─► evict + unsubscribe
//!                                      ├──► Roster (Club)        ─► evict + unsubscribe
//!                                      └──► SubscribeFn / LogWriter / custom
//! ```
//!
//! ## Subscriber types
//! - **Stateful subscribers** - keep state driven by events (group rosters)
//! - **Passive subscribers** - only observe (logging, counters in tests)

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe_fn;
mod subscriber;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::{SubscriberSet, SubscriptionId};
pub use subscribe_fn::SubscribeFn;
pub use subscriber::Subscribe;
