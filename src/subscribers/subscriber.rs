//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for reacting to lay-off notifications. An
//! employee keeps an ordered [`SubscriberSet`](crate::subscribers::SubscriberSet)
//! and calls every subscriber synchronously, on the raising call stack.
//!
//! ## Contract
//! - Handlers run before the raising operation returns; keep them short.
//! - A handler may unsubscribe itself (or others) from `source`; the current
//!   delivery still completes over the snapshot taken when the event was raised.
//! - Handlers must not panic; a panic unwinds through the raising employee.
//!
//! ## Example (skeleton)
//! ```rust
//! use staffvisor::{Employee, LayOffEvent, Subscribe};
//!
//! struct Audit;
//!
//! impl Subscribe for Audit {
//!     fn on_event(&self, source: &Employee, event: &LayOffEvent) {
//!         let _ = (source.id(), event.cause);
//!     }
//!     fn name(&self) -> &str { "audit" }
//! }
//! ```

use crate::events::LayOffEvent;
use crate::staff::Employee;

/// Contract for lay-off subscribers.
pub trait Subscribe {
    /// Handle a single notification.
    ///
    /// # Parameters
    /// - `source`: the employee that raised the event
    /// - `event`: the notification (does not transfer ownership)
    fn on_event(&self, source: &Employee, event: &LayOffEvent);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
