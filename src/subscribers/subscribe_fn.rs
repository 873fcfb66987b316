//! # Function-backed subscriber (`SubscribeFn`)
//!
//! [`SubscribeFn`] wraps a closure `F: Fn(&Employee, &LayOffEvent)` so ad-hoc
//! handlers do not need a dedicated type.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use staffvisor::{Employee, LayOffEvent, Subscribe, SubscribeFn};
//!
//! let s: Rc<dyn Subscribe> = SubscribeFn::rc("printer", |src: &Employee, ev: &LayOffEvent| {
//!     println!("employee {} -> {}", src.id(), ev.cause);
//! });
//!
//! assert_eq!(s.name(), "printer");
//! ```

use std::borrow::Cow;
use std::rc::Rc;

use crate::events::LayOffEvent;
use crate::staff::Employee;

use super::Subscribe;

/// Function-backed subscriber implementation.
pub struct SubscribeFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscribeFn<F>
where
    F: Fn(&Employee, &LayOffEvent),
{
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscribeFn::rc`]: employees only hold weak handles, so the
    /// caller must keep a strong one alive.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn rc(name: impl Into<Cow<'static, str>>, f: F) -> Rc<Self> {
        Rc::new(Self::new(name, f))
    }
}

impl<F> Subscribe for SubscribeFn<F>
where
    F: Fn(&Employee, &LayOffEvent),
{
    fn on_event(&self, source: &Employee, event: &LayOffEvent) {
        (self.f)(source, event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for SubscribeFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscribeFn")
            .field("name", &self.name)
            .finish()
    }
}
