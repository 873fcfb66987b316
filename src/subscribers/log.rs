//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] logs every lay-off notification it receives through `tracing`.
//!
//! ## Output format
//! ```text
//! [lay-off] employee=1 cause=vacation_stock_negative seq=0
//! [lay-off] employee=1 cause=age_above_60 seq=1
//! ```
//!
//! ## Example
//! ```no_run
//! # #[cfg(feature = "logging")]
//! # {
//! use std::rc::Rc;
//! use chrono::NaiveDate;
//! use staffvisor::{Employee, LogWriter, Subscribe};
//!
//! let writer: Rc<dyn Subscribe> = Rc::new(LogWriter);
//! let emp = Employee::new(1, NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(), -1);
//! emp.subscribe(Rc::downgrade(&writer));
//! emp.end_of_year_operation();
//! # }
//! ```

use tracing::info;

use crate::Subscribe;
use crate::events::LayOffEvent;
use crate::staff::Employee;

/// Logging subscriber.
///
/// Enabled via the `logging` feature. Not a substitute for a real audit trail;
/// implement a custom [`Subscribe`] for that.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl Subscribe for LogWriter {
    fn on_event(&self, source: &Employee, e: &LayOffEvent) {
        info!(
            "[lay-off] employee={} cause={} seq={}",
            source.id(),
            e.cause,
            e.seq
        );
    }

    fn name(&self) -> &str {
        "log-writer"
    }
}
