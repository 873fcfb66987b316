//! # Scenario configuration.
//!
//! [`Config`] controls how the built-in scenario is run. There is no file or
//! environment-driven configuration; the binary fills it from command-line flags.
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use staffvisor::Config;
//!
//! let mut cfg = Config::default();
//! cfg.as_of = NaiveDate::from_ymd_opt(2026, 12, 31);
//!
//! assert_eq!(cfg.evaluation_date(), NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
//! ```

use chrono::{Local, NaiveDate};

/// Configuration for the scenario driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Date the year-end evaluation runs against (`None` = today's local date).
    pub as_of: Option<NaiveDate>,
}

impl Config {
    /// Date year-end evaluations should use.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}
