//! # Eviction policies for group rosters.
//!
//! [`EvictionPolicy`] decides which lay-off causes remove an employee from a group.
//!
//! - [`EvictionPolicy::Department`] evicts on a negative vacation balance or age above the limit.
//! - [`EvictionPolicy::Club`] evicts on a negative vacation balance only.
//!
//! ## Cause matrix
//! ```text
//!                          Department   Club
//! VacationStockNegative    evict        evict
//! AgeAbove60               evict        keep
//! SalesTargetNotMet        keep         keep
//! Resigned                 keep         keep
//! ```

use crate::events::LayOffCause;

/// Policy controlling whether a notification removes the employee from a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Department rule: vacation or age causes.
    Department,
    /// Club rule: vacation cause only.
    Club,
}

impl EvictionPolicy {
    /// True if `cause` removes the employee under this policy.
    pub fn evicts(&self, cause: LayOffCause) -> bool {
        match self {
            EvictionPolicy::Department => matches!(
                cause,
                LayOffCause::VacationStockNegative | LayOffCause::AgeAbove60
            ),
            EvictionPolicy::Club => matches!(cause, LayOffCause::VacationStockNegative),
        }
    }
}
