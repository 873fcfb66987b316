//! Whole-year age computation used by the year-end evaluation.

use chrono::{Datelike, NaiveDate};

/// Employees strictly older than this are reported with `AgeAbove60`.
pub const AGE_LIMIT: i32 = 60;

/// Age in whole years on `today`.
///
/// Starts from the difference of calendar years and subtracts one while this
/// year's birthday is still ahead. A Feb 29 birthday counts as reached on Mar 1
/// in non-leap years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (birth.month(), birth.day()) > (today.month(), today.day()) {
        age -= 1;
    }
    age
}
