//! # Built-in demonstration scenario.
//!
//! Reproduces the fixed startup sequence:
//! ```text
//! Department(1, "HR")   Club(101, "Employee Club")
//! emp1: id 1, born 1950-01-01, stock -1
//! emp2: id 2, born 1990-01-01, stock 10
//!
//! add emp1, emp2 to department; add emp1, emp2 to club
//! evaluate emp1            ─► removed from department and club
//! evaluate emp2            ─► stays
//! emp1.stock = -5; evaluate emp1 ─► already unsubscribed, nothing happens
//! ```

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Config;
use crate::groups::{Club, Department};
use crate::staff::{Employee, EmployeeId};

/// Final rosters after the scenario ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioReport {
    pub department: Vec<EmployeeId>,
    pub club: Vec<EmployeeId>,
}

/// Runs the scenario, evaluating as of [`Config::evaluation_date`].
pub fn run(cfg: &Config) -> ScenarioReport {
    let today = cfg.evaluation_date();
    info!(%today, "running year-end scenario");

    let department = Department::new(1, "HR");
    let club = Club::new(101, "Employee Club");

    let mut emp1 = Employee::new(1, ymd(1950, 1, 1), -1);
    let emp2 = Employee::new(2, ymd(1990, 1, 1), 10);

    department.add_staff(&emp1);
    department.add_staff(&emp2);
    club.add_member(&emp1);
    club.add_member(&emp2);

    for emp in [&emp1, &emp2] {
        let raised = emp.end_of_year_operation_on(today);
        debug!(employee = emp.id(), ?raised, "year-end evaluation done");
    }

    emp1.set_vacation_stock(-5);
    let raised = emp1.end_of_year_operation_on(today);
    debug!(employee = emp1.id(), ?raised, "re-evaluation done");

    ScenarioReport {
        department: department.members(),
        club: club.members(),
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
