//! # Employee entity and its lay-off notifications.
//!
//! An [`Employee`] owns a [`SubscriberSet`]. Whenever a disqualifying condition is
//! detected the employee builds a [`LayOffEvent`] and delivers it synchronously to
//! every subscriber, in subscription order, before the triggering call returns.
//!
//! ## Year-end evaluation
//! ```text
//! end_of_year_operation_on(today)
//!   ├─ Standard: vacation_stock < 0 ─► VacationStockNegative
//!   │            age(today) > 60    ─► AgeAbove60        (both may fire, in this order)
//!   ├─ Sales:    age computed only; never raises
//!   └─ Board:    no-op
//! ```
//!
//! ## Example
//! ```rust
//! use chrono::NaiveDate;
//! use staffvisor::{Employee, LayOffCause};
//!
//! let emp = Employee::new(1, NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(), -1);
//! let raised = emp.end_of_year_operation_on(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
//!
//! assert_eq!(raised, vec![LayOffCause::VacationStockNegative, LayOffCause::AgeAbove60]);
//! ```

use std::rc::Weak;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::StaffError;
use crate::events::{LayOffCause, LayOffEvent};
use crate::subscribers::{Subscribe, SubscriberSet, SubscriptionId};

use super::age::{AGE_LIMIT, age_on};
use super::{EmployeeId, Position, PositionKind};

/// Employee with identity, birth date, vacation balance and a notification channel.
#[derive(Debug)]
pub struct Employee {
    id: EmployeeId,
    birth_date: NaiveDate,
    /// Days; may go negative.
    vacation_stock: i64,
    position: Position,
    subscribers: SubscriberSet,
}

impl Employee {
    /// Creates a regular employee.
    pub fn new(id: EmployeeId, birth_date: NaiveDate, vacation_stock: i64) -> Self {
        Self::with_position(id, birth_date, vacation_stock, Position::Standard)
    }

    /// Creates a sales employee with their latest sales figure.
    pub fn sales_person(
        id: EmployeeId,
        birth_date: NaiveDate,
        vacation_stock: i64,
        achieved_target: i64,
    ) -> Self {
        Self::with_position(
            id,
            birth_date,
            vacation_stock,
            Position::Sales { achieved_target },
        )
    }

    /// Creates a board member.
    pub fn board_member(id: EmployeeId, birth_date: NaiveDate, vacation_stock: i64) -> Self {
        Self::with_position(id, birth_date, vacation_stock, Position::Board)
    }

    /// Creates an employee holding `position`.
    pub fn with_position(
        id: EmployeeId,
        birth_date: NaiveDate,
        vacation_stock: i64,
        position: Position,
    ) -> Self {
        Self {
            id,
            birth_date,
            vacation_stock,
            position,
            subscribers: SubscriberSet::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    #[inline]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[inline]
    pub fn vacation_stock(&self) -> i64 {
        self.vacation_stock
    }

    /// Overwrites the vacation balance (negative values allowed).
    pub fn set_vacation_stock(&mut self, days: i64) {
        self.vacation_stock = days;
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Latest sales figure, `None` unless the employee is sales staff.
    pub fn achieved_target(&self) -> Option<i64> {
        match self.position {
            Position::Sales { achieved_target } => Some(achieved_target),
            _ => None,
        }
    }

    /// Records a new sales figure.
    ///
    /// # Errors
    /// [`StaffError::PositionMismatch`] unless the employee is sales staff.
    pub fn set_achieved_target(&mut self, value: i64) -> Result<(), StaffError> {
        if let Position::Sales { achieved_target } = &mut self.position {
            *achieved_target = value;
            return Ok(());
        }
        Err(self.mismatch(PositionKind::Sales))
    }

    /// Requests vacation for the span `to - from` in whole days.
    ///
    /// Succeeds iff the balance covers the span, deducting it. The span is not
    /// validated: `to` before `from` requests a negative count, which always
    /// succeeds and raises the balance, unless the balance would overflow, in
    /// which case the request is refused and the balance left unchanged.
    pub fn request_vacation(&mut self, from: NaiveDate, to: NaiveDate) -> bool {
        let requested = to.signed_duration_since(from).num_days();
        let remaining = if self.vacation_stock >= requested {
            self.vacation_stock.checked_sub(requested)
        } else {
            None
        };
        match remaining {
            Some(left) => {
                self.vacation_stock = left;
                debug!(employee = self.id, requested, stock = left, "vacation granted");
                true
            }
            None => {
                debug!(employee = self.id, requested, stock = self.vacation_stock, "vacation refused");
                false
            }
        }
    }

    /// Runs the year-end evaluation against the local calendar date.
    ///
    /// See [`Employee::end_of_year_operation_on`].
    pub fn end_of_year_operation(&self) -> Vec<LayOffCause> {
        self.end_of_year_operation_on(Local::now().date_naive())
    }

    /// Runs the year-end evaluation as of `today`.
    ///
    /// Returns the causes raised, in the order subscribers received them.
    pub fn end_of_year_operation_on(&self, today: NaiveDate) -> Vec<LayOffCause> {
        let mut raised = Vec::new();
        match self.position {
            Position::Standard => {
                if self.vacation_stock < 0 {
                    self.raise(LayOffCause::VacationStockNegative);
                    raised.push(LayOffCause::VacationStockNegative);
                }
                if age_on(self.birth_date, today) > AGE_LIMIT {
                    self.raise(LayOffCause::AgeAbove60);
                    raised.push(LayOffCause::AgeAbove60);
                }
            }
            // Sales staff are not checked for vacation; past the age limit evaluation stops.
            Position::Sales { .. } => {
                let age = age_on(self.birth_date, today);
                if age > AGE_LIMIT {
                    debug!(employee = self.id, age, "sales staff past age limit, evaluation skipped");
                }
            }
            Position::Board => {}
        }
        raised
    }

    /// Compares the latest sales figure against `quota`.
    ///
    /// Raises `SalesTargetNotMet` and returns `Ok(false)` when the figure is below
    /// the quota; `Ok(true)` otherwise, with no notification.
    ///
    /// # Errors
    /// [`StaffError::PositionMismatch`] unless the employee is sales staff.
    pub fn check_target(&self, quota: i64) -> Result<bool, StaffError> {
        let Position::Sales { achieved_target } = self.position else {
            return Err(self.mismatch(PositionKind::Sales));
        };
        if achieved_target < quota {
            self.raise(LayOffCause::SalesTargetNotMet);
            return Ok(false);
        }
        Ok(true)
    }

    /// Voluntary resignation; always raises `Resigned`.
    ///
    /// # Errors
    /// [`StaffError::PositionMismatch`] unless the employee is a board member.
    pub fn resign(&self) -> Result<(), StaffError> {
        if self.position != Position::Board {
            return Err(self.mismatch(PositionKind::Board));
        }
        self.raise(LayOffCause::Resigned);
        Ok(())
    }

    /// Registers a subscriber for this employee's lay-off notifications.
    ///
    /// Only a weak handle is kept; the subscriber stops receiving events once dropped.
    pub fn subscribe(&self, sub: Weak<dyn Subscribe>) -> SubscriptionId {
        self.subscribers.subscribe(sub)
    }

    /// Removes a subscription; returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn raise(&self, cause: LayOffCause) {
        let event = LayOffEvent::new(cause).with_employee(self.id);
        debug!(employee = self.id, %cause, seq = event.seq, "raising lay-off");
        self.subscribers.emit(self, &event);
    }

    fn mismatch(&self, expected: PositionKind) -> StaffError {
        StaffError::PositionMismatch {
            employee: self.id,
            expected,
            actual: self.position.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::subscribers::SubscribeFn;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    /// Subscribes a recorder; keep the returned handle alive for the test.
    fn record(emp: &Employee) -> (Rc<dyn Subscribe>, Rc<RefCell<Vec<LayOffCause>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let sub: Rc<dyn Subscribe> =
            SubscribeFn::rc("recorder", move |src: &Employee, ev: &LayOffEvent| {
                assert_eq!(ev.employee, Some(src.id()));
                sink.borrow_mut().push(ev.cause);
            });
        emp.subscribe(Rc::downgrade(&sub));
        (sub, log)
    }

    #[test]
    fn test_vacation_granted_when_covered() {
        let mut emp = Employee::new(1, date(1990, 1, 1), 10);
        assert!(emp.request_vacation(date(2026, 7, 1), date(2026, 7, 11)));
        assert_eq!(emp.vacation_stock(), 0);
    }

    #[test]
    fn test_vacation_refused_leaves_stock() {
        let mut emp = Employee::new(1, date(1990, 1, 1), 3);
        assert!(!emp.request_vacation(date(2026, 7, 1), date(2026, 7, 5)));
        assert_eq!(emp.vacation_stock(), 3);
    }

    #[test]
    fn test_reversed_span_increases_stock() {
        let mut emp = Employee::new(1, date(1990, 1, 1), -2);
        assert!(emp.request_vacation(date(2026, 7, 5), date(2026, 7, 1)));
        assert_eq!(emp.vacation_stock(), 2);
    }

    #[test]
    fn test_reversed_span_at_max_stock_is_refused() {
        let mut emp = Employee::new(1, date(1990, 1, 1), i64::MAX);
        assert!(!emp.request_vacation(date(2026, 7, 2), date(2026, 7, 1)));
        assert_eq!(emp.vacation_stock(), i64::MAX);

        assert!(emp.request_vacation(date(2026, 7, 1), date(2026, 7, 2)));
        assert_eq!(emp.vacation_stock(), i64::MAX - 1);
    }

    #[test]
    fn test_local_date_evaluation_of_board_member_raises_nothing() {
        let emp = Employee::board_member(4, date(1940, 1, 1), -30);
        let (_keep, log) = record(&emp);
        assert!(emp.end_of_year_operation().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_zero_span_always_granted_with_non_negative_stock() {
        let mut emp = Employee::new(1, date(1990, 1, 1), 0);
        assert!(emp.request_vacation(date(2026, 7, 1), date(2026, 7, 1)));
        assert_eq!(emp.vacation_stock(), 0);
    }

    #[test]
    fn test_standard_negative_stock_raises_once() {
        let emp = Employee::new(1, date(1990, 1, 1), -1);
        let (_keep, log) = record(&emp);
        assert_eq!(
            emp.end_of_year_operation_on(today()),
            vec![LayOffCause::VacationStockNegative]
        );
        assert_eq!(*log.borrow(), vec![LayOffCause::VacationStockNegative]);
    }

    #[test]
    fn test_standard_both_causes_vacation_first() {
        let emp = Employee::new(1, date(1950, 1, 1), -1);
        let (_keep, log) = record(&emp);
        emp.end_of_year_operation_on(today());
        assert_eq!(
            *log.borrow(),
            vec![LayOffCause::VacationStockNegative, LayOffCause::AgeAbove60]
        );
    }

    #[test]
    fn test_standard_compliant_raises_nothing() {
        let emp = Employee::new(2, date(1990, 1, 1), 10);
        let (_keep, log) = record(&emp);
        assert!(emp.end_of_year_operation_on(today()).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_sales_never_raises_vacation_cause() {
        for birth in [date(1950, 1, 1), date(1990, 1, 1)] {
            let emp = Employee::sales_person(3, birth, -100, 5);
            let (_keep, log) = record(&emp);
            assert!(emp.end_of_year_operation_on(today()).is_empty());
            assert!(log.borrow().is_empty());
        }
    }

    #[test]
    fn test_board_year_end_is_noop() {
        let emp = Employee::board_member(4, date(1940, 1, 1), -30);
        let (_keep, log) = record(&emp);
        assert!(emp.end_of_year_operation_on(today()).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_check_target_below_quota_raises() {
        let emp = Employee::sales_person(3, date(1990, 1, 1), 10, 40);
        let (_keep, log) = record(&emp);
        assert_eq!(emp.check_target(50), Ok(false));
        assert_eq!(emp.check_target(40), Ok(true));
        assert_eq!(*log.borrow(), vec![LayOffCause::SalesTargetNotMet]);
    }

    #[test]
    fn test_set_achieved_target_changes_outcome() {
        let mut emp = Employee::sales_person(3, date(1990, 1, 1), 10, 40);
        emp.set_achieved_target(60).unwrap();
        assert_eq!(emp.achieved_target(), Some(60));
        assert_eq!(emp.check_target(50), Ok(true));
    }

    #[test]
    fn test_resign_raises_resigned() {
        let emp = Employee::board_member(4, date(1960, 1, 1), 0);
        let (_keep, log) = record(&emp);
        emp.resign().unwrap();
        assert_eq!(*log.borrow(), vec![LayOffCause::Resigned]);
    }

    #[test]
    fn test_role_operations_reject_other_positions() {
        let mut emp = Employee::new(5, date(1990, 1, 1), 0);
        let (_keep, log) = record(&emp);

        let err = emp.check_target(10).unwrap_err();
        assert_eq!(
            err,
            StaffError::PositionMismatch {
                employee: 5,
                expected: PositionKind::Sales,
                actual: PositionKind::Standard,
            }
        );
        assert!(emp.resign().is_err());
        assert!(emp.set_achieved_target(1).is_err());
        assert_eq!(emp.achieved_target(), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let emp = Employee::new(1, date(1990, 1, 1), -1);
        let log = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&log);
        let sub: Rc<dyn Subscribe> = SubscribeFn::rc("counter", move |_: &Employee, _: &LayOffEvent| {
            *sink.borrow_mut() += 1;
        });
        let id = emp.subscribe(Rc::downgrade(&sub));

        emp.end_of_year_operation_on(today());
        assert!(emp.unsubscribe(id));
        emp.end_of_year_operation_on(today());

        assert_eq!(*log.borrow(), 1);
        assert_eq!(emp.subscriber_count(), 0);
    }
}
