//! Attendance aggregation over a pay cycle.
//!
//! This module sums the hours an employee worked on completed shifts
//! within one pay cycle.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, PayCycle};

/// Sums the completed-shift hours for one employee within a cycle.
///
/// Only records matching the employee whose shift has been closed and
/// whose date falls inside the cycle contribute. Open shifts exist in the
/// collection but are excluded from totals. Records may arrive in any
/// order; the result is a plain sum over the filtered subset and an
/// employee with no qualifying records totals zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::total_hours;
/// use payroll_engine::models::{AttendanceRecord, PayCycle, ShiftState};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let cycle = PayCycle {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// };
/// let records = vec![AttendanceRecord {
///     id: Uuid::nil(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
///     time_in: "09:00".to_string(),
///     state: ShiftState::Closed { time_out: "17:00".to_string() },
/// }];
///
/// assert_eq!(total_hours(&records, "emp_001", &cycle), Decimal::from(8));
/// assert_eq!(total_hours(&records, "emp_002", &cycle), Decimal::ZERO);
/// ```
pub fn total_hours(
    attendance: &[AttendanceRecord],
    employee_id: &str,
    cycle: &PayCycle,
) -> Decimal {
    attendance
        .iter()
        .filter(|record| record.employee_id == employee_id)
        .filter(|record| !record.is_open())
        .filter(|record| cycle.contains_date(record.date))
        .map(AttendanceRecord::worked_hours)
        .sum()
}
