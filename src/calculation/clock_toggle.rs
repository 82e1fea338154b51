//! Clock-in/clock-out toggle decision.
//!
//! This module decides which mutation a clock-button press should trigger
//! for an employee: closing the shift that is currently open for today, or
//! opening a new one. It only produces the command; persisting it is the
//! store's job.

use chrono::NaiveDate;

use crate::models::AttendanceRecord;
use crate::store::{ClockCommand, CloseShiftCommand, OpenShiftCommand};

/// Decides the clock transition for an employee at `now` on `today`.
///
/// The state machine has two states per employee and day: clocked in
/// (exactly one open record exists) and not clocked in. If an open record
/// is found for `(employee_id, today)` the decision is to close it;
/// otherwise it is to open a new record. There are no retries and no
/// cancellation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::toggle_clock;
/// use payroll_engine::store::ClockCommand;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
/// // No records yet: the first press clocks in.
/// let command = toggle_clock(&[], "emp_001", today, "09:00");
/// assert!(matches!(command, ClockCommand::Open(_)));
/// ```
pub fn toggle_clock(
    attendance: &[AttendanceRecord],
    employee_id: &str,
    today: NaiveDate,
    now: &str,
) -> ClockCommand {
    let open_today = attendance
        .iter()
        .find(|record| record.employee_id == employee_id && record.date == today && record.is_open());

    match open_today {
        Some(record) => ClockCommand::Close(CloseShiftCommand {
            record_id: record.id,
            time_out: now.to_string(),
        }),
        None => ClockCommand::Open(OpenShiftCommand {
            employee_id: employee_id.to_string(),
            date: today,
            time_in: now.to_string(),
        }),
    }
}
