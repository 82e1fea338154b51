//! Attendance record model and shift state.
//!
//! This module defines the AttendanceRecord struct and the ShiftState enum
//! that tags each record as open (clocked in) or closed (clocked out).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::shift_hours;
use crate::error::{EngineError, EngineResult};

/// The state of a shift: open until the employee clocks out, then closed.
///
/// Closing is a terminal transition; a closed record is never mutated again
/// by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShiftState {
    /// The employee has clocked in but not yet clocked out.
    Open,
    /// The employee has clocked out.
    Closed {
        /// The clock-out time as an `HH:MM` string.
        time_out: String,
    },
}

/// One check-in/check-out pair for an employee on a calendar day.
///
/// Clock times are kept as raw `HH:MM` strings because they arrive from the
/// portal as typed or scanned text, possibly using Arabic-Indic digits.
/// Parsing happens lazily in the calculation layer.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, ShiftState};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = AttendanceRecord {
///     id: Uuid::nil(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
///     time_in: "09:00".to_string(),
///     state: ShiftState::Closed { time_out: "17:00".to_string() },
/// };
/// assert_eq!(record.worked_hours(), Decimal::from(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day of the shift.
    pub date: NaiveDate,
    /// The clock-in time as an `HH:MM` string.
    pub time_in: String,
    /// Whether the shift is still open or has been closed.
    #[serde(flatten)]
    pub state: ShiftState,
}

impl AttendanceRecord {
    /// Creates a new open record for a clock-in event.
    pub fn open(id: Uuid, employee_id: String, date: NaiveDate, time_in: String) -> Self {
        Self {
            id,
            employee_id,
            date,
            time_in,
            state: ShiftState::Open,
        }
    }

    /// Returns true if the employee has not yet clocked out.
    pub fn is_open(&self) -> bool {
        self.state == ShiftState::Open
    }

    /// Returns the clock-out time, if the shift has been closed.
    pub fn time_out(&self) -> Option<&str> {
        match &self.state {
            ShiftState::Open => None,
            ShiftState::Closed { time_out } => Some(time_out),
        }
    }

    /// Closes the shift with the given clock-out time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftAlreadyClosed`] if the record is already
    /// closed; the transition is terminal.
    pub fn close(&mut self, time_out: String) -> EngineResult<()> {
        match self.state {
            ShiftState::Open => {
                self.state = ShiftState::Closed { time_out };
                Ok(())
            }
            ShiftState::Closed { .. } => Err(EngineError::ShiftAlreadyClosed { id: self.id }),
        }
    }

    /// Calculates the hours worked on this shift.
    ///
    /// Open shifts contribute zero hours; closed shifts are measured from
    /// clock-in to clock-out with overnight wraparound.
    pub fn worked_hours(&self) -> Decimal {
        match &self.state {
            ShiftState::Open => Decimal::ZERO,
            ShiftState::Closed { time_out } => shift_hours(&self.time_in, time_out),
        }
    }
}
