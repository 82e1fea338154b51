//! Pay cycle model.
//!
//! This module contains the [`PayCycle`] type: the derived date range that a
//! payroll summary is computed over. A cycle is never persisted; it is
//! resolved from a `"YYYY-MM"` token on every computation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A pay cycle: the recurring, non-calendar-aligned pay period.
///
/// By default a cycle runs from the 10th of one calendar month through the
/// 9th of the next, inclusive of both days.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCycle;
/// use chrono::NaiveDate;
///
/// let cycle = PayCycle {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// };
///
/// assert!(cycle.contains_date(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
/// assert!(!cycle.contains_date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCycle {
    /// The first day of the cycle (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the cycle (inclusive).
    pub end_date: NaiveDate,
}

impl PayCycle {
    /// Checks if a given date falls within this cycle.
    ///
    /// The check is inclusive of both the start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the instant the cycle opens: midnight at the start of the
    /// first day.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start_date
            .and_hms_opt(0, 0, 0)
            .expect("valid midnight time")
    }

    /// Returns the instant the cycle closes: the last representable
    /// millisecond of the final day.
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end_date
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("valid end-of-day time")
    }
}
