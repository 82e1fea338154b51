//! Calculation logic for the Attendance and Payroll Engine.
//!
//! This module contains all the computation functions for turning raw
//! attendance and transaction snapshots into a pay summary: clock-time
//! parsing with Arabic-Indic digit normalization, elapsed-hours calculation
//! with overnight wraparound, pay cycle resolution, attendance and
//! transaction aggregation, performance grading, summary composition, and
//! the clock-in/clock-out toggle decision.

mod attendance_hours;
mod clock_time;
mod clock_toggle;
mod cycle;
mod performance;
mod shift_hours;
mod summary;
mod transaction_totals;

pub use attendance_hours::total_hours;
pub use clock_time::{ClockTime, normalize_digits, parse_clock_time};
pub use clock_toggle::toggle_clock;
pub use cycle::resolve_cycle;
pub use performance::classify_performance;
pub use shift_hours::shift_hours;
pub use summary::summarize;
pub use transaction_totals::{TransactionTotals, split_transactions};
