//! Elapsed-hours calculation between two clock times.
//!
//! This module measures the length of a shift from its `HH:MM` clock-in and
//! clock-out strings, handling shifts that cross midnight.

use rust_decimal::Decimal;

use super::clock_time::parse_clock_time;

/// Minutes in a full day, added when a shift wraps past midnight.
const MINUTES_PER_DAY: i64 = 1440;

/// Calculates the hours elapsed between `time_in` and `time_out`.
///
/// An empty `time_out` means the shift is still open and contributes zero
/// hours. When the clock-out minute count is earlier than the clock-in
/// minute count the shift is assumed to have crossed midnight, so a full
/// day of minutes is added; shifts of 24 hours or more are not
/// representable. The result is an unrounded decimal hour count.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::shift_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(shift_hours("09:00", "17:00"), Decimal::from(8));
/// // Evening shift crossing midnight.
/// assert_eq!(shift_hours("22:00", "06:00"), Decimal::from(8));
/// // Open shift.
/// assert_eq!(shift_hours("09:00", ""), Decimal::ZERO);
/// ```
pub fn shift_hours(time_in: &str, time_out: &str) -> Decimal {
    if time_out.is_empty() {
        return Decimal::ZERO;
    }

    let clock_in = parse_clock_time(time_in);
    let clock_out = parse_clock_time(time_out);

    let mut delta_minutes = clock_out.total_minutes() - clock_in.total_minutes();
    if delta_minutes < 0 {
        delta_minutes += MINUTES_PER_DAY;
    }

    Decimal::from(delta_minutes) / Decimal::from(60)
}
