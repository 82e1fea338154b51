//! Clock-time parsing and digit normalization.
//!
//! This module parses the `HH:MM` strings recorded at clock-in and
//! clock-out. Input may use Arabic-Indic digits (U+0660 through U+0669)
//! interchangeably with ASCII digits, so normalization happens first via a
//! table-driven codepoint mapping.

/// Mapping from Arabic-Indic digits to their ASCII equivalents.
const ARABIC_INDIC_DIGITS: [(char, char); 10] = [
    ('\u{0660}', '0'),
    ('\u{0661}', '1'),
    ('\u{0662}', '2'),
    ('\u{0663}', '3'),
    ('\u{0664}', '4'),
    ('\u{0665}', '5'),
    ('\u{0666}', '6'),
    ('\u{0667}', '7'),
    ('\u{0668}', '8'),
    ('\u{0669}', '9'),
];

/// A wall-clock time parsed from an `HH:MM` string.
///
/// Both fields are guaranteed in range: hour in `[0, 23]`, minute in
/// `[0, 59]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// The hour component, 0 through 23.
    pub hour: u32,
    /// The minute component, 0 through 59.
    pub minute: u32,
}

impl ClockTime {
    /// Returns the number of minutes since midnight.
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

/// Replaces every Arabic-Indic digit in the input with its ASCII
/// equivalent, leaving all other characters untouched.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_digits;
///
/// assert_eq!(normalize_digits("٠٩:٣٠"), "09:30");
/// assert_eq!(normalize_digits("17:00"), "17:00");
/// ```
pub fn normalize_digits(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            ARABIC_INDIC_DIGITS
                .iter()
                .find(|(arabic, _)| *arabic == c)
                .map_or(c, |(_, ascii)| *ascii)
        })
        .collect()
}

/// Parses an `HH:MM` string into a [`ClockTime`].
///
/// This function never fails: it is a leniency policy, not a validation
/// layer. Non-numeric, missing, or out-of-range segments degrade to zero,
/// so malformed input collapses to midnight. Upstream input is expected to
/// be validated before it reaches this engine.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{parse_clock_time, ClockTime};
///
/// assert_eq!(parse_clock_time("09:30"), ClockTime { hour: 9, minute: 30 });
/// assert_eq!(parse_clock_time("٢٢:١٥"), ClockTime { hour: 22, minute: 15 });
/// assert_eq!(parse_clock_time("garbage"), ClockTime { hour: 0, minute: 0 });
/// ```
pub fn parse_clock_time(raw: &str) -> ClockTime {
    let standardized = normalize_digits(raw);
    let mut segments = standardized.split(':');

    ClockTime {
        hour: parse_segment(segments.next(), 23),
        minute: parse_segment(segments.next(), 59),
    }
}

/// Parses one `HH` or `MM` segment, degrading to 0 when the segment is
/// missing, non-numeric, or above `max`.
fn parse_segment(segment: Option<&str>, max: u32) -> u32 {
    segment
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|value| *value <= max)
        .unwrap_or(0)
}
