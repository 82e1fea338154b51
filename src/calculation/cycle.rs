//! Pay cycle resolution.
//!
//! This module maps a `"YYYY-MM"` calendar-month token to the business's
//! actual pay cycle: the range starting on the configured boundary day of
//! that month and ending the day before the boundary day of the following
//! month.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::PayCycle;

/// Resolves a `"YYYY-MM"` token to its pay cycle date range.
///
/// With the default configuration the cycle for `"2024-05"` runs from
/// 2024-05-10 through 2024-06-09, both inclusive. The end date is derived
/// by calendar arithmetic — the day before the next cycle's start — so
/// months of different lengths and the December-to-January year rollover
/// need no special casing.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCycleToken`] when the token is not a
/// well-formed `YYYY-MM` month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_cycle;
/// use payroll_engine::config::EngineConfig;
/// use chrono::NaiveDate;
///
/// let config = EngineConfig::default();
/// let cycle = resolve_cycle("2024-12", &config).unwrap();
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
/// assert_eq!(cycle.end_date, NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
/// ```
pub fn resolve_cycle(token: &str, config: &EngineConfig) -> EngineResult<PayCycle> {
    let (year, month) = parse_token(token)?;
    let start_day = config.cycle.start_day;

    let invalid = || EngineError::InvalidCycleToken {
        token: token.to_string(),
    };

    let start_date = NaiveDate::from_ymd_opt(year, month, start_day).ok_or_else(invalid)?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_start = NaiveDate::from_ymd_opt(next_year, next_month, start_day).ok_or_else(invalid)?;
    let end_date = next_start.pred_opt().ok_or_else(invalid)?;

    Ok(PayCycle {
        start_date,
        end_date,
    })
}

/// Splits a `"YYYY-MM"` token into its year and month, validating both.
fn parse_token(token: &str) -> EngineResult<(i32, u32)> {
    let invalid = || EngineError::InvalidCycleToken {
        token: token.to_string(),
    };

    let (year_str, month_str) = token.split_once('-').ok_or_else(invalid)?;
    if year_str.len() != 4 || month_str.len() != 2 {
        return Err(invalid());
    }

    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let month: u32 = month_str.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}
