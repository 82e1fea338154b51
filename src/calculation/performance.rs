//! Performance grading.
//!
//! This module grades an employee's worked hours against the expected
//! target for a cycle into a discrete [`PerformanceTier`].

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::PerformanceTier;

/// Grades worked hours against the cycle target.
///
/// The target is the employee's standard shift length times the configured
/// expected shift count (24 by default, independent of the cycle's actual
/// length in days). `standard_hours` of zero or less falls back to 8, which
/// also keeps the target above zero. Thresholds are evaluated in descending
/// order and are inclusive on the lower bound of each tier.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_performance;
/// use payroll_engine::config::EngineConfig;
/// use payroll_engine::models::PerformanceTier;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// // Target is 8 * 24 = 192 hours; 16 worked hours is well below 50%.
/// let tier = classify_performance(Decimal::from(16), Decimal::from(8), &config);
/// assert_eq!(tier, PerformanceTier::Late);
/// ```
pub fn classify_performance(
    hours_worked: Decimal,
    standard_hours: Decimal,
    config: &EngineConfig,
) -> PerformanceTier {
    let per_shift = if standard_hours > Decimal::ZERO {
        standard_hours
    } else {
        Decimal::from(8)
    };
    let target_hours = per_shift * Decimal::from(config.performance.shifts_per_cycle);
    let ratio = hours_worked / target_hours;

    let bands = &config.performance.bands;
    if ratio >= bands.excellent {
        PerformanceTier::Excellent
    } else if ratio >= bands.good {
        PerformanceTier::Good
    } else if ratio >= bands.acceptable {
        PerformanceTier::Acceptable
    } else {
        PerformanceTier::Late
    }
}
