//! Payroll summary output models.
//!
//! This module contains the [`PayrollSummary`] type and the
//! [`PerformanceTier`] grading produced by a summary computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayCycle, Transaction};

/// A coarse grading of an employee's worked hours against the expected
/// target for the cycle.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PerformanceTier;
///
/// let tier = PerformanceTier::Excellent;
/// assert_eq!(format!("{:?}", tier), "Excellent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// Worked at least 95% of the target hours.
    Excellent,
    /// Worked at least 75% of the target hours.
    Good,
    /// Worked at least 50% of the target hours.
    Acceptable,
    /// Worked less than 50% of the target hours.
    Late,
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceTier::Excellent => write!(f, "Excellent"),
            PerformanceTier::Good => write!(f, "Good"),
            PerformanceTier::Acceptable => write!(f, "Acceptable"),
            PerformanceTier::Late => write!(f, "Late"),
        }
    }
}

/// The complete pay summary for one employee over one pay cycle.
///
/// Derived output, recomputed on every call and never cached by the engine.
/// No value is rounded; rounding to display precision is a presentation
/// concern. The net salary may be negative when deductions exceed earnings,
/// and that value is preserved rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The employee the summary is for.
    pub employee_id: String,
    /// The resolved pay cycle the summary covers.
    pub cycle: PayCycle,
    /// Total hours across completed shifts in the cycle.
    pub total_hours: Decimal,
    /// Pay earned from worked hours alone.
    pub base_salary: Decimal,
    /// Sum of bonus amounts in the cycle.
    pub total_bonuses: Decimal,
    /// Sum of deduction and penalty amounts in the cycle.
    pub total_deductions: Decimal,
    /// `base_salary + total_bonuses - total_deductions`, unclamped.
    pub net_salary: Decimal,
    /// The performance grading for the cycle.
    pub performance: PerformanceTier,
    /// The transactions that entered the computation, so callers can render
    /// a history without re-filtering.
    pub transactions: Vec<Transaction>,
}
