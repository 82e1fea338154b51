//! Payroll summary composition.
//!
//! This module contains the public entry point of the engine: composing the
//! cycle resolver, the attendance and transaction aggregators, and the
//! performance grading into one [`PayrollSummary`].

use tracing::debug;

use crate::calculation::{classify_performance, resolve_cycle, split_transactions, total_hours};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, PayrollSummary, Transaction};

/// Computes the pay summary for one employee over one pay cycle.
///
/// This is a pure function over the passed-in snapshots: it holds no state,
/// performs no I/O, and calling it twice with identical inputs yields
/// identical output. The hourly rate is the daily rate divided by the
/// employee's standard shift length (8 when unset); the net salary is
/// `base + bonuses - deductions` with no rounding and no floor at zero.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidCycleToken`] when
/// `cycle_token` is not a well-formed `YYYY-MM` month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize;
/// use payroll_engine::config::EngineConfig;
/// use payroll_engine::models::{Employee, ShiftPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Samir".to_string(),
///     phone: "0100000000".to_string(),
///     daily_rate: Decimal::from(150),
///     standard_hours: Decimal::from(8),
///     shift: ShiftPeriod::Morning,
///     is_active: true,
///     joined_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
/// };
///
/// let summary = summarize(&employee, &[], &[], "2024-05", &EngineConfig::default()).unwrap();
/// assert_eq!(summary.total_hours, Decimal::ZERO);
/// assert_eq!(summary.net_salary, Decimal::ZERO);
/// ```
pub fn summarize(
    employee: &Employee,
    attendance: &[AttendanceRecord],
    transactions: &[Transaction],
    cycle_token: &str,
    config: &EngineConfig,
) -> EngineResult<PayrollSummary> {
    let cycle = resolve_cycle(cycle_token, config)?;

    let total_hours = total_hours(attendance, &employee.id, &cycle);
    let totals = split_transactions(transactions, &employee.id, &cycle);

    let base_salary = employee.hourly_rate() * total_hours;
    let net_salary = base_salary + totals.bonuses - totals.deductions;
    let performance = classify_performance(total_hours, employee.standard_hours, config);

    debug!(
        employee_id = %employee.id,
        cycle_token,
        %total_hours,
        %net_salary,
        ?performance,
        "Computed payroll summary"
    );

    Ok(PayrollSummary {
        employee_id: employee.id.clone(),
        cycle,
        total_hours,
        base_salary,
        total_bonuses: totals.bonuses,
        total_deductions: totals.deductions,
        net_salary,
        performance,
        transactions: totals.matching,
    })
}
