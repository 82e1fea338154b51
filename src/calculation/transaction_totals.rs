//! Transaction aggregation over a pay cycle.
//!
//! This module filters an employee's transactions to one pay cycle and
//! splits them into bonus and deduction totals.

use rust_decimal::Decimal;

use crate::models::{PayCycle, Transaction};

/// The result of splitting an employee's transactions over a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTotals {
    /// Sum of bonus amounts.
    pub bonuses: Decimal,
    /// Sum of deduction and penalty amounts.
    pub deductions: Decimal,
    /// The transactions that matched the employee and cycle, in input
    /// order, so callers can render a history without re-filtering.
    pub matching: Vec<Transaction>,
}

/// Filters transactions to one employee and cycle and totals them.
///
/// Bonuses accumulate separately from deductions; penalty transactions are
/// display-distinct but reduce pay exactly like deductions, so they land in
/// the deduction total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_transactions;
/// use payroll_engine::models::{PayCycle, Transaction, TransactionKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let cycle = PayCycle {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// };
/// let transactions = vec![Transaction {
///     id: Uuid::nil(),
///     employee_id: "emp_001".to_string(),
///     amount: Decimal::from(100),
///     kind: TransactionKind::Bonus,
///     date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
///     note: "holiday".to_string(),
/// }];
///
/// let totals = split_transactions(&transactions, "emp_001", &cycle);
/// assert_eq!(totals.bonuses, Decimal::from(100));
/// assert_eq!(totals.deductions, Decimal::ZERO);
/// assert_eq!(totals.matching.len(), 1);
/// ```
pub fn split_transactions(
    transactions: &[Transaction],
    employee_id: &str,
    cycle: &PayCycle,
) -> TransactionTotals {
    let matching: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.employee_id == employee_id && cycle.contains_date(t.date))
        .cloned()
        .collect();

    let bonuses = matching
        .iter()
        .filter(|t| !t.kind.reduces_pay())
        .map(|t| t.amount)
        .sum();

    let deductions = matching
        .iter()
        .filter(|t| t.kind.reduces_pay())
        .map(|t| t.amount)
        .sum();

    TransactionTotals {
        bonuses,
        deductions,
        matching,
    }
}
