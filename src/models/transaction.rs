//! Transaction model for ad-hoc pay adjustments.
//!
//! This module defines the Transaction struct and TransactionKind enum used
//! for one-off bonuses, deductions, and penalties applied to an employee's
//! pay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of pay adjustment a transaction represents.
///
/// Deductions and penalties are displayed differently but reduce pay
/// identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Extra pay on top of the base salary.
    Bonus,
    /// A reduction of pay, e.g. an advance or a missed shift.
    Deduction,
    /// A disciplinary reduction of pay.
    Penalty,
}

impl TransactionKind {
    /// Returns true for kinds that reduce pay.
    pub fn reduces_pay(&self) -> bool {
        matches!(self, TransactionKind::Deduction | TransactionKind::Penalty)
    }
}

/// A one-off financial adjustment to an employee's pay.
///
/// Transactions are created and deleted atomically by external callers and
/// are immutable from the engine's point of view. The amount is always a
/// positive quantity; the kind determines its sign in the net salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction.
    pub id: Uuid,
    /// The employee this transaction applies to.
    pub employee_id: String,
    /// The positive adjustment amount in the business's base currency unit.
    pub amount: Decimal,
    /// The kind of adjustment.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The day the transaction was recorded.
    pub date: NaiveDate,
    /// A free-text reason for the adjustment.
    pub note: String,
}
