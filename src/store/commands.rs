//! Mutation commands for the attendance store.
//!
//! Every write the store accepts is described by one of these command
//! types, so the set of valid mutations is closed and checkable. The
//! engine itself only *produces* commands (from the clock toggle); applying
//! them is the store's job.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TransactionKind;

/// Request to create a new open attendance record for a clock-in event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenShiftCommand {
    /// The employee clocking in.
    pub employee_id: String,
    /// The calendar day of the shift.
    pub date: NaiveDate,
    /// The clock-in time as an `HH:MM` string.
    pub time_in: String,
}

/// Request to close an open attendance record for a clock-out event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseShiftCommand {
    /// The record to close.
    pub record_id: Uuid,
    /// The clock-out time as an `HH:MM` string.
    pub time_out: String,
}

/// Request to record a bonus, deduction, or penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionCommand {
    /// The employee the adjustment applies to.
    pub employee_id: String,
    /// The positive adjustment amount.
    pub amount: Decimal,
    /// The kind of adjustment.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The day the adjustment is recorded for.
    pub date: NaiveDate,
    /// A free-text reason for the adjustment.
    pub note: String,
}

/// Request to delete a previously recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTransactionCommand {
    /// The transaction to delete.
    pub transaction_id: Uuid,
}

/// The mutation a clock-button press should trigger: exactly one of the two
/// shift transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClockCommand {
    /// Clock in: create a new open record.
    Open(OpenShiftCommand),
    /// Clock out: close the currently open record.
    Close(CloseShiftCommand),
}
