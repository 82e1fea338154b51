//! Core data models for the Attendance and Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_cycle;
mod summary;
mod transaction;

pub use attendance::{AttendanceRecord, ShiftState};
pub use employee::{Employee, ShiftPeriod};
pub use pay_cycle::PayCycle;
pub use summary::{PayrollSummary, PerformanceTier};
pub use transaction::{Transaction, TransactionKind};
