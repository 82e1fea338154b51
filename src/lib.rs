//! Attendance and Payroll Engine for daily-rate shift workers
//!
//! This crate provides the bookkeeping core for small businesses that pay
//! shift workers a daily rate: it turns raw clock-in/clock-out records and
//! ad-hoc bonuses, deductions, and penalties into a per-employee pay summary
//! for a recurring pay cycle running from the 10th of one month through the
//! 9th of the next.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
