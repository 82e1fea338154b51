//! Employee model and related types.
//!
//! This module defines the Employee struct and ShiftPeriod enum
//! for representing workers in the payroll system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the shift an employee is rostered on.
///
/// Informational only: pay is derived from clock times, not from the
/// rostered period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPeriod {
    /// The morning shift.
    Morning,
    /// The evening shift.
    Evening,
}

/// Represents an employee paid a daily rate for shift work.
///
/// Employee records are owned and mutated by the employee-management
/// collaborator; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's phone number.
    pub phone: String,
    /// Pay in currency units for one full shift.
    pub daily_rate: Decimal,
    /// Expected shift length in hours. Zero means "not set"; see
    /// [`Employee::effective_standard_hours`].
    #[serde(default)]
    pub standard_hours: Decimal,
    /// The shift the employee is rostered on.
    pub shift: ShiftPeriod,
    /// Whether the employee is currently active.
    pub is_active: bool,
    /// The date the employee joined the business.
    pub joined_date: NaiveDate,
}

impl Employee {
    /// Returns the employee's standard shift length, substituting 8 hours
    /// when the stored value is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, ShiftPeriod};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Samir".to_string(),
    ///     phone: "0100000000".to_string(),
    ///     daily_rate: Decimal::from(150),
    ///     standard_hours: Decimal::ZERO,
    ///     shift: ShiftPeriod::Morning,
    ///     is_active: true,
    ///     joined_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    /// };
    /// assert_eq!(employee.effective_standard_hours(), Decimal::from(8));
    /// ```
    pub fn effective_standard_hours(&self) -> Decimal {
        if self.standard_hours > Decimal::ZERO {
            self.standard_hours
        } else {
            Decimal::from(8)
        }
    }

    /// Returns the hourly rate implied by the daily rate and standard
    /// shift length.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, ShiftPeriod};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
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
    /// assert_eq!(employee.hourly_rate(), Decimal::from_str("18.75").unwrap());
    /// ```
    pub fn hourly_rate(&self) -> Decimal {
        self.daily_rate / self.effective_standard_hours()
    }
}
