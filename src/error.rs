//! Error types for the Attendance and Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation and
//! attendance bookkeeping.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Attendance and Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidCycleToken {
///     token: "2024/05".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid pay cycle token '2024/05': expected YYYY-MM"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pay cycle token did not match the `YYYY-MM` format.
    #[error("Invalid pay cycle token '{token}': expected YYYY-MM")]
    InvalidCycleToken {
        /// The token that failed validation.
        token: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of its valid range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record was not found in the store.
    #[error("Attendance record not found: {id}")]
    RecordNotFound {
        /// The id of the missing record.
        id: Uuid,
    },

    /// An attempt was made to close a shift that is already closed.
    #[error("Shift '{id}' is already closed")]
    ShiftAlreadyClosed {
        /// The id of the already-closed record.
        id: Uuid,
    },

    /// An employee already has an open shift for the given day.
    #[error("Employee '{employee_id}' already has an open shift on {date}")]
    DuplicateOpenShift {
        /// The employee with the open shift.
        employee_id: String,
        /// The day of the open shift.
        date: NaiveDate,
    },

    /// A transaction was not found in the store.
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The id of the missing transaction.
        id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cycle_token_displays_token() {
        let error = EngineError::InvalidCycleToken {
            token: "garbage".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pay cycle token 'garbage': expected YYYY-MM"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "cycle.start_day".to_string(),
            message: "must be between 1 and 28".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'cycle.start_day': must be between 1 and 28"
        );
    }

    #[test]
    fn test_record_not_found_displays_id() {
        let error = EngineError::RecordNotFound { id: Uuid::nil() };
        assert_eq!(
            error.to_string(),
            "Attendance record not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_duplicate_open_shift_displays_employee_and_date() {
        let error = EngineError::DuplicateOpenShift {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Employee 'emp_001' already has an open shift on 2024-05-12"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_token() -> EngineResult<()> {
            Err(EngineError::InvalidCycleToken {
                token: "bad".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_token()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
