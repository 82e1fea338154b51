//! In-memory attendance store.
//!
//! A Vec-backed [`AttendanceStore`] implementation. Durability is out of
//! scope for the engine, so this is both the reference implementation for
//! tests and a usable backend for single-process deployments.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, Transaction};

use super::commands::{
    CloseShiftCommand, CreateTransactionCommand, DeleteTransactionCommand, OpenShiftCommand,
};
use super::{AttendanceStore, StoreSnapshot};

/// An in-memory implementation of [`AttendanceStore`].
///
/// # Example
///
/// ```
/// use payroll_engine::store::{AttendanceStore, MemoryStore, OpenShiftCommand};
/// use chrono::NaiveDate;
///
/// let mut store = MemoryStore::new();
/// let record = store
///     .open_shift(OpenShiftCommand {
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
///         time_in: "09:00".to_string(),
///     })
///     .unwrap();
/// assert!(record.is_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee, replacing any existing record with the same id.
    ///
    /// Employee management belongs to an external collaborator; this helper
    /// exists so that collaborator (and tests) can populate the store.
    pub fn upsert_employee(&mut self, employee: Employee) {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee,
            None => self.employees.push(employee),
        }
    }

    /// Removes an employee record. Attendance and transactions are kept;
    /// removal is an administrative action, not a cascade.
    pub fn remove_employee(&mut self, employee_id: &str) {
        self.employees.retain(|e| e.id != employee_id);
    }

    fn has_open_shift(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.attendance
            .iter()
            .any(|r| r.employee_id == employee_id && r.date == date && r.is_open())
    }
}

impl AttendanceStore for MemoryStore {
    fn snapshot(&self) -> EngineResult<StoreSnapshot> {
        Ok(StoreSnapshot {
            employees: self.employees.clone(),
            attendance: self.attendance.clone(),
            transactions: self.transactions.clone(),
        })
    }

    fn open_shift(&mut self, command: OpenShiftCommand) -> EngineResult<AttendanceRecord> {
        // The uniqueness check lives here, at the write path, so two
        // near-simultaneous toggle decisions cannot both create a record.
        if self.has_open_shift(&command.employee_id, command.date) {
            return Err(EngineError::DuplicateOpenShift {
                employee_id: command.employee_id,
                date: command.date,
            });
        }

        let record = AttendanceRecord::open(
            Uuid::new_v4(),
            command.employee_id,
            command.date,
            command.time_in,
        );
        info!(
            record_id = %record.id,
            employee_id = %record.employee_id,
            date = %record.date,
            "Clocked in"
        );
        self.attendance.push(record.clone());
        Ok(record)
    }

    fn close_shift(&mut self, command: CloseShiftCommand) -> EngineResult<AttendanceRecord> {
        let record = self
            .attendance
            .iter_mut()
            .find(|r| r.id == command.record_id)
            .ok_or(EngineError::RecordNotFound {
                id: command.record_id,
            })?;

        record.close(command.time_out)?;
        info!(
            record_id = %record.id,
            employee_id = %record.employee_id,
            date = %record.date,
            "Clocked out"
        );
        Ok(record.clone())
    }

    fn create_transaction(
        &mut self,
        command: CreateTransactionCommand,
    ) -> EngineResult<Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            employee_id: command.employee_id,
            amount: command.amount,
            kind: command.kind,
            date: command.date,
            note: command.note,
        };
        debug!(
            transaction_id = %transaction.id,
            employee_id = %transaction.employee_id,
            kind = ?transaction.kind,
            amount = %transaction.amount,
            "Recorded transaction"
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    fn delete_transaction(&mut self, command: DeleteTransactionCommand) -> EngineResult<()> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == command.transaction_id)
            .ok_or(EngineError::TransactionNotFound {
                id: command.transaction_id,
            })?;

        let removed = self.transactions.remove(index);
        debug!(transaction_id = %removed.id, "Deleted transaction");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftPeriod, TransactionKind};
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn open_command(employee_id: &str, date: &str, time_in: &str) -> OpenShiftCommand {
        OpenShiftCommand {
            employee_id: employee_id.to_string(),
            date: make_date(date),
            time_in: time_in.to_string(),
        }
    }

    fn create_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Samir".to_string(),
            phone: "0100000000".to_string(),
            daily_rate: Decimal::from(150),
            standard_hours: Decimal::from(8),
            shift: ShiftPeriod::Morning,
            is_active: true,
            joined_date: make_date("2023-06-01"),
        }
    }

    #[test]
    fn test_open_shift_creates_open_record() {
        let mut store = MemoryStore::new();
        let record = store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();

        assert!(record.is_open());
        assert_eq!(record.employee_id, "emp_001");

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.attendance, vec![record]);
    }

    #[test]
    fn test_second_open_shift_same_day_is_rejected() {
        let mut store = MemoryStore::new();
        store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();

        let result = store.open_shift(open_command("emp_001", "2024-05-12", "09:01"));
        match result.unwrap_err() {
            EngineError::DuplicateOpenShift { employee_id, date } => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(date, make_date("2024-05-12"));
            }
            other => panic!("Expected DuplicateOpenShift, got {:?}", other),
        }
    }

    #[test]
    fn test_open_shift_allowed_after_close() {
        let mut store = MemoryStore::new();
        let record = store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();
        store
            .close_shift(CloseShiftCommand {
                record_id: record.id,
                time_out: "13:00".to_string(),
            })
            .unwrap();

        // A second shift on the same day is fine once the first is closed.
        assert!(
            store
                .open_shift(open_command("emp_001", "2024-05-12", "14:00"))
                .is_ok()
        );
    }

    #[test]
    fn test_open_shift_allowed_for_other_employee() {
        let mut store = MemoryStore::new();
        store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();
        assert!(
            store
                .open_shift(open_command("emp_002", "2024-05-12", "09:00"))
                .is_ok()
        );
    }

    #[test]
    fn test_close_shift_sets_time_out() {
        let mut store = MemoryStore::new();
        let record = store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();

        let closed = store
            .close_shift(CloseShiftCommand {
                record_id: record.id,
                time_out: "17:00".to_string(),
            })
            .unwrap();

        assert!(!closed.is_open());
        assert_eq!(closed.time_out(), Some("17:00"));
    }

    #[test]
    fn test_close_unknown_record_fails() {
        let mut store = MemoryStore::new();
        let result = store.close_shift(CloseShiftCommand {
            record_id: Uuid::nil(),
            time_out: "17:00".to_string(),
        });

        match result.unwrap_err() {
            EngineError::RecordNotFound { id } => assert_eq!(id, Uuid::nil()),
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_close_twice_fails() {
        let mut store = MemoryStore::new();
        let record = store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();
        let close = CloseShiftCommand {
            record_id: record.id,
            time_out: "17:00".to_string(),
        };
        store.close_shift(close.clone()).unwrap();

        match store.close_shift(close).unwrap_err() {
            EngineError::ShiftAlreadyClosed { id } => assert_eq!(id, record.id),
            other => panic!("Expected ShiftAlreadyClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_create_and_delete_transaction() {
        let mut store = MemoryStore::new();
        let transaction = store
            .create_transaction(CreateTransactionCommand {
                employee_id: "emp_001".to_string(),
                amount: Decimal::from(100),
                kind: TransactionKind::Bonus,
                date: make_date("2024-05-15"),
                note: "holiday".to_string(),
            })
            .unwrap();

        assert_eq!(store.snapshot().unwrap().transactions.len(), 1);

        store
            .delete_transaction(DeleteTransactionCommand {
                transaction_id: transaction.id,
            })
            .unwrap();
        assert!(store.snapshot().unwrap().transactions.is_empty());
    }

    #[test]
    fn test_delete_unknown_transaction_fails() {
        let mut store = MemoryStore::new();
        let result = store.delete_transaction(DeleteTransactionCommand {
            transaction_id: Uuid::nil(),
        });

        match result.unwrap_err() {
            EngineError::TransactionNotFound { id } => assert_eq!(id, Uuid::nil()),
            other => panic!("Expected TransactionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_upsert_employee_replaces_existing() {
        let mut store = MemoryStore::new();
        store.upsert_employee(create_employee("emp_001"));

        let mut updated = create_employee("emp_001");
        updated.daily_rate = Decimal::from(200);
        store.upsert_employee(updated);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.employees.len(), 1);
        assert_eq!(snapshot.employees[0].daily_rate, Decimal::from(200));
    }

    #[test]
    fn test_remove_employee_keeps_history() {
        let mut store = MemoryStore::new();
        store.upsert_employee(create_employee("emp_001"));
        store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();

        store.remove_employee("emp_001");

        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.employees.is_empty());
        assert_eq!(snapshot.attendance.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store = MemoryStore::new();
        store
            .open_shift(open_command("emp_001", "2024-05-12", "09:00"))
            .unwrap();

        let snapshot = store.snapshot().unwrap();
        store
            .open_shift(open_command("emp_002", "2024-05-12", "09:00"))
            .unwrap();

        // The snapshot keeps its state from before the second write.
        assert_eq!(snapshot.attendance.len(), 1);
    }
}
