//! Storage boundary for attendance bookkeeping.
//!
//! The engine computes over read-only snapshots; the authoritative record
//! collections live behind the [`AttendanceStore`] trait, mutated only
//! through the explicit command types in [`commands`]. The portal and
//! management collaborators hold a store; the summary builder never does.

mod commands;
mod memory;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, Transaction};

pub use commands::{
    ClockCommand, CloseShiftCommand, CreateTransactionCommand, DeleteTransactionCommand,
    OpenShiftCommand,
};
pub use memory::MemoryStore;

/// A read-only snapshot of the store's collections.
///
/// The engine computes over snapshots so that a summary is a pure function
/// of its inputs, whatever the store does underneath.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// All employee records.
    pub employees: Vec<Employee>,
    /// All attendance records.
    pub attendance: Vec<AttendanceRecord>,
    /// All transactions.
    pub transactions: Vec<Transaction>,
}

/// The write and snapshot capability of an attendance store.
///
/// Implementations own the authoritative collections and must serialize
/// writes; in particular they enforce the at-most-one-open-shift invariant
/// per employee and day, which the toggle decision alone cannot guarantee
/// against near-simultaneous calls.
pub trait AttendanceStore {
    /// Returns a snapshot of all collections.
    fn snapshot(&self) -> EngineResult<StoreSnapshot>;

    /// Creates a new open attendance record for a clock-in event.
    ///
    /// Fails with [`crate::error::EngineError::DuplicateOpenShift`] when the
    /// employee already has an open shift on the command's date.
    fn open_shift(&mut self, command: OpenShiftCommand) -> EngineResult<AttendanceRecord>;

    /// Closes an open attendance record for a clock-out event.
    ///
    /// Fails with [`crate::error::EngineError::RecordNotFound`] when the
    /// record does not exist and
    /// [`crate::error::EngineError::ShiftAlreadyClosed`] when it has already
    /// been closed.
    fn close_shift(&mut self, command: CloseShiftCommand) -> EngineResult<AttendanceRecord>;

    /// Records a new transaction.
    fn create_transaction(
        &mut self,
        command: CreateTransactionCommand,
    ) -> EngineResult<Transaction>;

    /// Deletes a transaction.
    ///
    /// Fails with [`crate::error::EngineError::TransactionNotFound`] when no
    /// transaction has the command's id.
    fn delete_transaction(&mut self, command: DeleteTransactionCommand) -> EngineResult<()>;
}

/// Applies a [`ClockCommand`] to a store, dispatching to the matching write.
///
/// Convenience for the portal collaborator, which pairs
/// [`crate::calculation::toggle_clock`] with a store.
pub fn apply_clock_command(
    store: &mut dyn AttendanceStore,
    command: ClockCommand,
) -> EngineResult<AttendanceRecord> {
    match command {
        ClockCommand::Open(open) => store.open_shift(open),
        ClockCommand::Close(close) => store.close_shift(close),
    }
}
