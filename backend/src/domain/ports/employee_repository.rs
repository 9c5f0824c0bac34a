//! Driven port for employee persistence.
//!
//! Adapters store one employee per row. `save` inserts when the record has no
//! identifier and overwrites the matching row otherwise.

use async_trait::async_trait;

use crate::domain::{EmployeeId, EmployeeRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// An overwrite targeted a row that no longer exists.
        Missing { id: EmployeeId } =>
            "employee {id} no longer exists",
    }
}

/// Port for reading and writing employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert the record when `id` is unset, otherwise overwrite the row with
    /// that id. Returns the persisted record with its id populated.
    async fn save(&self, record: EmployeeRecord)
    -> Result<EmployeeRecord, EmployeeRepositoryError>;

    /// Find a record by id.
    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, EmployeeRepositoryError>;

    /// Return every stored record. Callers must not rely on the order.
    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeeRepositoryError>;

    /// Remove the row with the given id in a single operation.
    ///
    /// Returns `true` when a row was removed and `false` when none matched.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}
