//! Driving port for employee management.
//!
//! Inbound adapters call this port with transfer objects and receive transfer
//! objects back. Absent identifiers surface as
//! [`EmployeeServiceError::NotFound`].

use async_trait::async_trait;
use serde_json::json;
use tracing::error;

use crate::domain::{EmployeeDto, EmployeeId, Error};

use super::EmployeeRepositoryError;

/// Failures reported by [`EmployeeService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeServiceError {
    /// No employee exists with the requested id.
    #[error("Employee is not exists with given Id: {id}")]
    NotFound { id: EmployeeId },
    /// The backing repository failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
}

impl EmployeeServiceError {
    /// Shorthand for [`EmployeeServiceError::NotFound`].
    pub fn not_found(id: EmployeeId) -> Self {
        Self::NotFound { id }
    }
}

impl From<EmployeeServiceError> for Error {
    fn from(value: EmployeeServiceError) -> Self {
        let message = value.to_string();
        match value {
            EmployeeServiceError::NotFound { id } => {
                Error::not_found(message).with_details(json!({ "id": id }))
            }
            EmployeeServiceError::Repository(source) => {
                error!(error = %source, "employee repository failure");
                Error::internal(message)
            }
        }
    }
}

/// Use cases exposed over the employee API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist a new employee. Any id carried by `employee` is ignored.
    async fn create_employee(&self, employee: EmployeeDto)
    -> Result<EmployeeDto, EmployeeServiceError>;

    /// Fetch one employee.
    async fn get_employee_by_id(&self, id: EmployeeId)
    -> Result<EmployeeDto, EmployeeServiceError>;

    /// Fetch every employee.
    async fn get_all_employees(&self) -> Result<Vec<EmployeeDto>, EmployeeServiceError>;

    /// Replace the names and email of an existing employee.
    async fn update_employee(
        &self,
        id: EmployeeId,
        employee: EmployeeDto,
    ) -> Result<EmployeeDto, EmployeeServiceError>;

    /// Remove an existing employee.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeServiceError>;
}
