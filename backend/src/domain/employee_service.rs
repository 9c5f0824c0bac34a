//! Employee domain service.
//!
//! Implements the [`EmployeeService`] driving port on top of any
//! [`EmployeeRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::employee_mapper::{to_dto, to_record};
use crate::domain::ports::{
    EmployeeRepository, EmployeeRepositoryError, EmployeeService, EmployeeServiceError,
};
use crate::domain::{EmployeeDto, EmployeeId, EmployeeRecord};

fn map_repository_error(id: EmployeeId, error: EmployeeRepositoryError) -> EmployeeServiceError {
    match error {
        EmployeeRepositoryError::Missing { .. } => EmployeeServiceError::not_found(id),
        other => EmployeeServiceError::Repository(other),
    }
}

/// Employee service backed by a repository.
#[derive(Clone)]
pub struct EmployeeServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> EmployeeServiceImpl<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    async fn load(&self, id: EmployeeId) -> Result<EmployeeRecord, EmployeeServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(record) => Ok(record),
            None => {
                debug!(employee_id = %id, "employee not found");
                Err(EmployeeServiceError::not_found(id))
            }
        }
    }
}

#[async_trait]
impl<R> EmployeeService for EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(
        &self,
        employee: EmployeeDto,
    ) -> Result<EmployeeDto, EmployeeServiceError> {
        let mut record = to_record(employee);
        record.id = None;
        let saved = self.repository.save(record).await?;
        info!(employee_id = ?saved.id, "employee created");
        Ok(to_dto(saved))
    }

    async fn get_employee_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<EmployeeDto, EmployeeServiceError> {
        self.load(id).await.map(to_dto)
    }

    async fn get_all_employees(&self) -> Result<Vec<EmployeeDto>, EmployeeServiceError> {
        let records = self.repository.find_all().await?;
        Ok(records.into_iter().map(to_dto).collect())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        employee: EmployeeDto,
    ) -> Result<EmployeeDto, EmployeeServiceError> {
        let mut record = self.load(id).await?;
        record.overwrite_details(employee);
        let saved = self
            .repository
            .save(record)
            .await
            .map_err(|err| map_repository_error(id, err))?;
        info!(employee_id = %id, "employee updated");
        Ok(to_dto(saved))
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeServiceError> {
        if self.repository.delete_by_id(id).await? {
            info!(employee_id = %id, "employee deleted");
            Ok(())
        } else {
            debug!(employee_id = %id, "employee not found for delete");
            Err(EmployeeServiceError::not_found(id))
        }
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
