//! PostgreSQL-backed [`EmployeeRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{EmployeeId, EmployeeRecord};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn save(
        &self,
        record: EmployeeRecord,
    ) -> Result<EmployeeRecord, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let Some(id) = record.id else {
            let row = diesel::insert_into(employees::table)
                .values(NewEmployeeRow::from(&record))
                .returning(EmployeeRow::as_returning())
                .get_result::<EmployeeRow>(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            return Ok(row.into());
        };

        let row = diesel::update(employees::table.find(id.get()))
            .set(EmployeeUpdate::from(&record))
            .returning(EmployeeRow::as_returning())
            .get_result::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(EmployeeRecord::from)
            .ok_or_else(|| EmployeeRepositoryError::missing(id))
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
