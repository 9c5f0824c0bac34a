//! Diesel row structs for the `employees` table.
//!
//! These never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::{EmployeeId, EmployeeRecord};

use super::schema::employees;

/// Row read back from `employees`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRow> for EmployeeRecord {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: Some(EmployeeId::new(row.id)),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

/// Values for inserting a new employee; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

/// Changeset overwriting the editable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a EmployeeRecord> for NewEmployeeRow<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            first_name: &record.first_name,
            last_name: &record.last_name,
            email: &record.email,
        }
    }
}

impl<'a> From<&'a EmployeeRecord> for EmployeeUpdate<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            first_name: &record.first_name,
            last_name: &record.last_name,
            email: &record.email,
        }
    }
}
