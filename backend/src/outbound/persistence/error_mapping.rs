//! Translation of pool and Diesel failures into [`EmployeeRepositoryError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeeRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EmployeeRepositoryError::connection(message)
}

/// Collapse Diesel errors into connection or query failures.
///
/// Driver messages are logged at debug level and kept out of the returned
/// error so they never reach clients.
pub(crate) fn map_diesel_error(error: DieselError) -> EmployeeRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            EmployeeRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => EmployeeRepositoryError::query("record not found"),
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            EmployeeRepositoryError::query("employee row could not be converted")
        }
        _ => EmployeeRepositoryError::query("database error"),
    }
}
