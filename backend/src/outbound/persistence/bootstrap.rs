//! Idempotent creation of the `employees` table at startup.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

const CREATE_EMPLOYEES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS employees (
    id BIGSERIAL PRIMARY KEY,
    first_name VARCHAR NOT NULL,
    last_name VARCHAR NOT NULL,
    email VARCHAR NOT NULL
)";

/// Errors raised while preparing the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No connection was available.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The DDL statement failed.
    #[error("failed to create employees table: {0}")]
    Ddl(#[from] diesel::result::Error),
}

/// Create the `employees` table when it does not exist yet.
///
/// # Errors
///
/// Returns [`SchemaError`] when no connection can be checked out or the
/// statement is rejected.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.get().await?;
    diesel::sql_query(CREATE_EMPLOYEES_TABLE)
        .execute(&mut conn)
        .await?;
    info!("employees table ready");
    Ok(())
}
