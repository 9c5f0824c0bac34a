//! PostgreSQL persistence via Diesel, `diesel-async`, and `bb8`.
//!
//! Row structs and table definitions are private to this module; only the
//! repository, the pool, and the schema bootstrap are exported.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! backend::outbound::persistence::ensure_schema(&pool).await?;
//! let repository = DieselEmployeeRepository::new(pool);
//! ```

mod bootstrap;
mod diesel_employee_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use bootstrap::{SchemaError, ensure_schema};
pub use diesel_employee_repository::DieselEmployeeRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
