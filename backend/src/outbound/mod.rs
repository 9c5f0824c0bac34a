//! Outbound adapters implementing the employee repository port.
//!
//! - **persistence**: PostgreSQL via Diesel.
//! - **memory**: process-local store used when no database is configured.

pub mod memory;
pub mod persistence;
