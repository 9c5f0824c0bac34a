//! Domain types and services.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic error payload.
//! - [`TraceId`]: per-request correlation identifier.
//! - [`EmployeeRecord`], [`EmployeeDto`], [`EmployeeId`]: the employee entity in
//!   its stored and transfer shapes.
//! - [`EmployeeServiceImpl`]: the employee use cases over any repository.

pub mod employee;
pub mod employee_mapper;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{EmployeeDto, EmployeeId, EmployeeRecord};
pub use self::employee_service::EmployeeServiceImpl;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
