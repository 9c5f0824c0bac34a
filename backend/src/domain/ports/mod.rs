//! Domain ports defining the edges of the hexagon.
//!
//! [`EmployeeService`] is the driving port used by inbound adapters.
//! [`EmployeeRepository`] is the driven port implemented by persistence
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employee_service;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
#[cfg(test)]
pub use employee_service::MockEmployeeService;
pub use employee_service::{EmployeeService, EmployeeServiceError};
