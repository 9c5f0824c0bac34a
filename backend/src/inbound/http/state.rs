//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::EmployeeService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeService>,
}

impl HttpState {
    /// Wrap the employee service.
    pub fn new(employees: Arc<dyn EmployeeService>) -> Self {
        Self { employees }
    }
}
