//! Builds the HTTP state from the configured storage.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use backend::domain::EmployeeServiceImpl;
use backend::domain::ports::EmployeeService;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryEmployeeRepository;
use backend::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

/// Use PostgreSQL when a pool is configured, otherwise a process-local store.
pub(super) fn build_employee_service(config: &ServerConfig) -> Arc<dyn EmployeeService> {
    match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "employee repository configured");
            Arc::new(EmployeeServiceImpl::new(Arc::new(
                DieselEmployeeRepository::new(pool.clone()),
            )))
        }
        None => {
            info!(storage = "memory", "employee repository configured");
            Arc::new(EmployeeServiceImpl::new(Arc::new(
                InMemoryEmployeeRepository::new(),
            )))
        }
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_employee_service(config)))
}
