//! Employee HTTP handlers.
//!
//! ```text
//! POST   /api/employees
//! GET    /api/employees
//! GET    /api/employees/{id}
//! PUT    /api/employees/{id}
//! DELETE /api/employees/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{EmployeeDto, EmployeeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Plain-text confirmation returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Employee Deleted Successfully!";

/// Create an employee. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeSchema,
    responses(
        (status = 201, description = "Employee created", body = EmployeeSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDto>,
) -> ApiResult<HttpResponse> {
    let created = state.employees.create_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeSchema),
        (status = 400, description = "Non-numeric id", body = ErrorSchema),
        (status = 404, description = "No employee with this id", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/{id}")]
pub async fn get_employee_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<EmployeeDto>> {
    let id = EmployeeId::new(path.into_inner());
    let employee = state.employees.get_employee_by_id(id).await?;
    Ok(web::Json(employee))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeSchema]),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getAllEmployees"
)]
#[get("")]
pub async fn get_all_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeDto>>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(web::Json(employees))
}

/// Replace the names and email of an employee. The path id wins over any
/// `id` in the body.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = EmployeeSchema,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeSchema),
        (status = 400, description = "Malformed body or id", body = ErrorSchema),
        (status = 404, description = "No employee with this id", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<EmployeeDto>,
) -> ApiResult<web::Json<EmployeeDto>> {
    let id = EmployeeId::new(path.into_inner());
    let updated = state
        .employees
        .update_employee(id, payload.into_inner())
        .await?;
    Ok(web::Json(updated))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id", body = ErrorSchema),
        (status = 404, description = "No employee with this id", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    state.employees.delete_employee(id).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(DELETE_CONFIRMATION))
}

/// Mount every employee handler on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_employee)
        .service(get_all_employees)
        .service(get_employee_by_id)
        .service(update_employee)
        .service(delete_employee);
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
