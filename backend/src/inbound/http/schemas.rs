//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape and register under the domain names.

use utoipa::ToSchema;

/// Employee as exchanged over the API.
///
/// `id` is assigned by the server and ignored in request bodies.
#[derive(ToSchema)]
#[schema(as = Employee, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EmployeeSchema {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    id: Option<i64>,
    #[schema(example = "Jane")]
    first_name: String,
    #[schema(example = "Doe")]
    last_name: String,
    #[schema(example = "jane@x.com")]
    email: String,
}

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The body or path could not be deserialised.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No employee exists with the requested id.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage or server failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response body.
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Employee is not exists with given Id: 999999")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context, for example `{"id": 999999}`.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use utoipa::PartialSchema;

    use super::*;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn employee_schema_uses_camel_case_fields() {
        assert_eq!(EmployeeSchema::name(), "Employee");
        let schema_json = schema_to_json::<EmployeeSchema>();
        for field in ["firstName", "lastName", "email"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn error_schema_matches_wire_names() {
        assert_eq!(ErrorSchema::name(), "Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(schema_json.contains("message"));
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }
}
