//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every personnel endpoint together with the error
//! envelope schemas. Response bodies are collected from the handler
//! annotations. The document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::index::{ApiIndex, EndpointGroup, RouteNotFound};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personnel management API",
        description = "HTTP interface over the personnel database: employee lookups, \
                       payroll operations, staffing procedures and HR reports."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::api_index,
        crate::inbound::http::functions::employee_info,
        crate::inbound::http::functions::active_employees,
        crate::inbound::http::functions::update_salaries,
        crate::inbound::http::functions::calculate_salary,
        crate::inbound::http::functions::department_salary_by_path,
        crate::inbound::http::functions::department_salary_by_body,
        crate::inbound::http::functions::all_department_salaries,
        crate::inbound::http::procedures::catalogue,
        crate::inbound::http::procedures::add_employee,
        crate::inbound::http::procedures::delete_department,
        crate::inbound::http::procedures::dismiss_employee,
        crate::inbound::http::procedures::salary_analysis,
        crate::inbound::http::views::employees_on_probation,
        crate::inbound::http::views::salary_grades,
        crate::inbound::http::views::employee_birthdays,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ApiIndex,
        EndpointGroup,
        RouteNotFound
    )),
    tags(
        (name = "index", description = "Endpoint discovery"),
        (name = "functions", description = "Lookups and payroll calculations"),
        (name = "procedures", description = "Staffing changes and salary analysis"),
        (name = "views", description = "HR reports"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    #[rstest]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");
        match error_schema {
            RefOr::T(Schema::Object(obj)) => {
                for field in ["status", "code", "message", "errors", "details", "trace_id"] {
                    assert!(
                        obj.properties.contains_key(field),
                        "missing field '{field}'"
                    );
                }
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api")]
    #[case("/api/functions/employee-info")]
    #[case("/api/functions/avg-salary/department/{department_id}")]
    #[case("/api/procedures/add-employee")]
    #[case("/api/views/employee-birthdays")]
    #[case("/health/ready")]
    fn published_paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("OpenAPI JSON");
        assert!(json.contains("addEmployee"));
    }
}
