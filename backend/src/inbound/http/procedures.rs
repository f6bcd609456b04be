//! Endpoints backed by stored procedures.
//!
//! ```text
//! GET    /api/procedures
//! POST   /api/procedures/add-employee
//! DELETE /api/procedures/delete-department
//! DELETE /api/procedures/dismiss-employee
//! GET    /api/procedures/salary-analysis
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::commands::{DepartmentRemovalDraft, DismissalDraft, NewEmployeeDraft};
use crate::domain::reports::{
    DepartmentRemovalResponse, DismissalResponse, HireResponse, ProcedureCatalogue,
    SalaryAnalysisResponse,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/procedures",
    responses((status = 200, description = "Published procedures and their parameters", body = ProcedureCatalogue)),
    tags = ["procedures"],
    operation_id = "listProcedures"
)]
#[get("")]
pub async fn catalogue(state: web::Data<HttpState>) -> web::Json<ProcedureCatalogue> {
    web::Json(state.personnel.procedure_catalogue())
}

/// Hire an employee through `add_employee`.
#[utoipa::path(
    post,
    path = "/api/procedures/add-employee",
    request_body = NewEmployeeDraft,
    responses(
        (status = 201, description = "Employee registered", body = HireResponse),
        (status = 400, description = "Refused by the procedure or integrity rule", body = ErrorSchema),
        (status = 404, description = "Unknown department or position", body = ErrorSchema),
        (status = 409, description = "An employee with this full name exists", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Unclassified database failure", body = ErrorSchema)
    ),
    tags = ["procedures"],
    operation_id = "addEmployee"
)]
#[post("/add-employee")]
pub async fn add_employee(
    state: web::Data<HttpState>,
    payload: web::Json<NewEmployeeDraft>,
) -> ApiResult<HttpResponse> {
    let response = state.personnel.hire(&payload).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Move a department's staff elsewhere and delete it.
#[utoipa::path(
    delete,
    path = "/api/procedures/delete-department",
    request_body = DepartmentRemovalDraft,
    responses(
        (status = 200, description = "`success`, `partial_success` or `warning` depending on what remains", body = DepartmentRemovalResponse),
        (status = 400, description = "Same source and target, or refused", body = ErrorSchema),
        (status = 404, description = "Unknown source or target department", body = ErrorSchema),
        (status = 409, description = "Department still referenced", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["procedures"],
    operation_id = "deleteDepartment"
)]
#[delete("/delete-department")]
pub async fn delete_department(
    state: web::Data<HttpState>,
    payload: web::Json<DepartmentRemovalDraft>,
) -> ApiResult<web::Json<DepartmentRemovalResponse>> {
    state
        .personnel
        .remove_department(&payload)
        .await
        .map(web::Json)
}

#[utoipa::path(
    delete,
    path = "/api/procedures/dismiss-employee",
    request_body = DismissalDraft,
    responses(
        (status = 200, description = "Employee dismissed", body = DismissalResponse),
        (status = 400, description = "Refused by the procedure", body = ErrorSchema),
        (status = 404, description = "No employee with this name, department and position", body = ErrorSchema),
        (status = 409, description = "Employee already dismissed", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["procedures"],
    operation_id = "dismissEmployee"
)]
#[delete("/dismiss-employee")]
pub async fn dismiss_employee(
    state: web::Data<HttpState>,
    payload: web::Json<DismissalDraft>,
) -> ApiResult<web::Json<DismissalResponse>> {
    state.personnel.dismiss(&payload).await.map(web::Json)
}

#[utoipa::path(
    get,
    path = "/api/procedures/salary-analysis",
    responses(
        (status = 200, description = "Company summary and per-department rows", body = SalaryAnalysisResponse),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["procedures"],
    operation_id = "getSalaryAnalysis"
)]
#[get("/salary-analysis")]
pub async fn salary_analysis(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<SalaryAnalysisResponse>> {
    state.personnel.salary_analysis().await.map(web::Json)
}

/// Register the procedure endpoints on a `/procedures` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalogue)
        .service(add_employee)
        .service(delete_department)
        .service(dismiss_employee)
        .service(salary_analysis);
}
