//! Endpoints backed by database functions.
//!
//! ```text
//! POST /api/functions/employee-info
//! GET  /api/functions/active-employees
//! POST /api/functions/update-salaries
//! POST /api/functions/calculate-salary
//! GET  /api/functions/avg-salary/department/{department_id}
//! POST /api/functions/avg-salary/department
//! GET  /api/functions/avg-salary/all-departments
//! ```

use actix_web::{get, post, web};

use crate::domain::commands::{
    DepartmentSelectorDraft, EmployeeLookupDraft, SalaryLookupDraft, SalaryRaiseDraft,
};
use crate::domain::reports::{
    ActiveEmployeesResponse, AllDepartmentsResponse, DepartmentSalaryResponse,
    EmployeeInfoResponse, SalaryRaiseResponse, SalaryTaxResponse,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    post,
    path = "/api/functions/employee-info",
    request_body = EmployeeLookupDraft,
    responses(
        (status = 200, description = "Employee card", body = EmployeeInfoResponse),
        (status = 400, description = "Malformed date returned by the database", body = ErrorSchema),
        (status = 404, description = "No employee matches the criteria", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "getEmployeeInfo"
)]
#[post("/employee-info")]
pub async fn employee_info(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeLookupDraft>,
) -> ApiResult<web::Json<EmployeeInfoResponse>> {
    state.personnel.employee_info(&payload).await.map(web::Json)
}

#[utoipa::path(
    get,
    path = "/api/functions/active-employees",
    responses(
        (status = 200, description = "Active employees with department statistics", body = ActiveEmployeesResponse),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "listActiveEmployees"
)]
#[get("/active-employees")]
pub async fn active_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ActiveEmployeesResponse>> {
    state.personnel.active_employees().await.map(web::Json)
}

/// Raise every active salary by tenure. Requires `confirm: true`.
#[utoipa::path(
    post,
    path = "/api/functions/update-salaries",
    request_body = SalaryRaiseDraft,
    responses(
        (status = 200, description = "Raise applied", body = SalaryRaiseResponse),
        (status = 400, description = "Confirmation missing; nothing was changed", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "raiseSalaries"
)]
#[post("/update-salaries")]
pub async fn update_salaries(
    state: web::Data<HttpState>,
    payload: Option<web::Json<SalaryRaiseDraft>>,
) -> ApiResult<web::Json<SalaryRaiseResponse>> {
    let draft = payload.map(web::Json::into_inner).unwrap_or_default();
    state.personnel.raise_salaries(&draft).await.map(web::Json)
}

#[utoipa::path(
    post,
    path = "/api/functions/calculate-salary",
    request_body = SalaryLookupDraft,
    responses(
        (status = 200, description = "Salary, taxes and employer cost", body = SalaryTaxResponse),
        (status = 404, description = "No employee matches the criteria", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "calculateSalary"
)]
#[post("/calculate-salary")]
pub async fn calculate_salary(
    state: web::Data<HttpState>,
    payload: web::Json<SalaryLookupDraft>,
) -> ApiResult<web::Json<SalaryTaxResponse>> {
    state
        .personnel
        .salary_with_taxes(&payload)
        .await
        .map(web::Json)
}

#[utoipa::path(
    get,
    path = "/api/functions/avg-salary/department/{department_id}",
    params(("department_id" = String, Path, description = "Numeric department identifier")),
    responses(
        (status = 200, description = "Department salary analysis", body = DepartmentSalaryResponse),
        (status = 400, description = "Missing or non-numeric department id", body = ErrorSchema),
        (status = 404, description = "Unknown department", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "getDepartmentSalary"
)]
#[get("/avg-salary/department/{department_id}")]
pub async fn department_salary_by_path(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DepartmentSalaryResponse>> {
    state
        .personnel
        .department_salary(Some(path.as_str()), &DepartmentSelectorDraft::default())
        .await
        .map(web::Json)
}

#[utoipa::path(
    post,
    path = "/api/functions/avg-salary/department",
    request_body = DepartmentSelectorDraft,
    responses(
        (status = 200, description = "Department salary analysis", body = DepartmentSalaryResponse),
        (status = 400, description = "Missing or non-numeric department id", body = ErrorSchema),
        (status = 404, description = "Unknown department", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "postDepartmentSalary"
)]
#[post("/avg-salary/department")]
pub async fn department_salary_by_body(
    state: web::Data<HttpState>,
    payload: Option<web::Json<DepartmentSelectorDraft>>,
) -> ApiResult<web::Json<DepartmentSalaryResponse>> {
    let draft = payload.map(web::Json::into_inner).unwrap_or_default();
    state
        .personnel
        .department_salary(None, &draft)
        .await
        .map(web::Json)
}

#[utoipa::path(
    get,
    path = "/api/functions/avg-salary/all-departments",
    responses(
        (status = 200, description = "Average salary of every department", body = AllDepartmentsResponse),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["functions"],
    operation_id = "listDepartmentSalaries"
)]
#[get("/avg-salary/all-departments")]
pub async fn all_department_salaries(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AllDepartmentsResponse>> {
    state
        .personnel
        .all_department_salaries()
        .await
        .map(web::Json)
}

/// Register the function endpoints on a `/functions` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(employee_info)
        .service(active_employees)
        .service(update_salaries)
        .service(calculate_salary)
        .service(department_salary_by_path)
        .service(department_salary_by_body)
        .service(all_department_salaries);
}
