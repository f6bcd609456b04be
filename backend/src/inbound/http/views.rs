//! Report endpoints over the database views.
//!
//! ```text
//! GET /api/views/employees-on-probation
//! GET /api/views/salary-grades?department=&grade=&min_salary=&max_salary=
//! GET /api/views/employee-birthdays?month=&upcoming_days=&department=
//! ```

use actix_web::{get, web};

use crate::domain::commands::{BirthdayFilterDraft, GradeFilterDraft};
use crate::domain::reports::{BirthdayReport, ProbationReport, SalaryGradeReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/api/views/employees-on-probation",
    responses(
        (status = 200, description = "Probation report grouped by status", body = ProbationReport),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["views"],
    operation_id = "getProbationReport"
)]
#[get("/employees-on-probation")]
pub async fn employees_on_probation(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ProbationReport>> {
    state.personnel.probation_report().await.map(web::Json)
}

#[utoipa::path(
    get,
    path = "/api/views/salary-grades",
    params(GradeFilterDraft),
    responses(
        (status = 200, description = "Grade distribution and top earners", body = SalaryGradeReport),
        (status = 422, description = "Non-numeric salary bound", body = ErrorSchema)
    ),
    tags = ["views"],
    operation_id = "getSalaryGrades"
)]
#[get("/salary-grades")]
pub async fn salary_grades(
    state: web::Data<HttpState>,
    query: web::Query<GradeFilterDraft>,
) -> ApiResult<web::Json<SalaryGradeReport>> {
    state.personnel.salary_grades(&query).await.map(web::Json)
}

#[utoipa::path(
    get,
    path = "/api/views/employee-birthdays",
    params(BirthdayFilterDraft),
    responses(
        (status = 200, description = "Birthday calendar", body = BirthdayReport),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["views"],
    operation_id = "getBirthdays"
)]
#[get("/employee-birthdays")]
pub async fn employee_birthdays(
    state: web::Data<HttpState>,
    query: web::Query<BirthdayFilterDraft>,
) -> ApiResult<web::Json<BirthdayReport>> {
    state.personnel.birthdays(&query).await.map(web::Json)
}

/// Register the report endpoints on a `/views` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(employees_on_probation)
        .service(salary_grades)
        .service(employee_birthdays);
}
