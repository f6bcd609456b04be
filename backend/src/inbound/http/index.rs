//! API index and the fallback for unknown routes.

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ResponseStatus;

/// Published routes as `(group, method, path, description)`.
const ROUTES: &[(&str, &str, &str, &str)] = &[
    (
        "functions",
        "POST",
        "/api/functions/employee-info",
        "информация о сотруднике",
    ),
    (
        "functions",
        "GET",
        "/api/functions/active-employees",
        "активные сотрудники",
    ),
    (
        "functions",
        "POST",
        "/api/functions/update-salaries",
        "повышение зарплат по стажу",
    ),
    (
        "functions",
        "POST",
        "/api/functions/calculate-salary",
        "расчет зарплаты с налогами",
    ),
    (
        "functions",
        "GET",
        "/api/functions/avg-salary/department/{department_id}",
        "средняя зарплата отдела",
    ),
    (
        "functions",
        "POST",
        "/api/functions/avg-salary/department",
        "средняя зарплата отдела",
    ),
    (
        "functions",
        "GET",
        "/api/functions/avg-salary/all-departments",
        "средние зарплаты всех отделов",
    ),
    ("procedures", "GET", "/api/procedures", "список процедур"),
    (
        "procedures",
        "POST",
        "/api/procedures/add-employee",
        "прием сотрудника",
    ),
    (
        "procedures",
        "DELETE",
        "/api/procedures/delete-department",
        "удаление отдела с переводом сотрудников",
    ),
    (
        "procedures",
        "DELETE",
        "/api/procedures/dismiss-employee",
        "увольнение сотрудника",
    ),
    (
        "procedures",
        "GET",
        "/api/procedures/salary-analysis",
        "анализ зарплат",
    ),
    (
        "views",
        "GET",
        "/api/views/employees-on-probation",
        "испытательный срок",
    ),
    ("views", "GET", "/api/views/salary-grades", "грейды зарплат"),
    (
        "views",
        "GET",
        "/api/views/employee-birthdays",
        "дни рождения",
    ),
    ("health", "GET", "/health/ready", "готовность"),
    ("health", "GET", "/health/live", "живучесть"),
];

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointGroup {
    pub name: &'static str,
    /// `METHOD /path`.
    pub routes: Vec<String>,
}

/// Body of `GET /api`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiIndex {
    pub status: ResponseStatus,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointGroup>,
}

impl ApiIndex {
    fn published() -> Self {
        let mut endpoints: Vec<EndpointGroup> = Vec::new();
        for &(group, method, path, _) in ROUTES {
            let route = format!("{method} {path}");
            match endpoints.iter_mut().find(|existing| existing.name == group) {
                Some(existing) => existing.routes.push(route),
                None => endpoints.push(EndpointGroup {
                    name: group,
                    routes: vec![route],
                }),
            }
        }
        Self {
            status: ResponseStatus::Success,
            message: "API системы управления персоналом",
            version: env!("CARGO_PKG_VERSION"),
            endpoints,
        }
    }
}

/// Body returned for unknown routes.
#[derive(Debug, Serialize, ToSchema)]
pub struct RouteNotFound {
    pub status: ResponseStatus,
    pub message: &'static str,
    pub available_routes: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "Grouped list of published endpoints", body = ApiIndex)),
    tags = ["index"],
    operation_id = "getApiIndex"
)]
#[get("")]
pub async fn api_index() -> web::Json<ApiIndex> {
    web::Json(ApiIndex::published())
}

/// Default service: 404 listing every published route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = req.path(), "unknown route");
    HttpResponse::NotFound().json(RouteNotFound {
        status: ResponseStatus::Error,
        message: "Маршрут не найден",
        available_routes: ROUTES
            .iter()
            .map(|&(_, method, path, description)| format!("{method} {path} - {description}"))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    fn index_groups_routes_in_declaration_order() {
        let index = ApiIndex::published();
        let names: Vec<_> = index.endpoints.iter().map(|group| group.name).collect();
        assert_eq!(names, ["functions", "procedures", "views", "health"]);
        let functions = index.endpoints.first().expect("functions group");
        assert_eq!(functions.routes.len(), 7);
        assert_eq!(
            functions.routes.first().map(String::as_str),
            Some("POST /api/functions/employee-info")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_routes_list_what_exists() {
        let app = actix_test::init_service(App::new().default_service(web::to(not_found))).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["available_routes"].as_array().map(Vec::len),
            Some(ROUTES.len())
        );
    }
}
