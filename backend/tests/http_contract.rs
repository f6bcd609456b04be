//! End-to-end HTTP contract tests against the fixture ports.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use mockable::DefaultClock;
use personnel::Trace;
use personnel::domain::ports::{FixturePersonnelCommand, FixturePersonnelQuery, FixtureReportsQuery};
use personnel::domain::{PersonnelPorts, PersonnelService, RuntimeMode, TRACE_ID_HEADER};
use personnel::inbound::http::configure_api;
use personnel::inbound::http::health::{HealthState, live, ready};
use personnel::inbound::http::index::not_found;
use personnel::inbound::http::state::HttpState;
use rstest::rstest;
use serde_json::{Value, json};

async fn init_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let service = PersonnelService::new(
        PersonnelPorts {
            personnel: Arc::new(FixturePersonnelQuery),
            commands: Arc::new(FixturePersonnelCommand),
            reports: Arc::new(FixtureReportsQuery),
        },
        Arc::new(DefaultClock),
        RuntimeMode::Development,
    );
    let health = HealthState::new();
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(service)))
            .app_data(web::Data::new(health))
            .wrap(Trace)
            .service(web::scope("/api").configure(configure_api))
            .service(ready)
            .service(live)
            .default_service(web::to(not_found)),
    )
    .await
}

async fn call_json(request: Request) -> (StatusCode, Value) {
    let app = init_app().await;
    let res = test::call_service(&app, request).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

fn hire_body() -> Value {
    json!({
        "personal_number": "EMP-0100",
        "last_name": "Сидоров",
        "first_name": "Петр",
        "middle_name": "Андреевич",
        "birth_date": "12.04.1991",
        "passport": "4511654321",
        "inn": "772345678901",
        "snils": "234-567-890 12",
        "phone_number": "79031234567",
        "department_id": "1",
        "position_id": "2",
        "education": "Высшее",
        "finish_year": "2013-06-30",
        "hire_date": "2024-02-01",
        "salary": "90000",
        "probation_period": 90
    })
}

#[rstest]
#[actix_web::test]
async fn index_lists_endpoint_groups() {
    let (status, body) = call_json(TestRequest::get().uri("/api").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let groups = body["endpoints"].as_array().expect("endpoint groups");
    assert!(groups.iter().any(|group| group["name"] == "views"));
}

#[rstest]
#[actix_web::test]
async fn unknown_route_lists_available_routes() {
    let (status, body) = call_json(TestRequest::get().uri("/api/unknown").to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Маршрут не найден");
    let routes = body["available_routes"].as_array().expect("routes");
    assert!(routes.iter().any(|route| {
        route
            .as_str()
            .is_some_and(|text| text.starts_with("POST /api/procedures/add-employee"))
    }));
}

#[rstest]
#[actix_web::test]
async fn employee_info_rejects_missing_fields() {
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/functions/employee-info")
            .set_json(json!({ "first_name": "Иван" }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "validation_error");
    assert_eq!(body["code"], "validation_failed");
    let fields: Vec<_> = body["errors"]
        .as_array()
        .expect("field errors")
        .iter()
        .filter_map(|error| error["field"].as_str())
        .collect();
    assert!(fields.contains(&"middle_name"));
    assert!(fields.contains(&"birth_date"));
}

#[rstest]
#[case("Иван", StatusCode::OK)]
#[case("Петр", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn employee_info_finds_known_employee(
    #[case] first_name: &str,
    #[case] expected: StatusCode,
) {
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/functions/employee-info")
            .set_json(json!({
                "first_name": first_name,
                "middle_name": "Петрович",
                "birth_date": "1990-05-15"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(status, expected);
    if expected == StatusCode::OK {
        assert_eq!(body["status"], "success");
        assert!(body["data"].is_object());
    } else {
        assert_eq!(body["code"], "not_found");
    }
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request() {
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/functions/calculate-salary")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn salary_raise_requires_confirmation() {
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/functions/update-salaries")
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "warning");
    assert_eq!(body["code"], "confirmation_required");
    assert_eq!(body["details"]["required"]["confirm"], true);
}

#[rstest]
#[actix_web::test]
async fn confirmed_salary_raise_reports_changes() {
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/functions/update-salaries")
            .set_json(json!({ "confirm": true }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
}

#[rstest]
#[case("abc", StatusCode::BAD_REQUEST)]
#[case("99", StatusCode::NOT_FOUND)]
#[case("1", StatusCode::OK)]
#[actix_web::test]
async fn department_salary_by_path(#[case] id: &str, #[case] expected: StatusCode) {
    let (status, _) = call_json(
        TestRequest::get()
            .uri(&format!("/api/functions/avg-salary/department/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(status, expected);
}

#[rstest]
#[actix_web::test]
async fn hiring_returns_created() {
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/procedures/add-employee")
            .set_json(hire_body())
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["employee_id"], 101);
}

#[rstest]
#[actix_web::test]
async fn hiring_a_namesake_conflicts() {
    let mut body = hire_body();
    body["last_name"] = json!("Иванов");
    body["first_name"] = json!("Иван");
    body["middle_name"] = json!("Петрович");
    let (status, body) = call_json(
        TestRequest::post()
            .uri("/api/procedures/add-employee")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
}

#[rstest]
#[case("/api/views/employees-on-probation")]
#[case("/api/views/salary-grades")]
#[case("/api/views/employee-birthdays")]
#[case("/api/procedures/salary-analysis")]
#[case("/api/functions/active-employees")]
#[actix_web::test]
async fn reports_answer_with_success(#[case] uri: &str) {
    let (status, body) = call_json(TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    assert_eq!(body["status"], "success", "{uri}");
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_identifier() {
    let app = init_app().await;
    let res = test::call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
}
