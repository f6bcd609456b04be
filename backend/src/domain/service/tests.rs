//! Service orchestration tests against mocked ports.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::json;

use super::{PersonnelPorts, PersonnelService};
use crate::domain::commands::{
    DepartmentRemovalDraft, DepartmentSelectorDraft, DismissalDraft, EmployeeLookupDraft,
    GradeFilterDraft, NewEmployeeDraft, SalaryRaiseDraft,
};
use crate::domain::envelope::ResponseStatus;
use crate::domain::ports::{
    GatewayError, MockPersonnelCommand, MockPersonnelQuery, MockReportsQuery,
};
use crate::domain::records::{DepartmentRef, PayrollSnapshot, SalaryRaiseRecord};
use crate::domain::{ErrorCode, ProcedureReceipt, RejectionKind, RoutineOutcome, RuntimeMode};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 3, 15, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

#[fixture]
fn personnel() -> MockPersonnelQuery {
    MockPersonnelQuery::new()
}

#[fixture]
fn commands() -> MockPersonnelCommand {
    MockPersonnelCommand::new()
}

fn make_service(personnel: MockPersonnelQuery, commands: MockPersonnelCommand) -> PersonnelService {
    make_service_in(personnel, commands, RuntimeMode::Production)
}

fn make_service_in(
    personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
    mode: RuntimeMode,
) -> PersonnelService {
    PersonnelService::new(
        PersonnelPorts {
            personnel: Arc::new(personnel),
            commands: Arc::new(commands),
            reports: Arc::new(MockReportsQuery::new()),
        },
        fixture_clock(),
        mode,
    )
}

fn department(id: i32, name: &str) -> DepartmentRef {
    DepartmentRef {
        department_id: id,
        name: name.to_owned(),
    }
}

fn hire_draft() -> NewEmployeeDraft {
    NewEmployeeDraft {
        personal_number: Some("EMP-0042".into()),
        middle_name: Some("Петрович".into()),
        first_name: Some("Иван".into()),
        last_name: Some("Сидоров".into()),
        birth_date: Some("15.05.1990".into()),
        passport: Some("4510123456".into()),
        inn: Some("771234567890".into()),
        snils: Some("123-456-789 01".into()),
        address: None,
        phone_number: Some("79161234567".into()),
        department_id: Some("1".into()),
        position_id: Some("2".into()),
        education: Some("Высшее".into()),
        diplom_num: None,
        finish_year: Some("2012-06-30".into()),
        hire_date: Some("2024-01-15".into()),
        salary: Some("85000".into()),
        probation_period: Some("90".into()),
    }
}

fn removal_draft(source: &str, target: &str) -> DepartmentRemovalDraft {
    DepartmentRemovalDraft {
        department_id_to_delete: Some(source.to_owned()),
        target_department_id: Some(target.to_owned()),
        reason: Some("Реорганизация структуры".to_owned()),
    }
}

fn dismissal_draft() -> DismissalDraft {
    DismissalDraft {
        first_name: Some("Иван".into()),
        last_name: Some("Иванов".into()),
        middle_name: None,
        department_name: Some("Склад".into()),
        position_name: Some("Кладовщик".into()),
        reason: Some("По собственному желанию".into()),
    }
}

fn receipt(message: &str, employee_id: Option<i32>) -> RoutineOutcome<ProcedureReceipt> {
    RoutineOutcome::Ok(ProcedureReceipt {
        message: message.to_owned(),
        employee_id,
    })
}

// ------------------------------------------------------------------------
// Functions
// ------------------------------------------------------------------------

#[rstest]
#[tokio::test]
async fn unknown_employee_reports_search_criteria(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel
        .expect_employee_info()
        .times(1)
        .return_once(|_| Ok(None));
    let service = make_service(personnel, commands);

    let draft = EmployeeLookupDraft {
        first_name: Some("Иван".into()),
        middle_name: Some("Петрович".into()),
        birth_date: Some("1990-05-15".into()),
    };
    let error = service
        .employee_info(&draft)
        .await
        .expect_err("missing employee");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(
        error.details(),
        Some(&json!({
            "search_criteria": {
                "first_name": "Иван",
                "middle_name": "Петрович",
                "birth_date": "1990-05-15",
            }
        }))
    );
}

#[rstest]
#[tokio::test]
async fn invalid_lookup_never_reaches_the_database(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel.expect_employee_info().never();
    let service = make_service(personnel, commands);

    let draft = EmployeeLookupDraft {
        first_name: Some("Ivan".into()),
        middle_name: None,
        birth_date: Some("2030-01-01".into()),
    };
    let error = service
        .employee_info(&draft)
        .await
        .expect_err("invalid draft");

    assert_eq!(error.code(), ErrorCode::ValidationFailed);
    assert_eq!(error.errors().len(), 3);
}

#[rstest]
#[tokio::test]
async fn connection_failures_become_service_unavailable(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel
        .expect_active_employees()
        .return_once(|| Err(GatewayError::connection("pool timed out")));
    let service = make_service(personnel, commands);

    let error = service.active_employees().await.expect_err("no connection");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.details().is_none());
}

#[rstest]
#[tokio::test]
async fn development_mode_exposes_database_diagnostics(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel
        .expect_active_employees()
        .return_once(|| Err(GatewayError::query("relation does not exist")));
    let service = make_service_in(personnel, commands, RuntimeMode::Development);

    let error = service.active_employees().await.expect_err("query failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
    let details = error.details().expect("diagnostics");
    assert_eq!(details["original_error"], "relation does not exist");
    assert_eq!(details["error_code"], "XX000");
}

#[rstest]
#[case(json!({}))]
#[case(json!({"confirm": false}))]
#[case(json!({"confirm": "true"}))]
#[tokio::test]
async fn raise_requires_confirmation(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
    #[case] body: serde_json::Value,
) {
    personnel.expect_payroll_snapshot().never();
    commands.expect_raise_salaries_by_tenure().never();
    let service = make_service(personnel, commands);
    let draft: SalaryRaiseDraft = serde_json::from_value(body).expect("draft");

    let error = service
        .raise_salaries(&draft)
        .await
        .expect_err("unconfirmed");

    assert_eq!(error.code(), ErrorCode::ConfirmationRequired);
    let details = error.details().expect("details");
    assert_eq!(details["required"], json!({"confirm": true}));
}

#[rstest]
#[tokio::test]
async fn confirmed_raise_compares_payroll_before_and_after(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    let mut budgets = vec![120_000.0, 100_000.0];
    personnel
        .expect_payroll_snapshot()
        .times(2)
        .returning(move || {
            Ok(PayrollSnapshot {
                total_employees: 2,
                total_budget: budgets.pop().unwrap_or_default(),
                avg_salary: None,
            })
        });
    commands
        .expect_raise_salaries_by_tenure()
        .times(1)
        .return_once(|| {
            Ok(vec![SalaryRaiseRecord {
                employee_id: 1,
                personal_number: "EMP-0001".to_owned(),
                full_name: "Иванов Иван Петрович".to_owned(),
                old_salary: 50_000.0,
                new_salary: 60_000.0,
                experience_years: Some(6.0),
                status: "Повышение 20%".to_owned(),
            }])
        });
    let service = make_service(personnel, commands);
    let draft = SalaryRaiseDraft {
        confirm: Some(json!("yes")),
    };

    let response = service.raise_salaries(&draft).await.expect("raise");

    let body = serde_json::to_value(&response).expect("serialise");
    assert_eq!(body["summary"]["percentage_increase"], 20.0);
    assert_eq!(body["all_employees"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[tokio::test]
async fn unknown_department_salary_is_not_found(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel
        .expect_department()
        .with(eq(42))
        .return_once(|_| Ok(None));
    personnel.expect_average_salary().never();
    let service = make_service(personnel, commands);

    let error = service
        .department_salary(Some("42"), &DepartmentSelectorDraft::default())
        .await
        .expect_err("unknown department");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Отдел с ID 42 не найден");
}

#[rstest]
#[tokio::test]
async fn department_salary_reads_body_id(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel
        .expect_department()
        .with(eq(1))
        .return_once(|_| Ok(Some(department(1, "Бухгалтерия"))));
    personnel
        .expect_average_salary()
        .with(eq(1))
        .return_once(|_| Ok(Some(20_000.0)));
    personnel
        .expect_active_salaries()
        .with(eq(1))
        .return_once(|_| Ok(vec![10_000.0, 20_000.0, 30_000.0]));
    let service = make_service(personnel, commands);
    let draft = DepartmentSelectorDraft {
        department_id: Some("1".into()),
    };

    let response = service
        .department_salary(None, &draft)
        .await
        .expect("department salary");

    let statistics = response.department_statistics.expect("statistics");
    assert_eq!(statistics.employee_count, 3);
}

#[rstest]
#[tokio::test]
async fn departments_without_average_count_as_zero(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel.expect_departments().return_once(|| {
        Ok(vec![department(1, "Бухгалтерия"), department(2, "Склад")])
    });
    personnel
        .expect_average_salary()
        .returning(|id| Ok((id == 1).then_some(40_000.0)));
    let service = make_service(personnel, commands);

    let response = service.all_department_salaries().await.expect("averages");

    let body = serde_json::to_value(&response).expect("serialise");
    assert_eq!(body["departments"][1]["department_name"], "Склад");
    assert_eq!(body["departments"][1]["avg_salary"], 0.0);
    assert_eq!(body["summary"]["departments_with_salaries"], 1);
}

// ------------------------------------------------------------------------
// Procedures
// ------------------------------------------------------------------------

#[rstest]
#[tokio::test]
async fn duplicate_hire_is_refused_before_the_procedure(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    personnel
        .expect_duplicate_employee()
        .return_once(|_| Ok(Some(17)));
    commands.expect_add_employee().never();
    let service = make_service(personnel, commands);

    let error = service.hire(&hire_draft()).await.expect_err("duplicate");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.details(), Some(&json!({"existing_employee_id": 17})));
}

#[rstest]
#[case(false, true, "Отдел с ID 1 не существует")]
#[case(true, false, "Должность с ID 2 не существует в отделе 1")]
#[tokio::test]
async fn hire_checks_department_then_position(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
    #[case] department_exists: bool,
    #[case] position_matches: bool,
    #[case] message: &str,
) {
    personnel
        .expect_duplicate_employee()
        .return_once(|_| Ok(None));
    personnel
        .expect_department()
        .with(eq(1))
        .return_once(move |_| Ok(department_exists.then(|| department(1, "ИТ"))));
    personnel
        .expect_position_in_department()
        .with(eq(2), eq(1))
        .returning(move |_, _| Ok(position_matches));
    commands.expect_add_employee().never();
    let service = make_service(personnel, commands);

    let error = service.hire(&hire_draft()).await.expect_err("pre-check");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

fn hire_prechecks_pass(personnel: &mut MockPersonnelQuery) {
    personnel
        .expect_duplicate_employee()
        .return_once(|_| Ok(None));
    personnel
        .expect_department()
        .return_once(|_| Ok(Some(department(1, "ИТ"))));
    personnel
        .expect_position_in_department()
        .return_once(|_, _| Ok(true));
}

#[rstest]
#[tokio::test]
async fn successful_hire_returns_new_id(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    hire_prechecks_pass(&mut personnel);
    commands
        .expect_add_employee()
        .withf(|hire| hire.personal_number == "EMP-0042" && hire.salary > 84_999.0)
        .return_once(|_| Ok(receipt("Сотрудник успешно добавлен", Some(101))));
    let service = make_service(personnel, commands);

    let response = service.hire(&hire_draft()).await.expect("hired");

    assert_eq!(response.employee_id, Some(101));
    assert_eq!(response.details.full_name, "Сидоров Иван Петрович");
}

#[rstest]
#[tokio::test]
async fn hire_rejection_is_a_bad_request(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    hire_prechecks_pass(&mut personnel);
    commands.expect_add_employee().return_once(|_| {
        Ok(RoutineOutcome::Conflict {
            reason: "Табельный номер уже существует".to_owned(),
        })
    });
    let service = make_service(personnel, commands);

    let error = service.hire(&hire_draft()).await.expect_err("rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Табельный номер уже существует");
}

#[rstest]
#[tokio::test]
async fn duplicate_personal_number_on_hire_is_internal(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    hire_prechecks_pass(&mut personnel);
    commands.expect_add_employee().return_once(|_| {
        Err(GatewayError::unique_violation(
            Some("employees_personal_number_key".to_owned()),
            "duplicate key value violates unique constraint",
        ))
    });
    let service = make_service(personnel, commands);

    let error = service
        .hire(&hire_draft())
        .await
        .expect_err("duplicate key");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(
        error.message(),
        "Сотрудник с таким табельным номером уже существует"
    );
}

#[rstest]
#[tokio::test]
async fn hiring_exception_over_age_is_internal(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    hire_prechecks_pass(&mut personnel);
    commands.expect_add_employee().return_once(|_| {
        Err(GatewayError::rejected(
            RejectionKind::Invalid,
            "Сотрудник должен быть младше 65 лет на дату приема",
        ))
    });
    let service = make_service(personnel, commands);

    let error = service.hire(&hire_draft()).await.expect_err("over age");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Кандидат должен быть младше 65 лет");
}

#[rstest]
#[tokio::test]
async fn removal_into_itself_is_refused(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    personnel
        .expect_department()
        .times(2)
        .returning(|id| Ok(Some(department(id, "Склад"))));
    commands.expect_remove_department().never();
    let service = make_service(personnel, commands);

    let error = service
        .remove_department(&removal_draft("3", "3"))
        .await
        .expect_err("same department");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn removal_of_unknown_target_is_not_found(
    mut personnel: MockPersonnelQuery,
    commands: MockPersonnelCommand,
) {
    personnel
        .expect_department()
        .returning(|id| Ok((id == 3).then(|| department(3, "Склад"))));
    let service = make_service(personnel, commands);

    let error = service
        .remove_department(&removal_draft("3", "9"))
        .await
        .expect_err("unknown target");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Целевой отдел с ID 9 не существует");
}

#[rstest]
#[case(None, ResponseStatus::Success)]
#[case(Some(2), ResponseStatus::PartialSuccess)]
#[case(Some(0), ResponseStatus::Warning)]
#[tokio::test]
async fn removal_reports_what_remains(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
    #[case] remaining: Option<i64>,
    #[case] expected: ResponseStatus,
) {
    personnel
        .expect_department()
        .returning(|id| Ok(Some(department(id, "Отдел"))));
    personnel
        .expect_active_headcount()
        .with(eq(3))
        .return_once(|_| Ok(4));
    personnel
        .expect_remaining_headcount()
        .with(eq(3))
        .return_once(move |_| Ok(remaining));
    commands
        .expect_remove_department()
        .return_once(|_| Ok(receipt("Готово", None)));
    let service = make_service(personnel, commands);

    let response = service
        .remove_department(&removal_draft("3", "1"))
        .await
        .expect("removal");

    assert_eq!(response.status, expected);
}

#[rstest]
#[tokio::test]
async fn removal_with_dependent_rows_conflicts(
    mut personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    personnel
        .expect_department()
        .returning(|id| Ok(Some(department(id, "Отдел"))));
    personnel.expect_active_headcount().return_once(|_| Ok(1));
    personnel.expect_remaining_headcount().never();
    commands.expect_remove_department().return_once(|_| {
        Err(GatewayError::foreign_key_violation(
            None,
            "update or delete violates foreign key constraint",
        ))
    });
    let service = make_service(personnel, commands);

    let error = service
        .remove_department(&removal_draft("3", "1"))
        .await
        .expect_err("dependent rows");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[case(RoutineOutcome::NotFound { reason: "Сотрудник не найден".to_owned() }, ErrorCode::NotFound)]
#[case(RoutineOutcome::Conflict { reason: "Сотрудник уже уволен".to_owned() }, ErrorCode::Conflict)]
#[case(RoutineOutcome::Invalid { reason: "Ошибка".to_owned() }, ErrorCode::InvalidRequest)]
#[tokio::test]
async fn dismissal_rejections_map_to_statuses(
    personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
    #[case] outcome: RoutineOutcome<ProcedureReceipt>,
    #[case] expected: ErrorCode,
) {
    commands
        .expect_dismiss_employee()
        .return_once(move |_| Ok(outcome));
    let service = make_service(personnel, commands);

    let error = service
        .dismiss(&dismissal_draft())
        .await
        .expect_err("rejected dismissal");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn missing_dismissal_target_keeps_procedure_message(
    personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    commands.expect_dismiss_employee().return_once(|_| {
        Ok(RoutineOutcome::NotFound {
            reason: "Сотрудник Иванов Иван не найден".to_owned(),
        })
    });
    let service = make_service(personnel, commands);

    let error = service
        .dismiss(&dismissal_draft())
        .await
        .expect_err("not found");

    assert_eq!(
        error.message(),
        "Сотрудник не найден. Проверьте ФИО, отдел и должность."
    );
    assert_eq!(
        error.details(),
        Some(&json!({"original_message": "Сотрудник Иванов Иван не найден"}))
    );
}

#[rstest]
#[tokio::test]
async fn dismissal_is_dated_by_the_clock(
    personnel: MockPersonnelQuery,
    mut commands: MockPersonnelCommand,
) {
    commands
        .expect_dismiss_employee()
        .withf(|dismissal| dismissal.middle_name.is_none())
        .return_once(|_| Ok(receipt("Сотрудник уволен", None)));
    let service = make_service(personnel, commands);

    let response = service
        .dismiss(&dismissal_draft())
        .await
        .expect("dismissed");

    assert_eq!(
        response.details.dismissal_date,
        chrono::NaiveDate::from_ymd_opt(2026, 3, 15).expect("date")
    );
    assert_eq!(response.details.employee_name, "Иванов Иван");
}

// ------------------------------------------------------------------------
// Views
// ------------------------------------------------------------------------

#[rstest]
#[tokio::test]
async fn non_numeric_grade_bounds_fail_validation() {
    let mut reports = MockReportsQuery::new();
    reports.expect_salary_grades().never();
    let service = PersonnelService::new(
        PersonnelPorts {
            personnel: Arc::new(MockPersonnelQuery::new()),
            commands: Arc::new(MockPersonnelCommand::new()),
            reports: Arc::new(reports),
        },
        fixture_clock(),
        RuntimeMode::Production,
    );
    let draft = GradeFilterDraft {
        min_salary: Some("много".into()),
        ..GradeFilterDraft::default()
    };

    let error = service.salary_grades(&draft).await.expect_err("bad bound");

    assert_eq!(error.code(), ErrorCode::ValidationFailed);
}
