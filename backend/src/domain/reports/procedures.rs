//! Responses of the stored-procedure endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::commands::{DepartmentRemoval, Dismissal, NewEmployee};
use crate::domain::envelope::ResponseStatus;
use crate::domain::records::DepartmentRef;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HireDetails {
    pub personal_number: String,
    pub full_name: String,
    pub department_id: i32,
    pub position_id: i32,
    pub hire_date: NaiveDate,
    pub salary: f64,
}

/// Body of `POST /api/procedures/add-employee` on success.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HireResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub employee_id: Option<i32>,
    pub details: HireDetails,
}

impl HireResponse {
    #[must_use]
    pub fn new(hire: &NewEmployee, message: String, employee_id: Option<i32>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message,
            employee_id,
            details: HireDetails {
                personal_number: hire.personal_number.clone(),
                full_name: hire.full_name(),
                department_id: hire.department_id,
                position_id: hire.position_id,
                hire_date: hire.hire_date,
                salary: hire.salary,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DismissalDetails {
    pub employee_name: String,
    pub department: String,
    pub position: String,
    pub dismissal_reason: String,
    pub dismissal_date: NaiveDate,
}

/// Body of `DELETE /api/procedures/dismiss-employee` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DismissalResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub details: DismissalDetails,
}

impl DismissalResponse {
    #[must_use]
    pub fn new(dismissal: &Dismissal, message: String, dismissal_date: NaiveDate) -> Self {
        Self {
            status: ResponseStatus::Success,
            message,
            details: DismissalDetails {
                employee_name: dismissal.full_name(),
                department: dismissal.department_name.clone(),
                position: dismissal.position_name.clone(),
                dismissal_reason: dismissal.reason.clone(),
                dismissal_date,
            },
        }
    }
}

/// Department deleted and its staff transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RemovedDepartment {
    pub deleted_department_id: i32,
    pub deleted_department_name: String,
    pub target_department_id: i32,
    pub target_department_name: String,
    pub reason: String,
    pub transferred_employees: i64,
    pub timestamp: DateTime<Utc>,
}

/// Department kept because active employees remain in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RetainedDepartment {
    pub department_id: i32,
    pub department_name: String,
    pub remaining_employees: i64,
    pub action_taken: String,
    pub timestamp: DateTime<Utc>,
}

/// Department kept although no active employees remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UnexplainedRetention {
    pub department_id: i32,
    pub department_name: String,
    pub target_department_id: i32,
    pub target_department_name: String,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RemovalDetails {
    Removed(RemovedDepartment),
    Retained(RetainedDepartment),
    Unexplained(UnexplainedRetention),
}

/// Body of `DELETE /api/procedures/delete-department`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentRemovalResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub details: RemovalDetails,
}

impl DepartmentRemovalResponse {
    /// Describe the state of `source` after the transfer procedure ran.
    ///
    /// `remaining` is the active headcount still in `source`, or `None`
    /// once the department no longer exists.
    #[must_use]
    pub fn build(
        removal: &DepartmentRemoval,
        source: DepartmentRef,
        target: DepartmentRef,
        transferred: i64,
        remaining: Option<i64>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        match remaining {
            None => Self {
                status: ResponseStatus::Success,
                message: format!(
                    "Отдел \"{}\" (ID: {}) успешно удален",
                    source.name, source.department_id
                ),
                details: RemovalDetails::Removed(RemovedDepartment {
                    deleted_department_id: source.department_id,
                    deleted_department_name: source.name,
                    target_department_id: target.department_id,
                    target_department_name: target.name,
                    reason: removal.reason.clone(),
                    transferred_employees: transferred,
                    timestamp,
                }),
            },
            Some(remaining) if remaining > 0 => Self {
                status: ResponseStatus::PartialSuccess,
                message: format!(
                    "Отдел \"{}\" не может быть удален: осталось {remaining} активных сотрудников",
                    source.name
                ),
                details: RemovalDetails::Retained(RetainedDepartment {
                    department_id: source.department_id,
                    department_name: source.name,
                    remaining_employees: remaining,
                    action_taken: "Процедура выполнена, но отдел сохранен".to_owned(),
                    timestamp,
                }),
            },
            Some(_) => Self {
                status: ResponseStatus::Warning,
                message: format!("Отдел \"{}\" сохранен по неизвестной причине", source.name),
                details: RemovalDetails::Unexplained(UnexplainedRetention {
                    department_id: source.department_id,
                    department_name: source.name,
                    target_department_id: target.department_id,
                    target_department_name: target.name,
                    note: "Проверьте логи PostgreSQL для деталей".to_owned(),
                    timestamp,
                }),
            },
        }
    }
}

/// One entry of the procedure catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProcedureDescriptor {
    pub name: &'static str,
    pub method: &'static str,
    pub endpoint: &'static str,
    pub description: &'static str,
    pub parameters: Vec<&'static str>,
}

/// Body of `GET /api/procedures`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProcedureCatalogue {
    pub procedures: Vec<ProcedureDescriptor>,
}

impl ProcedureCatalogue {
    /// The procedures exposed under `/api/procedures`.
    #[must_use]
    pub fn published() -> Self {
        Self {
            procedures: vec![
                ProcedureDescriptor {
                    name: "add-employee",
                    method: "POST",
                    endpoint: "/api/procedures/add-employee",
                    description: "Добавление нового сотрудника в систему",
                    parameters: vec![
                        "personal_number",
                        "middle_name",
                        "first_name",
                        "last_name",
                        "birth_date",
                        "passport",
                        "inn",
                        "snils",
                        "address",
                        "phone_number",
                        "department_id",
                        "position_id",
                        "education",
                        "diplom_num",
                        "finish_year",
                        "hire_date",
                        "salary",
                        "probation_period",
                    ],
                },
                ProcedureDescriptor {
                    name: "delete-department-with-transfer",
                    method: "DELETE",
                    endpoint: "/api/procedures/delete-department",
                    description: "Удаление отдела с переводом всех сотрудников в другой отдел",
                    parameters: vec!["department_id_to_delete", "target_department_id", "reason"],
                },
                ProcedureDescriptor {
                    name: "dismiss-specific-employee",
                    method: "DELETE",
                    endpoint: "/api/procedures/dismiss-employee",
                    description: "Увольнение конкретного сотрудника по ФИО, отделу и должности",
                    parameters: vec![
                        "middle_name (опционально)",
                        "first_name",
                        "last_name",
                        "department_name",
                        "position_name",
                        "reason",
                    ],
                },
                ProcedureDescriptor {
                    name: "get-salary-analysis",
                    method: "GET",
                    endpoint: "/api/procedures/salary-analysis",
                    description: "Анализ зарплат по отделам с детализацией",
                    parameters: Vec::new(),
                },
            ],
        }
    }
}
