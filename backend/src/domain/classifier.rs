//! Maps gateway failures to client-facing errors.
//!
//! The same database failure means different things depending on the
//! operation: a foreign key violation while hiring points at a missing
//! department, while removing a department it means dependent rows remain.
//! [`ErrorClassifier`] resolves the status and Russian message per
//! [`Operation`], and attaches raw diagnostics in development only.

use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::GatewayError;
use crate::domain::{Error, ErrorCode, RejectionKind, RuntimeMode};

/// Service operation in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    EmployeeInfo,
    ActiveEmployees,
    SalaryRaise,
    SalaryCalculation,
    DepartmentSalary,
    AllDepartmentSalaries,
    Hiring,
    DepartmentRemoval,
    Dismissal,
    SalaryAnalysis,
    ProbationReport,
    GradeReport,
    BirthdayReport,
}

impl Operation {
    /// Message for failures that match no specific rule.
    #[must_use]
    pub const fn internal_message(self) -> &'static str {
        match self {
            Self::EmployeeInfo => "Внутренняя ошибка сервера при получении информации о сотруднике",
            Self::ActiveEmployees => "Внутренняя ошибка сервера при получении списка сотрудников",
            Self::SalaryRaise => "Внутренняя ошибка сервера при обновлении зарплат",
            Self::SalaryCalculation => "Внутренняя ошибка сервера при расчете зарплаты",
            Self::DepartmentSalary => "Внутренняя ошибка сервера при расчете средней зарплаты",
            Self::Hiring => "Внутренняя ошибка сервера при добавлении сотрудника",
            Self::DepartmentRemoval => "Внутренняя ошибка сервера при удалении отдела",
            Self::Dismissal => "Внутренняя ошибка сервера при увольнении сотрудника",
            Self::SalaryAnalysis => "Внутренняя ошибка сервера при анализе зарплат",
            Self::AllDepartmentSalaries
            | Self::ProbationReport
            | Self::GradeReport
            | Self::BirthdayReport => "Внутренняя ошибка сервера",
        }
    }
}

/// Unique constraints on `employees` and the duplicate they signal.
fn unique_constraint_message(constraint: Option<&str>) -> Option<&'static str> {
    match constraint? {
        "employees_personal_number_key" => {
            Some("Сотрудник с таким табельным номером уже существует")
        }
        "employees_passport_key" => Some("Сотрудник с таким паспортом уже существует"),
        "employees_inn_key" => Some("Сотрудник с таким ИНН уже существует"),
        "employees_snils_key" => Some("Сотрудник с таким СНИЛС уже существует"),
        "employees_phone_number_key" => Some("Сотрудник с таким телефоном уже существует"),
        _ => None,
    }
}

/// Turns [`GatewayError`]s into [`Error`]s for one runtime mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorClassifier {
    mode: RuntimeMode,
}

impl ErrorClassifier {
    #[must_use]
    pub const fn new(mode: RuntimeMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Classify `failure` raised during `operation`.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::classifier::{ErrorClassifier, Operation};
    /// use personnel::domain::ports::GatewayError;
    /// use personnel::domain::{ErrorCode, RuntimeMode};
    ///
    /// let classifier = ErrorClassifier::new(RuntimeMode::Production);
    /// let error = classifier.classify(
    ///     Operation::DepartmentRemoval,
    ///     &GatewayError::foreign_key_violation(None, "still referenced"),
    /// );
    /// assert_eq!(error.code(), ErrorCode::Conflict);
    /// assert!(error.details().is_none());
    /// ```
    #[must_use]
    pub fn classify(&self, operation: Operation, failure: &GatewayError) -> Error {
        let classified = Self::resolve(operation, failure);
        match classified.code() {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => error!(
                ?operation,
                code = failure.code(),
                error = %failure,
                "personnel operation failed"
            ),
            _ => warn!(
                ?operation,
                code = failure.code(),
                error = %failure,
                "personnel operation rejected by database"
            ),
        }
        self.with_diagnostics(classified, failure)
    }

    fn with_diagnostics(&self, error: Error, failure: &GatewayError) -> Error {
        if !self.mode.exposes_diagnostics() {
            return error;
        }
        error.merge_details(json!({
            "original_error": failure.detail(),
            "error_code": failure.code(),
        }))
    }

    fn resolve(operation: Operation, failure: &GatewayError) -> Error {
        match failure {
            GatewayError::Connection { .. } => {
                Error::service_unavailable("База данных временно недоступна")
            }
            GatewayError::UniqueViolation { constraint, .. } => {
                Self::unique_violation(operation, constraint.as_deref())
            }
            GatewayError::ForeignKeyViolation { .. } => Self::foreign_key_violation(operation),
            GatewayError::InvalidDate { .. } => Error::invalid_request(match operation {
                Operation::EmployeeInfo => "Некорректная дата. Проверьте формат (YYYY-MM-DD)",
                _ => "Неправильный формат даты. Используйте YYYY-MM-DD",
            }),
            GatewayError::CheckViolation { .. } => {
                Error::invalid_request("Нарушение ограничений целостности данных")
            }
            GatewayError::ValueTooLong { .. } => Error::invalid_request(match operation {
                Operation::DepartmentRemoval => "Причина слишком длинная (максимум 100 символов)",
                _ => "Значение превышает допустимую длину",
            }),
            GatewayError::Rejected { kind, message } => Self::rejection(operation, *kind, message),
            GatewayError::Deadlock { .. } => {
                Error::internal("Обнаружен deadlock. Попробуйте позже.")
            }
            GatewayError::MissingResult => Error::internal("Процедура не вернула результат"),
            GatewayError::Query { .. } => Error::internal(operation.internal_message()),
        }
    }

    fn unique_violation(operation: Operation, constraint: Option<&str>) -> Error {
        let specific = unique_constraint_message(constraint);
        match operation {
            // Hiring reports duplicates as a server failure carrying the
            // constraint-specific message.
            Operation::Hiring => Error::internal(specific.unwrap_or(operation.internal_message())),
            Operation::DepartmentRemoval => {
                Error::conflict("Нарушение уникальности данных при переводе сотрудников")
            }
            _ => Error::conflict(specific.unwrap_or("Нарушение уникальности данных")),
        }
    }

    fn foreign_key_violation(operation: Operation) -> Error {
        match operation {
            Operation::Hiring => Error::not_found(
                "Ошибка ссылочной целостности. Проверьте ID отдела, должности или других связанных данных",
            ),
            Operation::DepartmentRemoval => Error::conflict(
                "Невозможно удалить отдел: существуют связанные записи в других таблицах",
            ),
            Operation::Dismissal => Error::invalid_request("Ошибка ссылочной целостности данных"),
            _ => Error::conflict("Нарушение ссылочной целостности данных"),
        }
    }

    fn rejection(operation: Operation, kind: RejectionKind, message: &str) -> Error {
        // Exceptions raised by the hiring procedure are server failures.
        if operation == Operation::Hiring {
            return Error::internal(if message.contains("младше 65 лет") {
                "Кандидат должен быть младше 65 лет"
            } else {
                operation.internal_message()
            });
        }
        match kind {
            RejectionKind::NotFound if operation == Operation::Dismissal => {
                Error::not_found("Сотрудник не найден. Проверьте данные.")
            }
            RejectionKind::NotFound => Error::not_found(message),
            RejectionKind::Conflict => Error::conflict(message),
            RejectionKind::Invalid => Error::invalid_request(message),
        }
    }
}
