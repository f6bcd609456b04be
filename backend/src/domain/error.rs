//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the `status` marker in the serialised payload is derived from
//! the [`ErrorCode`] so clients can branch on it without inspecting status
//! codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::ResponseStatus;
use super::trace_id::TraceId;
use super::validation::{FieldError, ValidationReport};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// One or more request fields failed validation.
    ValidationFailed,
    /// The request is malformed or was rejected by a business rule.
    InvalidRequest,
    /// A destructive operation was sent without explicit confirmation.
    ConfirmationRequired,
    /// The requested record does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    /// A dependency such as the database is unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred.
    InternalError,
}

impl ErrorCode {
    /// Envelope status reported alongside this code.
    #[must_use]
    pub const fn envelope_status(self) -> ResponseStatus {
        match self {
            Self::ValidationFailed => ResponseStatus::ValidationError,
            Self::ConfirmationRequired => ResponseStatus::Warning,
            _ => ResponseStatus::Error,
        }
    }

    const fn fallback_message(self) -> &'static str {
        match self {
            Self::ValidationFailed => "Ошибки валидации данных",
            Self::InvalidRequest => "Некорректный запрос",
            Self::ConfirmationRequired => "Операция требует подтверждения",
            Self::NotFound => "Запись не найдена",
            Self::Conflict => "Конфликт данных",
            Self::ServiceUnavailable => "Сервис временно недоступен",
            Self::InternalError => "Внутренняя ошибка сервера",
        }
    }
}

/// Error payload returned to clients.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
/// - `errors` is only populated for [`ErrorCode::ValidationFailed`].
///
/// # Examples
/// ```
/// use personnel::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Сотрудник не найден");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    errors: Vec<FieldError>,
    details: Option<Value>,
    trace_id: Option<String>,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error message must not be empty")]
    EmptyMessage,
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope.
    ///
    /// Blank messages are replaced with the default text for `code`.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message)
            .unwrap_or_else(|_| Self::build(code, code.fallback_message().to_owned()))
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::build(code, message))
    }

    fn build(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            errors: Vec::new(),
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Field-level validation failures, in declaration order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Supplementary details for clients.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Correlation identifier, if one was in scope.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Merge extra keys into the details object, creating it when absent.
    #[must_use]
    pub fn merge_details(mut self, extra: Value) -> Self {
        match (&mut self.details, extra) {
            (Some(Value::Object(current)), Value::Object(incoming)) => {
                current.extend(incoming);
            }
            (slot, incoming) => {
                if slot.is_none() {
                    *slot = Some(incoming);
                }
            }
        }
        self
    }

    /// Override the trace identifier.
    ///
    /// Blank identifiers are ignored.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        let trace_id = trace_id.into();
        if !trace_id.trim().is_empty() {
            self.trace_id = Some(trace_id);
        }
        self
    }

    /// Fallible variant of [`Error::with_trace_id`].
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(trace_id);
        Ok(self)
    }

    /// Build the 422 payload from a collected validation report.
    pub fn validation(report: ValidationReport) -> Self {
        let mut error = Self::new(
            ErrorCode::ValidationFailed,
            ErrorCode::ValidationFailed.fallback_message(),
        );
        error.errors = report.into_errors();
        error
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ConfirmationRequired`].
    pub fn confirmation_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfirmationRequired, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Self::validation(report)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorDto {
    status: ResponseStatus,
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            status: value.code.envelope_status(),
            code: value.code,
            message: value.message,
            errors: value.errors,
            details: value.details,
            trace_id: value.trace_id,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            errors,
            details,
            trace_id,
            ..
        } = value;

        let mut error = Self::try_new(code, message)?;
        error.errors = errors;
        error.details = details;
        error.trace_id = match trace_id {
            Some(id) if id.trim().is_empty() => return Err(ErrorValidationError::EmptyTraceId),
            other => other,
        };
        Ok(error)
    }
}
