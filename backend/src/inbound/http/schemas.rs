//! OpenAPI schemas for domain error types.
//!
//! [`crate::domain::Error`] serialises through a private DTO, so its schema
//! is declared here beside the adapter that renders it.

use utoipa::ToSchema;

use crate::domain::ResponseStatus;
use crate::domain::validation::FieldError;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// One or more fields failed validation (422).
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// Malformed request or business rule rejection (400).
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Destructive operation sent without `confirm` (400).
    #[schema(rename = "confirmation_required")]
    ConfirmationRequired,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "conflict")]
    Conflict,
    /// Database unreachable (503).
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// `error`, `validation_error` or `warning`.
    status: ResponseStatus,
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Сотрудник не найден. Проверьте введенные данные.")]
    message: String,
    /// Field-attributed failures; only for `validation_failed`.
    errors: Option<Vec<FieldError>>,
    /// Endpoint-specific context such as search criteria.
    details: Option<serde_json::Value>,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}
