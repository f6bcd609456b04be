//! Domain primitives, ports and services of the personnel API.
//!
//! Purpose: validate raw requests into typed commands, orchestrate the
//! driven ports and shape their rows into response bodies. Nothing here
//! depends on Actix or Diesel.
//!
//! Public surface:
//! - Error (alias to `error::Error`) - API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) - stable error identifier.
//! - PersonnelService (alias to `service::PersonnelService`) - one method
//!   per endpoint.
//! - RoutineOutcome (alias to `outcome::RoutineOutcome`) - decoded stored
//!   routine result.

pub mod classifier;
pub mod commands;
pub mod envelope;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod records;
pub mod reports;
pub mod runtime_mode;
pub mod service;
pub mod trace_id;
pub mod validation;

pub use self::envelope::ResponseStatus;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::outcome::{ProcedureReceipt, RejectionKind, RoutineOutcome};
pub use self::runtime_mode::{RuntimeMode, UnknownRuntimeMode};
pub use self::service::{PersonnelPorts, PersonnelService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use personnel::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Сотрудник не найден"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
