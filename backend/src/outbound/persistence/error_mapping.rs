//! Translate pool and Diesel failures into [`GatewayError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::RejectionKind;
use crate::domain::ports::GatewayError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> GatewayError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            GatewayError::connection(message)
        }
    }
}

/// Map a Diesel error raised while running `operation`.
///
/// Diesel does not expose the SQLSTATE for kinds it does not model, so
/// those are told apart by message text. Exceptions raised by the personnel
/// routines carry Russian messages and become [`GatewayError::Rejected`].
pub(super) fn map_diesel_error(error: DieselError, operation: &str) -> GatewayError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            %operation,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(kind, info) => {
            let message = info.message().to_owned();
            let constraint = info.constraint_name().map(str::to_owned);
            match kind {
                DatabaseErrorKind::UniqueViolation => {
                    GatewayError::unique_violation(constraint, message)
                }
                DatabaseErrorKind::ForeignKeyViolation => {
                    GatewayError::foreign_key_violation(constraint, message)
                }
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
                    GatewayError::check_violation(message)
                }
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                    GatewayError::connection(message)
                }
                DatabaseErrorKind::SerializationFailure => GatewayError::deadlock(message),
                _ => map_by_message(message),
            }
        }
        DieselError::NotFound => GatewayError::query("record not found"),
        DieselError::DeserializationError(err) => {
            GatewayError::query(format!("unexpected result shape: {err}"))
        }
        other => GatewayError::query(other.to_string()),
    }
}

fn map_by_message(message: String) -> GatewayError {
    let lower = message.to_lowercase();
    if lower.contains("deadlock detected") {
        GatewayError::deadlock(message)
    } else if lower.contains("value too long") {
        GatewayError::value_too_long(message)
    } else if lower.contains("invalid input syntax for type date")
        || lower.contains("date/time field value out of range")
    {
        GatewayError::invalid_date(message)
    } else if is_routine_message(&message) {
        GatewayError::rejected(RejectionKind::from_message(&message), message)
    } else {
        GatewayError::query(message)
    }
}

/// Routine exceptions are the only Cyrillic messages; server errors use the
/// English locale.
fn is_routine_message(message: &str) -> bool {
    message
        .chars()
        .any(|ch| matches!(ch, '\u{0400}'..='\u{04FF}'))
}
