//! Failure reported by the personnel database gateway.

use super::define_port_error;
use crate::domain::RejectionKind;

define_port_error! {
    /// Errors raised by database-backed personnel ports.
    ///
    /// Codes follow PostgreSQL SQLSTATE classes so diagnostics stay
    /// recognisable to operators.
    pub enum GatewayError {
        /// The pool could not provide a connection.
        Connection { message: String } = "08006" => "database connection failed: {message}",
        UniqueViolation { constraint: Option<String>, message: String } =
            "23505" => "unique constraint violated: {message}",
        ForeignKeyViolation { constraint: Option<String>, message: String } =
            "23503" => "foreign key constraint violated: {message}",
        CheckViolation { message: String } = "23514" => "check constraint violated: {message}",
        /// A date value the database could not interpret.
        InvalidDate { message: String } = "22008" => "invalid date value: {message}",
        ValueTooLong { message: String } = "22001" => "value too long: {message}",
        Deadlock { message: String } = "40P01" => "deadlock detected: {message}",
        /// A routine refused the request by raising an exception.
        Rejected { kind: RejectionKind, message: String } = "P0001" => "{message}",
        /// A procedure finished without returning its out-parameters.
        MissingResult = "P0002" => "routine returned no result",
        Query { message: String } = "XX000" => "database query failed: {message}",
    }
}

impl GatewayError {
    /// Raw database message, without the variant prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Connection { message }
            | Self::UniqueViolation { message, .. }
            | Self::ForeignKeyViolation { message, .. }
            | Self::CheckViolation { message }
            | Self::InvalidDate { message }
            | Self::ValueTooLong { message }
            | Self::Deadlock { message }
            | Self::Rejected { message, .. }
            | Self::Query { message } => message.clone(),
            Self::MissingResult => self.to_string(),
        }
    }

    /// Name of the violated constraint, when the database reported one.
    #[must_use]
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint, .. }
            | Self::ForeignKeyViolation { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}
