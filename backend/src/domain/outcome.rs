//! Business results reported by stored routines.
//!
//! Routines report through `p_status`/`p_message` out-parameters or by
//! raising an exception with a Russian message. Both forms are decoded once
//! at the gateway boundary into [`RoutineOutcome`].

/// Status string a routine reports on success.
pub const ROUTINE_SUCCESS: &str = "SUCCESS";

/// Category of a routine's refusal, derived from its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    NotFound,
    Conflict,
    Invalid,
}

impl RejectionKind {
    /// Classify a routine message.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::RejectionKind;
    ///
    /// assert_eq!(RejectionKind::from_message("Сотрудник не найден"), RejectionKind::NotFound);
    /// assert_eq!(RejectionKind::from_message("Сотрудник уже уволен"), RejectionKind::Conflict);
    /// assert_eq!(RejectionKind::from_message("Некорректные данные"), RejectionKind::Invalid);
    /// ```
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("не найден") || lowered.contains("не существует") {
            Self::NotFound
        } else if lowered.contains("уже уволен") || lowered.contains("уже существует") {
            Self::Conflict
        } else {
            Self::Invalid
        }
    }
}

/// Decoded result of a stored routine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineOutcome<T> {
    Ok(T),
    NotFound { reason: String },
    Conflict { reason: String },
    Invalid { reason: String },
}

impl<T> RoutineOutcome<T> {
    /// Decode the `p_status`/`p_message` pair, keeping `data` on success.
    pub fn from_status(status: Option<&str>, message: impl Into<String>, data: T) -> Self {
        if status.map(str::trim) == Some(ROUTINE_SUCCESS) {
            return Self::Ok(data);
        }
        let reason = message.into();
        Self::rejected(RejectionKind::from_message(&reason), reason)
    }

    pub fn rejected(kind: RejectionKind, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        match kind {
            RejectionKind::NotFound => Self::NotFound { reason },
            RejectionKind::Conflict => Self::Conflict { reason },
            RejectionKind::Invalid => Self::Invalid { reason },
        }
    }
}

/// Out-parameters of a successful procedure call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureReceipt {
    pub message: String,
    pub employee_id: Option<i32>,
}
