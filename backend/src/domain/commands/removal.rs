//! Dismissal, department removal and the payroll raise confirmation.

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::{full_name, raw_text};
use crate::domain::validation::{
    ChainMode, IntegerRule, RequestValidator, ValidationReport, identity,
};

/// Raw body of a dismissal.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DismissalDraft {
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иван")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иванов")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Петрович")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Бухгалтерия")]
    pub department_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Бухгалтер")]
    pub position_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "по собственному желанию")]
    pub reason: Option<String>,
}

/// A validated dismissal for `dismiss_specific_employee`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    pub middle_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub department_name: String,
    pub position_name: String,
    pub reason: String,
}

impl Dismissal {
    pub fn validate(draft: &DismissalDraft) -> Result<Self, ValidationReport> {
        let mut validator = RequestValidator::new();
        let first_name = validator.check(
            &identity::first_name(ChainMode::CollectAll),
            draft.first_name.as_deref(),
        );
        let last_name = validator.check(
            &identity::last_name(ChainMode::CollectAll),
            draft.last_name.as_deref(),
        );
        let middle_name = validator.check(
            &identity::middle_name_optional(),
            draft.middle_name.as_deref(),
        );
        let department_name = validator.check(
            &identity::department_name(),
            draft.department_name.as_deref(),
        );
        let position_name = validator.check(
            &identity::position_name(),
            draft.position_name.as_deref(),
        );
        let reason = validator.check(&identity::dismissal_reason(), draft.reason.as_deref());
        validator.finish(|| {
            Some(Self {
                middle_name: middle_name?,
                first_name: first_name??,
                last_name: last_name??,
                department_name: department_name??,
                position_name: position_name??,
                reason: reason??,
            })
        })
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(
            &self.last_name,
            &self.first_name,
            self.middle_name.as_deref(),
        )
    }
}

/// Raw body of a department removal.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DepartmentRemovalDraft {
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "4")]
    pub department_id_to_delete: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "1")]
    pub target_department_id: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "реорганизация компании")]
    pub reason: Option<String>,
}

/// Removal of one department with its staff moved to another.
///
/// Source and target may still be equal here: that check runs after both
/// departments are known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRemoval {
    pub department_id: i32,
    pub target_department_id: i32,
    pub reason: String,
}

impl DepartmentRemoval {
    pub fn validate(draft: &DepartmentRemovalDraft) -> Result<Self, ValidationReport> {
        let mut validator = RequestValidator::new();
        let source = validator.check(
            &IntegerRule::identifier("department_id_to_delete", "ID удаляемого отдела"),
            draft.department_id_to_delete.as_deref(),
        );
        let target = validator.check(
            &IntegerRule::identifier("target_department_id", "ID целевого отдела"),
            draft.target_department_id.as_deref(),
        );
        let reason = validator.check(&identity::removal_reason(), draft.reason.as_deref());
        validator.finish(|| {
            Some(Self {
                department_id: i32::try_from(source?).ok()?,
                target_department_id: i32::try_from(target?).ok()?,
                reason: reason??,
            })
        })
    }

    #[must_use]
    pub const fn transfers_to_itself(&self) -> bool {
        self.department_id == self.target_department_id
    }
}

/// Body of the tenure-based payroll raise.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SalaryRaiseDraft {
    #[serde(default)]
    #[schema(value_type = Option<bool>, example = true)]
    pub confirm: Option<Value>,
}

impl SalaryRaiseDraft {
    /// Only the literal `true` or the string `"yes"` confirm the raise.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        match &self.confirm {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text == "yes",
            _ => false,
        }
    }
}
