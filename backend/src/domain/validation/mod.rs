//! Request validation pipeline.
//!
//! A request is validated by running one [`FieldRule`] per field through a
//! [`RequestValidator`]. Every rule runs even when earlier fields failed, so
//! the caller receives the complete list of problems in declaration order.
//! Whether a single rule keeps checking after its own first failure is the
//! rule's [`ChainMode`].

pub mod dates;
pub mod identity;
pub mod rules;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use dates::{AgeLimit, AgePolicy, DateFormat, DateLabels, DateRule, FieldOrder, age_on};
pub use rules::{ChainMode, DecimalRule, IntegerRule, Normalise, TextRule, collapse_whitespace};

/// Static name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    field: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value as the client sent it, before any sanitisation.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Ordered collection of field failures for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Look up the first failure recorded for `field`.
    #[must_use]
    pub fn first_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    fn unassembled() -> Self {
        Self::from(vec![FieldError::new(
            "request",
            "Не удалось разобрать данные запроса",
            None,
        )])
    }
}

impl From<Vec<FieldError>> for ValidationReport {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// A validator for one request field.
pub trait FieldRule {
    /// Value produced once the field is accepted.
    type Output;

    /// Field this rule validates.
    fn field(&self) -> FieldName;

    /// Validate `raw`, returning the accepted value or every message the
    /// rule produced.
    fn apply(&self, raw: Option<&str>) -> Result<Self::Output, Vec<String>>;
}

/// Accumulates field failures across all rules of a request.
///
/// # Examples
/// ```
/// use personnel::domain::validation::{IntegerRule, RequestValidator};
///
/// let mut validator = RequestValidator::new();
/// let id = validator.check(&IntegerRule::identifier("department_id", "ID отдела"), Some("0"));
/// assert!(id.is_none());
/// let report = validator.finish(|| id).expect_err("rejected");
/// assert_eq!(report.errors()[0].field(), "department_id");
/// ```
#[derive(Debug, Default)]
pub struct RequestValidator {
    report: ValidationReport,
}

impl RequestValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `rule` against `raw`, recording failures under the rule's field.
    pub fn check<R: FieldRule>(&mut self, rule: &R, raw: Option<&str>) -> Option<R::Output> {
        match rule.apply(raw) {
            Ok(value) => Some(value),
            Err(messages) => {
                for message in messages {
                    self.report.push(FieldError::new(
                        rule.field().as_str(),
                        message,
                        raw.map(str::to_owned),
                    ));
                }
                None
            }
        }
    }

    /// Record a failure that spans several fields.
    pub fn reject(&mut self, field: FieldName, message: impl Into<String>, raw: Option<&str>) {
        let error = FieldError::new(field.as_str(), message, raw.map(str::to_owned));
        self.report.push(error);
    }

    /// Finish validation.
    ///
    /// `assemble` only runs when no failure was recorded and builds the
    /// command from the accepted values.
    pub fn finish<T>(self, assemble: impl FnOnce() -> Option<T>) -> Result<T, ValidationReport> {
        if !self.report.is_empty() {
            return Err(self.report);
        }
        assemble().ok_or_else(ValidationReport::unassembled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accumulates_errors_across_fields_in_declaration_order() {
        let mut validator = RequestValidator::new();
        let first = validator.check(&identity::first_name(ChainMode::CollectAll), Some("A"));
        let department = IntegerRule::identifier("department_id", "ID отдела");
        let dept = validator.check(&department, Some("x"));
        let report = validator
            .finish(|| Some((first?, dept?)))
            .expect_err("both rejected");

        let fields: Vec<_> = report.errors().iter().map(FieldError::field).collect();
        assert_eq!(fields.first(), Some(&"first_name"));
        assert_eq!(fields.last(), Some(&"department_id"));
    }

    #[rstest]
    fn keeps_rejected_raw_value() {
        let mut validator = RequestValidator::new();
        validator.check(&identity::passport(), Some("12ab"));
        let report = validator.finish(|| Some(())).expect_err("rejected");
        let error = report.first_for("passport").expect("passport error");
        assert_eq!(error.value(), Some("12ab"));
    }

    #[rstest]
    fn finish_runs_assembler_only_when_clean() {
        let mut validator = RequestValidator::new();
        let department = IntegerRule::identifier("department_id", "ID отдела");
        let id = validator.check(&department, Some("7"));
        assert_eq!(validator.finish(|| id), Ok(7));
    }

    #[rstest]
    fn finish_reports_unassembled_command() {
        let validator = RequestValidator::new();
        let report = validator
            .finish(|| None::<()>)
            .expect_err("nothing to assemble");
        assert_eq!(report.errors().len(), 1);
    }

    #[rstest]
    fn reject_records_cross_field_failure() {
        let mut validator = RequestValidator::new();
        let field = FieldName::new("target_department_id");
        validator.reject(field, "совпадает", Some("3"));
        let report = validator.finish(|| Some(())).expect_err("rejected");
        assert_eq!(report.errors()[0].message(), "совпадает");
    }
}
