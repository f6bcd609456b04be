//! Optional filters for the report views.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::validation::{FieldName, RequestValidator, ValidationReport};

fn substring_pattern(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| format!("%{}%", value.to_lowercase()))
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Query string of the salary grade report.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GradeFilterDraft {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub min_salary: Option<String>,
    #[serde(default)]
    pub max_salary: Option<String>,
}

/// Accepted salary grade filters.
///
/// Text filters hold lowercased `LIKE` patterns matching any substring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeFilter {
    pub department_pattern: Option<String>,
    pub grade_pattern: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl GradeFilter {
    pub fn validate(draft: &GradeFilterDraft) -> Result<Self, ValidationReport> {
        let mut validator = RequestValidator::new();
        let min_salary = parse_amount(
            &mut validator,
            FieldName::new("min_salary"),
            draft.min_salary.as_deref(),
            "Минимальная зарплата должна быть числом",
        );
        let max_salary = parse_amount(
            &mut validator,
            FieldName::new("max_salary"),
            draft.max_salary.as_deref(),
            "Максимальная зарплата должна быть числом",
        );
        validator.finish(|| {
            Some(Self {
                department_pattern: substring_pattern(draft.department.as_deref()),
                grade_pattern: substring_pattern(draft.grade.as_deref()),
                min_salary,
                max_salary,
            })
        })
    }
}

fn parse_amount(
    validator: &mut RequestValidator,
    field: FieldName,
    raw: Option<&str>,
    message: &str,
) -> Option<f64> {
    let value = non_blank(raw)?;
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            validator.reject(field, message, raw);
            None
        }
    }
}

/// Query string of the birthday report.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BirthdayFilterDraft {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub upcoming_days: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Birthday filters. Malformed values are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayFilter {
    pub month: Option<i32>,
    pub upcoming_days: Option<i32>,
    pub department_pattern: Option<String>,
}

impl From<&BirthdayFilterDraft> for BirthdayFilter {
    fn from(draft: &BirthdayFilterDraft) -> Self {
        Self {
            month: non_blank(draft.month.as_deref())
                .and_then(|value| value.parse::<i32>().ok())
                .filter(|month| (1..=12).contains(month)),
            upcoming_days: non_blank(draft.upcoming_days.as_deref())
                .and_then(|value| value.parse::<i32>().ok()),
            department_pattern: substring_pattern(draft.department.as_deref()),
        }
    }
}
