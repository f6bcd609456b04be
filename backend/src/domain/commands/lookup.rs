//! Lookups that identify one employee or department.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::raw_text;
use crate::domain::Error;
use crate::domain::validation::{
    AgePolicy, ChainMode, DateFormat, DateRule, RequestValidator, ValidationReport, identity,
};

/// Raw body of an employee-info lookup.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeeLookupDraft {
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иван")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Петрович")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "1990-05-15")]
    pub birth_date: Option<String>,
}

/// Employee identified by first name, patronymic and birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeLookup {
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: NaiveDate,
}

impl EmployeeLookup {
    pub fn validate(
        draft: &EmployeeLookupDraft,
        today: NaiveDate,
    ) -> Result<Self, ValidationReport> {
        let mut validator = RequestValidator::new();
        let middle_name = validator.check(
            &identity::middle_name_required(ChainMode::CollectAll),
            draft.middle_name.as_deref(),
        );
        let first_name = validator.check(
            &identity::first_name(ChainMode::CollectAll),
            draft.first_name.as_deref(),
        );
        let birth_date = validator.check(
            &DateRule::birth_date(DateFormat::ISO, AgePolicy::STAFF_LOOKUP, today),
            draft.birth_date.as_deref(),
        );
        validator.finish(|| {
            Some(Self {
                first_name: first_name??,
                middle_name: middle_name??,
                birth_date: birth_date?,
            })
        })
    }
}

/// Raw body of a salary calculation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SalaryLookupDraft {
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иванов")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иван")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Петрович")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "1990-05-15")]
    pub birth_date: Option<String>,
}

/// Employee identified by full name and birth date for payroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryLookup {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: NaiveDate,
}

impl SalaryLookup {
    pub fn validate(draft: &SalaryLookupDraft, today: NaiveDate) -> Result<Self, ValidationReport> {
        let mut validator = RequestValidator::new();
        let last_name = validator.check(
            &identity::last_name(ChainMode::StopAtFirst),
            draft.last_name.as_deref(),
        );
        let first_name = validator.check(
            &identity::first_name(ChainMode::StopAtFirst),
            draft.first_name.as_deref(),
        );
        let middle_name = validator.check(
            &identity::middle_name_required(ChainMode::StopAtFirst),
            draft.middle_name.as_deref(),
        );
        let birth_date = validator.check(
            &DateRule::birth_date(DateFormat::ISO, AgePolicy::PAYROLL, today),
            draft.birth_date.as_deref(),
        );
        validator.finish(|| {
            Some(Self {
                last_name: last_name??,
                first_name: first_name??,
                middle_name: middle_name??,
                birth_date: birth_date?,
            })
        })
    }
}

/// Body form of the department selector.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DepartmentSelectorDraft {
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "1")]
    pub department_id: Option<String>,
}

/// Department chosen by path segment or request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentSelector(i32);

impl DepartmentSelector {
    /// Resolve the department id, preferring the path over the body.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::commands::DepartmentSelector;
    ///
    /// let selector = DepartmentSelector::resolve(Some("4"), None).expect("selector");
    /// assert_eq!(selector.id(), 4);
    /// assert!(DepartmentSelector::resolve(None, Some("abc")).is_err());
    /// ```
    pub fn resolve(path: Option<&str>, body: Option<&str>) -> Result<Self, Error> {
        let raw = [path, body]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty());
        let Some(raw) = raw else {
            return Err(Error::invalid_request(
                "Не указан ID отдела. Используйте параметр department_id в URL или в теле запроса.",
            )
            .with_details(json!({
                "examples": {
                    "url_param": "/api/functions/avg-salary/department/1",
                    "body_param": { "department_id": 1 },
                }
            })));
        };
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| Error::invalid_request("ID отдела должен быть числом"))
    }

    #[must_use]
    pub const fn id(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).expect("fixture date")
    }

    fn lookup_draft(first: &str, middle: &str, birth: &str) -> EmployeeLookupDraft {
        EmployeeLookupDraft {
            first_name: Some(first.to_owned()),
            middle_name: Some(middle.to_owned()),
            birth_date: Some(birth.to_owned()),
        }
    }

    #[rstest]
    fn employee_lookup_trims_names(today: NaiveDate) {
        let draft = lookup_draft(" Иван ", "Петрович", "1990-05-15");
        let lookup = EmployeeLookup::validate(&draft, today).expect("valid lookup");
        assert_eq!(lookup.first_name, "Иван");
        assert_eq!(
            lookup.birth_date,
            NaiveDate::from_ymd_opt(1990, 5, 15).expect("date")
        );
    }

    #[rstest]
    fn employee_lookup_reports_every_field_in_order(today: NaiveDate) {
        let report = EmployeeLookup::validate(&EmployeeLookupDraft::default(), today)
            .expect_err("empty draft");
        let fields: Vec<_> = report.errors().iter().map(|error| error.field()).collect();
        assert_eq!(fields, vec!["middle_name", "first_name", "birth_date"]);
    }

    #[rstest]
    #[case("2012-03-15", true)]
    #[case("2012-03-16", false)]
    #[case("1926-03-15", true)]
    #[case("1925-03-14", false)]
    fn employee_lookup_age_window_is_fourteen_to_hundred(
        today: NaiveDate,
        #[case] birth: &str,
        #[case] accepted: bool,
    ) {
        let result = EmployeeLookup::validate(&lookup_draft("Иван", "Петрович", birth), today);
        assert_eq!(result.is_ok(), accepted, "{birth}");
    }

    #[rstest]
    fn employee_lookup_rejects_day_first_dates(today: NaiveDate) {
        let report = EmployeeLookup::validate(&lookup_draft("Иван", "Петрович", "15.05.1990"), today)
            .expect_err("wrong layout");
        assert!(report.first_for("birth_date").is_some());
    }

    #[rstest]
    fn salary_lookup_requires_adults(today: NaiveDate) {
        let draft = SalaryLookupDraft {
            last_name: Some("Иванов".into()),
            first_name: Some("Иван".into()),
            middle_name: Some("Петрович".into()),
            birth_date: Some("2010-01-01".into()),
        };
        let report = SalaryLookup::validate(&draft, today).expect_err("minor");
        assert_eq!(report.errors().len(), 1);
    }

    #[rstest]
    fn salary_lookup_stops_each_name_at_first_failure(today: NaiveDate) {
        let draft = SalaryLookupDraft {
            last_name: Some("J".into()),
            first_name: Some("Иван".into()),
            middle_name: Some("Петрович".into()),
            birth_date: Some("1990-01-01".into()),
        };
        let report = SalaryLookup::validate(&draft, today).expect_err("invalid surname");
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].field(), "last_name");
    }

    #[rstest]
    #[case(Some("7"), Some("3"), 7)]
    #[case(None, Some(" 3 "), 3)]
    #[case(Some(""), Some("5"), 5)]
    fn selector_prefers_path(
        #[case] path: Option<&str>,
        #[case] body: Option<&str>,
        #[case] id: i32,
    ) {
        let selector = DepartmentSelector::resolve(path, body).expect("selector");
        assert_eq!(selector.id(), id);
    }

    #[rstest]
    fn missing_selector_lists_usage_examples() {
        let error = DepartmentSelector::resolve(None, None).expect_err("missing");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("details");
        assert!(details["examples"]["url_param"].is_string());
    }

    #[rstest]
    fn non_numeric_selector_is_rejected() {
        let error = DepartmentSelector::resolve(Some("abc"), None).expect_err("non numeric");
        assert_eq!(error.message(), "ID отдела должен быть числом");
    }
}
