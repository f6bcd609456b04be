//! Hiring command.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::{full_name, raw_text};
use crate::domain::validation::{
    AgePolicy, ChainMode, DateFormat, DateLabels, DateRule, DecimalRule, IntegerRule,
    RequestValidator, ValidationReport, identity,
};

const FINISH_LABELS: DateLabels = DateLabels {
    required: "Год окончания обязателен",
    invalid: "Некорректная дата окончания",
    future: "Дата окончания не может быть в будущем",
};

const HIRE_LABELS: DateLabels = DateLabels {
    required: "Дата приема обязательна",
    invalid: "Некорректная дата приема",
    future: "Дата приема не может быть в будущем",
};

/// Raw body of a hiring request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewEmployeeDraft {
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "EMP-0042")]
    pub personal_number: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Петрович")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иван")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Иванов")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "15.05.1990")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "4510123456")]
    pub passport: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "771234567890")]
    pub inn: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "123-456-789 01")]
    pub snils: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "79161234567")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "1")]
    pub department_id: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "2")]
    pub position_id: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "Высшее")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>)]
    pub diplom_num: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "2012-06-30")]
    pub finish_year: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "2024-01-15")]
    pub hire_date: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "85000")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "raw_text")]
    #[schema(value_type = Option<String>, example = "90")]
    pub probation_period: Option<String>,
}

/// A validated hire, ready for the `add_employee` routine.
///
/// Field order matches the routine's parameter order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub personal_number: String,
    pub middle_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub passport: String,
    pub inn: String,
    pub snils: String,
    pub address: Option<String>,
    pub phone_number: String,
    pub department_id: i32,
    pub position_id: i32,
    pub education: String,
    pub diploma_number: Option<String>,
    pub finish_date: NaiveDate,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub probation_period: i32,
}

impl NewEmployee {
    pub fn validate(draft: &NewEmployeeDraft, today: NaiveDate) -> Result<Self, ValidationReport> {
        let mut v = RequestValidator::new();
        let personal_number = v.check(
            &identity::personal_number(),
            draft.personal_number.as_deref(),
        );
        let middle_name = v.check(
            &identity::middle_name_optional(),
            draft.middle_name.as_deref(),
        );
        let first_name = v.check(
            &identity::first_name(ChainMode::CollectAll),
            draft.first_name.as_deref(),
        );
        let last_name = v.check(
            &identity::last_name(ChainMode::CollectAll),
            draft.last_name.as_deref(),
        );
        let birth_date = v.check(
            &DateRule::birth_date(DateFormat::DAY_FIRST, AgePolicy::HIRING, today),
            draft.birth_date.as_deref(),
        );
        let passport = v.check(&identity::passport(), draft.passport.as_deref());
        let inn = v.check(&identity::inn(), draft.inn.as_deref());
        let snils = v.check(&identity::snils(), draft.snils.as_deref());
        let address = v.check(&identity::address(), draft.address.as_deref());
        let phone_number = v.check(&identity::phone(), draft.phone_number.as_deref());
        let department_id = v.check(
            &IntegerRule::identifier("department_id", "ID отдела"),
            draft.department_id.as_deref(),
        );
        let position_id = v.check(
            &IntegerRule::identifier("position_id", "ID должности"),
            draft.position_id.as_deref(),
        );
        let education = v.check(&identity::education(), draft.education.as_deref());
        let diploma_number = v.check(&identity::diploma_number(), draft.diplom_num.as_deref());
        let finish_date = v.check(
            &DateRule::past("finish_year", DateFormat::YEAR_FIRST, FINISH_LABELS, today),
            draft.finish_year.as_deref(),
        );
        let hire_date = v.check(
            &DateRule::past("hire_date", DateFormat::YEAR_FIRST, HIRE_LABELS, today),
            draft.hire_date.as_deref(),
        );
        let salary = v.check(
            &DecimalRule::non_negative(
                "salary",
                "Зарплата обязательна",
                "Зарплата должна быть положительным числом",
            ),
            draft.salary.as_deref(),
        );
        let probation_period = v.check(
            &IntegerRule::bounded(
                "probation_period",
                0,
                365,
                "Испытательный срок должен быть от 0 до 365 дней",
            )
            .required_message("Испытательный срок обязателен"),
            draft.probation_period.as_deref(),
        );

        v.finish(|| {
            Some(Self {
                personal_number: personal_number??,
                middle_name: middle_name?,
                first_name: first_name??,
                last_name: last_name??,
                birth_date: birth_date?,
                passport: passport??,
                inn: inn??,
                snils: snils??,
                address: address?,
                phone_number: phone_number??,
                department_id: i32::try_from(department_id?).ok()?,
                position_id: i32::try_from(position_id?).ok()?,
                education: education??,
                diploma_number: diploma_number?,
                finish_date: finish_date?,
                hire_date: hire_date?,
                salary: salary?,
                probation_period: i32::try_from(probation_period?).ok()?,
            })
        })
    }

    /// `last first middle`, without a trailing space when there is no
    /// patronymic.
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(
            &self.last_name,
            &self.first_name,
            self.middle_name.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).expect("fixture date")
    }

    #[fixture]
    fn draft() -> NewEmployeeDraft {
        NewEmployeeDraft {
            personal_number: Some("EMP-0042".into()),
            middle_name: Some("Петрович".into()),
            first_name: Some("Иван".into()),
            last_name: Some("Иванов".into()),
            birth_date: Some("15.05.1990".into()),
            passport: Some("4510123456".into()),
            inn: Some("771234567890".into()),
            snils: Some("123-456-789 01".into()),
            address: None,
            phone_number: Some("79161234567".into()),
            department_id: Some("1".into()),
            position_id: Some("2".into()),
            education: Some("Высшее".into()),
            diplom_num: None,
            finish_year: Some("2012-06-30".into()),
            hire_date: Some("2024/01/15".into()),
            salary: Some("85000.50".into()),
            probation_period: Some("90".into()),
        }
    }

    #[rstest]
    fn accepts_complete_hire(draft: NewEmployeeDraft, today: NaiveDate) {
        let hire = NewEmployee::validate(&draft, today).expect("valid hire");
        assert_eq!(hire.department_id, 1);
        assert_eq!(
            hire.birth_date,
            NaiveDate::from_ymd_opt(1990, 5, 15).expect("date")
        );
        assert_eq!(
            hire.hire_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")
        );
        assert_eq!(hire.full_name(), "Иванов Иван Петрович");
        assert!((hire.salary - 85_000.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn blank_patronymic_is_omitted(mut draft: NewEmployeeDraft, today: NaiveDate) {
        draft.middle_name = Some("  ".into());
        let hire = NewEmployee::validate(&draft, today).expect("valid hire");
        assert_eq!(hire.middle_name, None);
        assert_eq!(hire.full_name(), "Иванов Иван");
    }

    #[rstest]
    #[case("15.03.2008", true)]
    #[case("16.03.2008", false)]
    #[case("16.03.1961", true)]
    #[case("15.03.1961", false)]
    fn hiring_age_is_eighteen_to_below_sixty_five(
        mut draft: NewEmployeeDraft,
        today: NaiveDate,
        #[case] birth: &str,
        #[case] accepted: bool,
    ) {
        draft.birth_date = Some(birth.into());
        assert_eq!(NewEmployee::validate(&draft, today).is_ok(), accepted, "{birth}");
    }

    #[rstest]
    fn rejects_iso_birth_date(mut draft: NewEmployeeDraft, today: NaiveDate) {
        draft.birth_date = Some("1990-05-15".into());
        let report = NewEmployee::validate(&draft, today).expect_err("year first");
        assert!(report.first_for("birth_date").is_some());
    }

    #[rstest]
    fn future_hire_date_is_rejected(mut draft: NewEmployeeDraft, today: NaiveDate) {
        draft.hire_date = Some("2026-03-16".into());
        let report = NewEmployee::validate(&draft, today).expect_err("future");
        let error = report.first_for("hire_date").expect("hire date error");
        assert_eq!(error.message(), "Дата приема не может быть в будущем");
    }

    #[rstest]
    fn collects_failures_across_fields(mut draft: NewEmployeeDraft, today: NaiveDate) {
        draft.passport = Some("12".into());
        draft.phone_number = Some("89161234567".into());
        draft.probation_period = Some("400".into());
        let report = NewEmployee::validate(&draft, today).expect_err("invalid");
        let fields: Vec<_> = report.errors().iter().map(|error| error.field()).collect();
        assert!(fields.contains(&"passport"));
        assert!(fields.contains(&"phone_number"));
        assert_eq!(fields.last(), Some(&"probation_period"));
    }

    #[rstest]
    fn numbers_sent_as_json_numbers_validate(today: NaiveDate) {
        let body = serde_json::json!({
            "personal_number": "EMP-0042",
            "first_name": "Иван",
            "last_name": "Иванов",
            "birth_date": "15.05.1990",
            "passport": "4510123456",
            "inn": "771234567890",
            "snils": "12345678901",
            "phone_number": "79161234567",
            "department_id": 3,
            "position_id": 4,
            "education": "Среднее",
            "finish_year": "2008.06.30",
            "hire_date": "2025-09-01",
            "salary": 50000,
            "probation_period": 0
        });
        let draft: NewEmployeeDraft = serde_json::from_value(body).expect("draft");
        let hire = NewEmployee::validate(&draft, today).expect("valid hire");
        assert_eq!((hire.department_id, hire.position_id), (3, 4));
        assert_eq!(hire.probation_period, 0);
    }
}
