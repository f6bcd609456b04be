//! Typed commands built from raw request payloads.
//!
//! Each request arrives as a *draft*: every field is an optional raw string,
//! whatever JSON scalar the client sent. `validate` runs the field rules for
//! the endpoint and either yields the command or the full
//! [`ValidationReport`](crate::domain::validation::ValidationReport).

mod filters;
mod hiring;
mod lookup;
mod removal;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use filters::{BirthdayFilter, BirthdayFilterDraft, GradeFilter, GradeFilterDraft};
pub use hiring::{NewEmployee, NewEmployeeDraft};
pub use lookup::{
    DepartmentSelector, DepartmentSelectorDraft, EmployeeLookup, EmployeeLookupDraft,
    SalaryLookup, SalaryLookupDraft,
};
pub use removal::{
    DepartmentRemoval, DepartmentRemovalDraft, Dismissal, DismissalDraft, SalaryRaiseDraft,
};

/// Deserialise any JSON scalar as its textual form.
///
/// Numbers and booleans become their JSON text so `"department_id": 3` and
/// `"department_id": "3"` validate identically. `null` and absent fields map
/// to `None`.
pub(crate) fn raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Join name parts the way the registry prints them: `last first middle`.
#[must_use]
pub fn full_name(last: &str, first: &str, middle: Option<&str>) -> String {
    format!("{last} {first} {}", middle.unwrap_or_default())
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "raw_text")]
        value: Option<String>,
    }

    #[rstest]
    #[case(json!({"value": "abc"}), Some("abc"))]
    #[case(json!({"value": 42}), Some("42"))]
    #[case(json!({"value": 4.5}), Some("4.5"))]
    #[case(json!({"value": true}), Some("true"))]
    #[case(json!({"value": null}), None)]
    #[case(json!({}), None)]
    fn raw_text_accepts_any_scalar(#[case] body: Value, #[case] expected: Option<&str>) {
        let wrapper: Wrapper = serde_json::from_value(body).expect("wrapper");
        assert_eq!(wrapper.value.as_deref(), expected);
    }

    #[rstest]
    #[case("Иванов", "Иван", Some("Иванович"), "Иванов Иван Иванович")]
    #[case("Иванов", "Иван", None, "Иванов Иван")]
    fn full_name_omits_missing_patronymic(
        #[case] last: &str,
        #[case] first: &str,
        #[case] middle: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(full_name(last, first, middle), expected);
    }
}
