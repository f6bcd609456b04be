//! Generic field rules: free text, integers and decimals.

use regex::Regex;

use super::{FieldName, FieldRule};

/// How a rule proceeds after one of its own checks fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainMode {
    /// Run every check and report each failure.
    CollectAll,
    /// Report only the first failing check.
    StopAtFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required(&'static str),
    Optional,
}

/// Whitespace handling around the checks of a [`TextRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalise {
    /// Checks see the raw value, which is also the output.
    Keep,
    Trim,
    /// Checks see the trimmed value; the accepted value has its whitespace
    /// runs collapsed to single spaces.
    CollapseWhitespace,
}

#[derive(Debug, Clone)]
enum TextCheck {
    Length {
        min: usize,
        max: usize,
        message: String,
    },
    Pattern {
        regex: &'static Regex,
        message: String,
    },
    Forbidden {
        chars: &'static [char],
        message: String,
    },
    MinWords {
        count: usize,
        message: String,
    },
}

impl TextCheck {
    fn run(&self, value: &str) -> Result<(), String> {
        let passed = match self {
            Self::Length { min, max, .. } => {
                let length = value.chars().count();
                (*min..=*max).contains(&length)
            }
            Self::Pattern { regex, .. } => regex.is_match(value),
            Self::Forbidden { chars, .. } => !value.chars().any(|c| chars.contains(&c)),
            Self::MinWords { count, .. } => value.split_whitespace().count() >= *count,
        };
        if passed {
            Ok(())
        } else {
            Err(self.message().to_owned())
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Length { message, .. }
            | Self::Pattern { message, .. }
            | Self::Forbidden { message, .. }
            | Self::MinWords { message, .. } => message,
        }
    }
}

/// Rule for a text field.
///
/// The output is `None` only for an optional field that was absent or blank.
///
/// # Examples
/// ```
/// use personnel::domain::validation::{FieldRule, TextRule};
///
/// let rule = TextRule::required("education", "Образование обязательно")
///     .length(1, 100, "Образование не должно превышать 100 символов");
/// assert_eq!(rule.apply(Some("  высшее ")), Ok(Some("высшее".to_owned())));
/// assert!(rule.apply(Some("   ")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TextRule {
    field: FieldName,
    presence: Presence,
    mode: ChainMode,
    normalise: Normalise,
    checks: Vec<TextCheck>,
}

impl TextRule {
    #[must_use]
    pub fn required(field: &'static str, message: &'static str) -> Self {
        Self::with_presence(field, Presence::Required(message))
    }

    #[must_use]
    pub fn optional(field: &'static str) -> Self {
        Self::with_presence(field, Presence::Optional)
    }

    fn with_presence(field: &'static str, presence: Presence) -> Self {
        Self {
            field: FieldName::new(field),
            presence,
            mode: ChainMode::CollectAll,
            normalise: Normalise::Trim,
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: ChainMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn normalise(mut self, normalise: Normalise) -> Self {
        self.normalise = normalise;
        self
    }

    /// Require a character count within `min..=max`.
    #[must_use]
    pub fn length(mut self, min: usize, max: usize, message: impl Into<String>) -> Self {
        self.checks.push(TextCheck::Length {
            min,
            max,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn pattern(mut self, regex: &'static Regex, message: impl Into<String>) -> Self {
        self.checks.push(TextCheck::Pattern {
            regex,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn forbid(mut self, chars: &'static [char], message: impl Into<String>) -> Self {
        self.checks.push(TextCheck::Forbidden {
            chars,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn min_words(mut self, count: usize, message: impl Into<String>) -> Self {
        self.checks.push(TextCheck::MinWords {
            count,
            message: message.into(),
        });
        self
    }

    fn checked<'a>(&self, raw: &'a str) -> &'a str {
        match self.normalise {
            Normalise::Keep => raw,
            Normalise::Trim | Normalise::CollapseWhitespace => raw.trim(),
        }
    }

    fn accepted(&self, value: &str) -> String {
        match self.normalise {
            Normalise::Keep | Normalise::Trim => value.to_owned(),
            Normalise::CollapseWhitespace => collapse_whitespace(value),
        }
    }
}

impl FieldRule for TextRule {
    type Output = Option<String>;

    fn field(&self) -> FieldName {
        self.field
    }

    fn apply(&self, raw: Option<&str>) -> Result<Self::Output, Vec<String>> {
        let value = raw.map(|text| self.checked(text)).unwrap_or_default();
        if value.trim().is_empty() {
            return match self.presence {
                Presence::Required(message) => Err(vec![message.to_owned()]),
                Presence::Optional => Ok(None),
            };
        }

        let mut failures = Vec::new();
        for check in &self.checks {
            if let Err(message) = check.run(value) {
                failures.push(message);
                if self.mode == ChainMode::StopAtFirst {
                    break;
                }
            }
        }

        if failures.is_empty() {
            Ok(Some(self.accepted(value)))
        } else {
            Err(failures)
        }
    }
}

/// Trim and collapse internal whitespace runs to single spaces.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rule for an integer field with inclusive bounds.
#[derive(Debug, Clone)]
pub struct IntegerRule {
    field: FieldName,
    required_message: String,
    min: i64,
    max: Option<i64>,
    message: String,
}

impl IntegerRule {
    /// A positive database identifier.
    #[must_use]
    pub fn identifier(field: &'static str, label: &str) -> Self {
        Self {
            field: FieldName::new(field),
            required_message: format!("{label} обязателен"),
            min: 1,
            max: Some(i64::from(i32::MAX)),
            message: format!("{label} должен быть положительным целым числом"),
        }
    }

    #[must_use]
    pub fn bounded(field: &'static str, min: i64, max: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            field: FieldName::new(field),
            required_message: message.clone(),
            min,
            max: Some(max),
            message,
        }
    }

    #[must_use]
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }
}

impl FieldRule for IntegerRule {
    type Output = i64;

    fn field(&self) -> FieldName {
        self.field
    }

    fn apply(&self, raw: Option<&str>) -> Result<Self::Output, Vec<String>> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(vec![self.required_message.clone()]);
        }
        value
            .parse::<i64>()
            .ok()
            .filter(|number| *number >= self.min && self.max.is_none_or(|max| *number <= max))
            .ok_or_else(|| vec![self.message.clone()])
    }
}

/// Rule for a non-negative decimal amount.
#[derive(Debug, Clone)]
pub struct DecimalRule {
    field: FieldName,
    required_message: &'static str,
    message: &'static str,
}

impl DecimalRule {
    #[must_use]
    pub const fn non_negative(
        field: &'static str,
        required_message: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            field: FieldName::new(field),
            required_message,
            message,
        }
    }
}

impl FieldRule for DecimalRule {
    type Output = f64;

    fn field(&self) -> FieldName {
        self.field
    }

    fn apply(&self, raw: Option<&str>) -> Result<Self::Output, Vec<String>> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(vec![self.required_message.to_owned()]);
        }
        value
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or_else(|| vec![self.message.to_owned()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reason_rule() -> TextRule {
        TextRule::required("reason", "Причина обязательна")
            .normalise(Normalise::CollapseWhitespace)
            .length(5, 500, "Причина должна содержать от 5 до 500 символов")
            .forbid(&['<', '>', '{', '}'], "Недопустимые символы")
            .min_words(2, "Минимум два слова")
    }

    #[rstest]
    #[case("  по   собственному \n желанию ", "по собственному желанию")]
    #[case("а      б", "а б")]
    fn collapses_whitespace_after_checks(#[case] raw: &str, #[case] expected: &str) {
        let value = reason_rule().apply(Some(raw)).expect("valid");
        assert_eq!(value.as_deref(), Some(expected));
    }

    #[rstest]
    fn length_is_checked_on_the_trimmed_value() {
        let failures = reason_rule().apply(Some("  а б  ")).expect_err("too short");
        assert_eq!(
            failures,
            vec!["Причина должна содержать от 5 до 500 символов".to_owned()]
        );
    }

    #[rstest]
    #[case(" 4510123456 ", false)]
    #[case("4510123456", true)]
    #[case("   ", false)]
    fn keep_checks_the_raw_value(#[case] raw: &str, #[case] accepted: bool) {
        let rule = TextRule::required("passport", "Паспорт обязателен")
            .normalise(Normalise::Keep)
            .length(10, 10, "Ровно 10 символов");
        assert_eq!(rule.apply(Some(raw)).is_ok(), accepted, "{raw:?}");
    }

    #[rstest]
    fn collect_all_reports_each_failure() {
        let failures = reason_rule().apply(Some("<a>")).expect_err("invalid");
        assert_eq!(failures.len(), 3);
    }

    #[rstest]
    fn stop_at_first_reports_one_failure() {
        let failures = reason_rule()
            .mode(ChainMode::StopAtFirst)
            .apply(Some("<a>"))
            .expect_err("invalid");
        assert_eq!(
            failures,
            vec!["Причина должна содержать от 5 до 500 символов".to_owned()]
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn optional_text_accepts_blank(#[case] raw: Option<&str>) {
        let rule = TextRule::optional("address").length(1, 100, "Слишком длинный адрес");
        assert_eq!(rule.apply(raw), Ok(None));
    }

    #[rstest]
    #[case("5", Ok(5))]
    #[case(" 12 ", Ok(12))]
    #[case("0", Err(()))]
    #[case("-3", Err(()))]
    #[case("2.5", Err(()))]
    #[case("abc", Err(()))]
    fn identifiers_must_be_positive_integers(#[case] raw: &str, #[case] expected: Result<i64, ()>) {
        let rule = IntegerRule::identifier("position_id", "ID должности");
        assert_eq!(rule.apply(Some(raw)).map_err(|_| ()), expected);
    }

    #[rstest]
    fn bounded_integer_rejects_out_of_range() {
        let rule = IntegerRule::bounded("probation_period", 0, 365, "От 0 до 365 дней");
        assert!(rule.apply(Some("365")).is_ok());
        assert!(rule.apply(Some("366")).is_err());
    }

    #[rstest]
    #[case("45000.50", true)]
    #[case("0", true)]
    #[case("-1", false)]
    #[case("много", false)]
    #[case("NaN", false)]
    fn decimal_amounts_must_be_non_negative(#[case] raw: &str, #[case] accepted: bool) {
        let rule = DecimalRule::non_negative(
            "salary",
            "Оклад обязателен",
            "Оклад должен быть неотрицательным числом",
        );
        assert_eq!(rule.apply(Some(raw)).is_ok(), accepted);
    }
}
