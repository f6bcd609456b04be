//! Rules for personal names and identity documents.

use std::sync::OnceLock;

use regex::Regex;

use super::rules::{ChainMode, Normalise, TextRule};

const MARKUP_CHARS: &[char] = &['<', '>', '{', '}'];

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("pattern {pattern} failed to compile: {error}"))
    })
}

fn cyrillic_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[А-Яа-яЁё -]+$")
}

fn digits_10() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^\d{10}$")
}

fn digits_12() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^\d{12}$")
}

fn snils_layout() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^(\d{3}-\d{3}-\d{3} \d{2}|\d{11})$")
}

fn phone_layout() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^7\d{10}$")
}

fn name_rule(rule: TextRule, subject: &str, mode: ChainMode) -> TextRule {
    rule.mode(mode)
        .length(
            2,
            50,
            format!("{subject} должно содержать от 2 до 50 символов"),
        )
        .pattern(
            cyrillic_name(),
            format!("{subject} должно содержать только русские буквы, пробелы и дефисы"),
        )
}

#[must_use]
pub fn first_name(mode: ChainMode) -> TextRule {
    name_rule(
        TextRule::required("first_name", "Имя обязательно"),
        "Имя",
        mode,
    )
}

#[must_use]
pub fn last_name(mode: ChainMode) -> TextRule {
    name_rule(
        TextRule::required("last_name", "Фамилия обязательна"),
        "Поле фамилии",
        mode,
    )
}

/// Patronymic where the lookup cannot proceed without it.
#[must_use]
pub fn middle_name_required(mode: ChainMode) -> TextRule {
    name_rule(
        TextRule::required("middle_name", "Отчество обязательно"),
        "Отчество",
        mode,
    )
}

/// Patronymic on forms where it may be omitted.
#[must_use]
pub fn middle_name_optional() -> TextRule {
    TextRule::optional("middle_name")
        .mode(ChainMode::StopAtFirst)
        .length(1, 50, "Отчество не должно превышать 50 символов")
        .pattern(
            cyrillic_name(),
            "Отчество должно содержать только русские буквы, пробелы и дефисы",
        )
}

#[must_use]
pub fn personal_number() -> TextRule {
    TextRule::required("personal_number", "Табельный номер обязателен")
        .normalise(Normalise::Keep)
        .length(
            3,
            20,
            "Табельный номер должен содержать от 3 до 20 символов",
        )
}

#[must_use]
pub fn passport() -> TextRule {
    TextRule::required("passport", "Паспорт обязателен")
        .normalise(Normalise::Keep)
        .length(10, 10, "Паспорт должен содержать ровно 10 символов")
        .pattern(digits_10(), "Паспорт должен содержать только цифры")
}

#[must_use]
pub fn inn() -> TextRule {
    TextRule::required("inn", "ИНН обязателен")
        .normalise(Normalise::Keep)
        .length(12, 12, "ИНН должен содержать ровно 12 символов")
        .pattern(digits_12(), "ИНН должен содержать только цифры")
}

#[must_use]
pub fn snils() -> TextRule {
    TextRule::required("snils", "СНИЛС обязателен")
        .normalise(Normalise::Keep)
        .length(11, 14, "СНИЛС должен содержать от 11 до 14 символов")
        .pattern(
            snils_layout(),
            "СНИЛС должен быть в формате XXX-XXX-XXX XX или 11 цифр",
        )
}

#[must_use]
pub fn phone() -> TextRule {
    TextRule::required("phone_number", "Телефон обязателен")
        .normalise(Normalise::Keep)
        .pattern(
            phone_layout(),
            "Телефон должен начинаться с 7 и содержать 11 цифр",
        )
}

#[must_use]
pub fn address() -> TextRule {
    TextRule::optional("address").length(1, 100, "Адрес не должен превышать 100 символов")
}

#[must_use]
pub fn education() -> TextRule {
    TextRule::required("education", "Образование обязательно")
        .length(1, 100, "Образование не должно превышать 100 символов")
}

#[must_use]
pub fn diploma_number() -> TextRule {
    TextRule::optional("diplom_num").length(1, 50, "Номер диплома не должен превышать 50 символов")
}

#[must_use]
pub fn department_name() -> TextRule {
    TextRule::required("department_name", "Название отдела обязательно")
        .length(
            2,
            100,
            "Название отдела должно содержать от 2 до 100 символов",
        )
}

#[must_use]
pub fn position_name() -> TextRule {
    TextRule::required("position_name", "Название должности обязательно")
        .length(
            2,
            100,
            "Название должности должно содержать от 2 до 100 символов",
        )
}

/// Dismissal reason: 5 to 500 characters once trimmed, at least two words,
/// no markup. The accepted value has its whitespace collapsed.
#[must_use]
pub fn dismissal_reason() -> TextRule {
    TextRule::required("reason", "Причина увольнения обязательна")
        .normalise(Normalise::CollapseWhitespace)
        .length(
            5,
            500,
            "Причина увольнения должна содержать от 5 до 500 символов",
        )
        .forbid(MARKUP_CHARS, "Причина содержит недопустимые символы")
        .min_words(2, "Причина увольнения должна содержать минимум 2 слова")
}

/// Department removal reason: 5 to 100 characters once trimmed, no markup.
#[must_use]
pub fn removal_reason() -> TextRule {
    TextRule::required("reason", "Причина удаления обязательна")
        .normalise(Normalise::CollapseWhitespace)
        .length(5, 100, "Причина должна содержать от 5 до 100 символов")
        .forbid(MARKUP_CHARS, "Причина содержит недопустимые символы")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldRule;
    use rstest::rstest;

    #[rstest]
    #[case("Иван", true)]
    #[case("  Анна-Мария ", true)]
    #[case("Пётр", true)]
    #[case("Ёж", true)]
    #[case("И", false)]
    #[case("Ivan", false)]
    #[case("Иван1", false)]
    #[case("", false)]
    fn first_names_are_cyrillic(#[case] raw: &str, #[case] accepted: bool) {
        let rule = first_name(ChainMode::CollectAll);
        assert_eq!(rule.apply(Some(raw)).is_ok(), accepted, "{raw}");
    }

    #[rstest]
    fn name_is_trimmed_before_binding() {
        let rule = first_name(ChainMode::CollectAll);
        let value = rule.apply(Some("  Анна ")).expect("valid");
        assert_eq!(value.as_deref(), Some("Анна"));
    }

    #[rstest]
    fn collect_all_name_reports_length_and_alphabet() {
        let collect_all = last_name(ChainMode::CollectAll);
        let failures = collect_all.apply(Some("J")).expect_err("invalid");
        assert_eq!(failures.len(), 2);
        let stop_at_first = last_name(ChainMode::StopAtFirst);
        let failures = stop_at_first.apply(Some("J")).expect_err("invalid");
        assert_eq!(failures.len(), 1);
    }

    #[rstest]
    #[case("1234567890", true)]
    #[case("123456789", false)]
    #[case("12345678901", false)]
    #[case("12345abcde", false)]
    #[case(" 4510123456 ", false)]
    #[case("4510123456 ", false)]
    fn passport_is_ten_digits(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(passport().apply(Some(raw)).is_ok(), accepted);
    }

    #[rstest]
    #[case("123456789012", true)]
    #[case("12345678901", false)]
    #[case("12345678901a", false)]
    #[case(" 123456789012", false)]
    fn inn_is_twelve_digits(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(inn().apply(Some(raw)).is_ok(), accepted);
    }

    #[rstest]
    #[case("123-456-789 01", true)]
    #[case("12345678901", true)]
    #[case("123-456-78901", false)]
    #[case("1234567890", false)]
    #[case("123 456 789 01", false)]
    #[case("12345678901 ", false)]
    fn snils_accepts_both_layouts(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(snils().apply(Some(raw)).is_ok(), accepted);
    }

    #[rstest]
    #[case("79161234567", true)]
    #[case("89161234567", false)]
    #[case("+79161234567", false)]
    #[case("7916123456", false)]
    #[case(" 79161234567", false)]
    fn phone_starts_with_seven(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(phone().apply(Some(raw)).is_ok(), accepted);
    }

    #[rstest]
    #[case("по собственному желанию", true)]
    #[case("сокращение", false)]
    #[case("по {желанию}", false)]
    #[case("ок", false)]
    fn dismissal_reason_rules(#[case] raw: &str, #[case] accepted: bool) {
        let outcome = dismissal_reason().apply(Some(raw));
        assert_eq!(outcome.is_ok(), accepted, "{raw}");
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("Петровна"), true)]
    #[case(Some("Petrovna"), false)]
    fn optional_middle_name(#[case] raw: Option<&str>, #[case] accepted: bool) {
        assert_eq!(middle_name_optional().apply(raw).is_ok(), accepted);
    }

    #[rstest]
    #[case(" реорганизация \t  компании ", "реорганизация компании")]
    #[case("а      б", "а б")]
    fn removal_reason_is_collapsed(#[case] raw: &str, #[case] expected: &str) {
        let value = removal_reason().apply(Some(raw)).expect("valid");
        assert_eq!(value.as_deref(), Some(expected));
    }

    #[rstest]
    #[case("EMP-0100", true)]
    #[case(" EMP-0100 ", false)]
    fn personal_number_is_bound_as_given(#[case] raw: &str, #[case] accepted: bool) {
        let value = personal_number().apply(Some(raw));
        assert_eq!(value.is_ok(), accepted, "{raw:?}");
        if accepted {
            assert_eq!(value.expect("valid").as_deref(), Some(raw));
        }
    }

    #[rstest]
    fn removal_reason_allows_single_word() {
        assert!(removal_reason().apply(Some("реорганизация")).is_ok());
        assert!(removal_reason().apply(Some(&"а".repeat(101))).is_err());
    }
}
