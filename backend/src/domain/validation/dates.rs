//! Calendar date validation and age arithmetic.
//!
//! Endpoints disagree on the accepted date layout, so the layout is a
//! [`DateFormat`] chosen at each call site rather than a single pattern.

use chrono::{Datelike, NaiveDate};

use super::{FieldName, FieldRule};

/// Position of the year within the date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// `YYYY?MM?DD`
    YearMonthDay,
    /// `DD?MM?YYYY`
    DayMonthYear,
}

/// Accepted textual layout of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    order: FieldOrder,
    separators: &'static [char],
}

impl DateFormat {
    /// `YYYY-MM-DD` only.
    pub const ISO: Self = Self::new(FieldOrder::YearMonthDay, &['-']);
    /// `YYYY-MM-DD`, `YYYY.MM.DD` or `YYYY/MM/DD`.
    pub const YEAR_FIRST: Self = Self::new(FieldOrder::YearMonthDay, &['-', '.', '/']);
    /// `DD.MM.YYYY`, `DD/MM/YYYY` or `DD-MM-YYYY`.
    pub const DAY_FIRST: Self = Self::new(FieldOrder::DayMonthYear, &['.', '/', '-']);

    #[must_use]
    pub const fn new(order: FieldOrder, separators: &'static [char]) -> Self {
        Self { order, separators }
    }

    /// Human-readable layout used in messages, e.g. `ГГГГ-ММ-ДД`.
    #[must_use]
    pub fn describe(&self) -> String {
        let separator = self.separators.first().copied().unwrap_or('-');
        match self.order {
            FieldOrder::YearMonthDay => format!("ГГГГ{separator}ММ{separator}ДД"),
            FieldOrder::DayMonthYear => format!("ДД{separator}ММ{separator}ГГГГ"),
        }
    }

    /// Split `raw` into numeric parts when it matches the layout.
    fn split(&self, raw: &str) -> Option<DateParts> {
        let parts: Vec<&str> = raw.split(|c| self.separators.contains(&c)).collect();
        let [first, second, third] = parts.as_slice() else {
            return None;
        };
        let (year, month, day) = match self.order {
            FieldOrder::YearMonthDay => (*first, *second, *third),
            FieldOrder::DayMonthYear => (*third, *second, *first),
        };
        if !(digits_of_len(year, 4) && digits_of_len(month, 2) && digits_of_len(day, 2)) {
            return None;
        }
        Some(DateParts {
            year: year.parse().ok()?,
            month: month.parse().ok()?,
            day: day.parse().ok()?,
        })
    }
}

fn digits_of_len(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
}

/// Upper bound on an accepted age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeLimit {
    /// Age must not exceed the value.
    AtMost(i32),
    /// Age must be strictly below the value.
    Below(i32),
}

/// Inclusive minimum age plus an upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    min: i32,
    max: AgeLimit,
}

impl AgePolicy {
    /// Lookups of existing staff records.
    pub const STAFF_LOOKUP: Self = Self::new(14, AgeLimit::AtMost(100));
    /// Payroll calculations, which only apply to adults.
    pub const PAYROLL: Self = Self::new(18, AgeLimit::AtMost(100));
    /// Hiring: adults below retirement age.
    pub const HIRING: Self = Self::new(18, AgeLimit::Below(65));

    #[must_use]
    pub const fn new(min: i32, max: AgeLimit) -> Self {
        Self { min, max }
    }

    fn check(&self, age: i32) -> Result<(), String> {
        if age < self.min {
            return Err(format!("Возраст должен быть не менее {} лет", self.min));
        }
        match self.max {
            AgeLimit::AtMost(limit) if age > limit => {
                Err(format!("Возраст не может превышать {limit} лет"))
            }
            AgeLimit::Below(limit) if age >= limit => {
                Err(format!("Возраст должен быть меньше {limit} лет"))
            }
            _ => Ok(()),
        }
    }
}

/// Whole years between `birth` and `today`.
///
/// One year is subtracted when today's month and day precede the birth
/// month and day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use personnel::domain::validation::age_on;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 6, 15).expect("date");
/// let today = NaiveDate::from_ymd_opt(2026, 6, 14).expect("date");
/// assert_eq!(age_on(birth, today), 25);
/// ```
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Messages naming the date in each failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLabels {
    pub required: &'static str,
    pub invalid: &'static str,
    pub future: &'static str,
}

impl DateLabels {
    pub const BIRTH: Self = Self {
        required: "Дата рождения обязательна",
        invalid: "Некорректная дата рождения",
        future: "Дата рождения не может быть в будущем",
    };
}

/// Rule for a calendar date that may not lie in the future.
///
/// Checks run in order and stop at the first failure: presence, layout,
/// month and day ranges, month length, calendar round trip, future date
/// and, when an [`AgePolicy`] is set, the age bounds.
#[derive(Debug, Clone)]
pub struct DateRule {
    field: FieldName,
    format: DateFormat,
    labels: DateLabels,
    age: Option<AgePolicy>,
    today: NaiveDate,
}

impl DateRule {
    /// Birth date validated against an age policy.
    #[must_use]
    pub const fn birth_date(format: DateFormat, policy: AgePolicy, today: NaiveDate) -> Self {
        Self {
            field: FieldName::new("birth_date"),
            format,
            labels: DateLabels::BIRTH,
            age: Some(policy),
            today,
        }
    }

    /// Any past date such as a hire date.
    #[must_use]
    pub const fn past(
        field: &'static str,
        format: DateFormat,
        labels: DateLabels,
        today: NaiveDate,
    ) -> Self {
        Self {
            field: FieldName::new(field),
            format,
            labels,
            age: None,
            today,
        }
    }

    fn validate(&self, raw: &str) -> Result<NaiveDate, String> {
        let parts = self.format.split(raw).ok_or_else(|| {
            format!("Дата должна быть в формате {}", self.format.describe())
        })?;

        if !(1..=12).contains(&parts.month) {
            return Err("Месяц должен быть от 01 до 12".to_owned());
        }
        if !(1..=31).contains(&parts.day) {
            return Err("День должен быть от 01 до 31".to_owned());
        }
        let month_length = days_in_month(parts.year, parts.month);
        if parts.day > month_length {
            return Err(format!("В указанном месяце только {month_length} дней"));
        }

        let date = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
            .filter(|date| {
                date.year() == parts.year && date.month() == parts.month && date.day() == parts.day
            })
            .ok_or_else(|| self.labels.invalid.to_owned())?;

        if date > self.today {
            return Err(self.labels.future.to_owned());
        }
        if let Some(policy) = &self.age {
            policy.check(age_on(date, self.today))?;
        }
        Ok(date)
    }
}

impl FieldRule for DateRule {
    type Output = NaiveDate;

    fn field(&self) -> FieldName {
        self.field
    }

    fn apply(&self, raw: Option<&str>) -> Result<Self::Output, Vec<String>> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(vec![self.labels.required.to_owned()]);
        }
        self.validate(value).map_err(|message| vec![message])
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

    fn birth(format: DateFormat, policy: AgePolicy, today: NaiveDate) -> DateRule {
        DateRule::birth_date(format, policy, today)
    }

    fn message(rule: &DateRule, raw: &str) -> String {
        rule.apply(Some(raw))
            .expect_err("rejected")
            .into_iter()
            .next()
            .expect("one message")
    }

    #[rstest]
    #[case(DateFormat::ISO, AgePolicy::STAFF_LOOKUP, "2026-03-16")]
    #[case(DateFormat::ISO, AgePolicy::PAYROLL, "2030-01-01")]
    #[case(DateFormat::DAY_FIRST, AgePolicy::HIRING, "16.03.2026")]
    fn future_dates_rejected_for_every_variant(
        today: NaiveDate,
        #[case] format: DateFormat,
        #[case] policy: AgePolicy,
        #[case] raw: &str,
    ) {
        let rule = birth(format, policy, today);
        assert_eq!(message(&rule, raw), "Дата рождения не может быть в будущем");
    }

    #[rstest]
    #[case(AgePolicy::STAFF_LOOKUP, "2012-03-15", true)]
    #[case(AgePolicy::STAFF_LOOKUP, "2012-03-16", false)]
    #[case(AgePolicy::STAFF_LOOKUP, "1926-03-15", true)]
    #[case(AgePolicy::STAFF_LOOKUP, "1925-03-15", false)]
    #[case(AgePolicy::PAYROLL, "2008-03-15", true)]
    #[case(AgePolicy::PAYROLL, "2008-03-16", false)]
    fn age_bounds_are_inclusive_at_the_boundary(
        today: NaiveDate,
        #[case] policy: AgePolicy,
        #[case] raw: &str,
        #[case] accepted: bool,
    ) {
        let rule = birth(DateFormat::ISO, policy, today);
        assert_eq!(rule.apply(Some(raw)).is_ok(), accepted, "{raw}");
    }

    #[rstest]
    #[case("16.03.1961", true)]
    #[case("15.03.1961", false)]
    #[case("15.03.2008", true)]
    fn hiring_requires_age_below_sixty_five(
        today: NaiveDate,
        #[case] raw: &str,
        #[case] accepted: bool,
    ) {
        let rule = birth(DateFormat::DAY_FIRST, AgePolicy::HIRING, today);
        assert_eq!(rule.apply(Some(raw)).is_ok(), accepted, "{raw}");
    }

    #[rstest]
    #[case("2000-02-29", true)]
    #[case("1900-02-29", false)]
    #[case("2001-02-29", false)]
    #[case("2000-04-31", false)]
    #[case("2000-02-31", false)]
    #[case("2000-02-30", false)]
    #[case("1996-02-30", false)]
    fn leap_days_and_short_months(today: NaiveDate, #[case] raw: &str, #[case] accepted: bool) {
        let rule = birth(DateFormat::ISO, AgePolicy::STAFF_LOOKUP, today);
        assert_eq!(rule.apply(Some(raw)).is_ok(), accepted, "{raw}");
    }

    #[rstest]
    fn short_month_message_names_month_length(today: NaiveDate) {
        let rule = birth(DateFormat::ISO, AgePolicy::STAFF_LOOKUP, today);
        assert_eq!(
            message(&rule, "1990-04-31"),
            "В указанном месяце только 30 дней"
        );
    }

    #[rstest]
    #[case("1990-13-01", "Месяц должен быть от 01 до 12")]
    #[case("1990-00-10", "Месяц должен быть от 01 до 12")]
    #[case("1990-01-32", "День должен быть от 01 до 31")]
    #[case("1990/01/01", "Дата должна быть в формате ГГГГ-ММ-ДД")]
    #[case("01-01-1990", "Дата должна быть в формате ГГГГ-ММ-ДД")]
    #[case("1990-1-01", "Дата должна быть в формате ГГГГ-ММ-ДД")]
    fn layout_and_range_checks_run_in_order(
        today: NaiveDate,
        #[case] raw: &str,
        #[case] expected: &str,
    ) {
        let rule = birth(DateFormat::ISO, AgePolicy::STAFF_LOOKUP, today);
        assert_eq!(message(&rule, raw), expected);
    }

    #[rstest]
    #[case(DateFormat::YEAR_FIRST, "1990.05.20")]
    #[case(DateFormat::YEAR_FIRST, "1990/05/20")]
    #[case(DateFormat::DAY_FIRST, "20/05/1990")]
    #[case(DateFormat::DAY_FIRST, "20-05-1990")]
    fn separators_follow_the_format(
        today: NaiveDate,
        #[case] format: DateFormat,
        #[case] raw: &str,
    ) {
        let rule = birth(format, AgePolicy::PAYROLL, today);
        assert_eq!(
            rule.apply(Some(raw)),
            Ok(NaiveDate::from_ymd_opt(1990, 5, 20).expect("date"))
        );
    }

    #[rstest]
    fn empty_value_is_required(today: NaiveDate) {
        let rule = birth(DateFormat::ISO, AgePolicy::PAYROLL, today);
        assert_eq!(
            rule.apply(Some("  ")),
            Err(vec!["Дата рождения обязательна".to_owned()])
        );
    }

    #[rstest]
    #[case((2000, 3, 15), 26)]
    #[case((2000, 3, 16), 25)]
    #[case((2000, 2, 29), 26)]
    fn age_counts_completed_years(
        today: NaiveDate,
        #[case] birth: (i32, u32, u32),
        #[case] age: i32,
    ) {
        let (year, month, day) = birth;
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("date");
        assert_eq!(age_on(date, today), age);
    }

    #[rstest]
    fn past_rule_skips_age_policy(today: NaiveDate) {
        let labels = DateLabels {
            required: "Дата приема обязательна",
            invalid: "Некорректная дата приема",
            future: "Дата приема не может быть в будущем",
        };
        let rule = DateRule::past("hire_date", DateFormat::YEAR_FIRST, labels, today);
        assert!(rule.apply(Some("2026.03.01")).is_ok());
        assert_eq!(
            message(&rule, "2026-04-01"),
            "Дата приема не может быть в будущем"
        );
    }
}
