//! Number formatting shared by the report builders.

/// Non-breaking space used by the `ru-RU` locale for digit grouping.
const GROUP_SEPARATOR: char = '\u{a0}';

/// Format `amount` as roubles in the `ru-RU` currency style.
///
/// # Examples
/// ```
/// use personnel::domain::reports::rubles;
///
/// assert_eq!(rubles(20_000.0), "20\u{a0}000,00\u{a0}₽");
/// assert_eq!(rubles(-1234.5), "-1\u{a0}234,50\u{a0}₽");
/// ```
#[must_use]
pub fn rubles(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let sign = if cents < 0.0 { "-" } else { "" };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "amounts in kopecks stay far below i64::MAX"
    )]
    let cents = cents.abs() as i64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped},{:02}{GROUP_SEPARATOR}₽", cents % 100)
}

/// Round `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// `part` as a percentage of `whole`, rounded to `places`; zero when
/// `whole` is zero.
#[must_use]
pub fn percent_of(part: f64, whole: f64, places: i32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round_to(part / whole * 100.0, places)
}

/// Arithmetic mean; zero for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / count_as_f64(values.len())
}

/// Arithmetic mean rounded to a whole number.
#[expect(
    clippy::cast_possible_truncation,
    reason = "averages of ages, periods and salaries fit in i64"
)]
#[must_use]
pub fn rounded_mean(values: &[f64]) -> i64 {
    mean(values).round() as i64
}

/// Row count as a float operand.
#[expect(clippy::cast_precision_loss, reason = "row counts stay far below 2^52")]
#[must_use]
pub fn count_as_f64(count: usize) -> f64 {
    count as f64
}
