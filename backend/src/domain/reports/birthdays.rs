//! Birthday calendar report.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::format::rounded_mean;
use super::grouping::group_in_order;
use crate::domain::commands::full_name;
use crate::domain::envelope::ResponseStatus;
use crate::domain::records::BirthdayRecord;

const MONTH_NAMES: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

/// Window, in days, for upcoming birthdays.
const UPCOMING_DAYS: i32 = 30;
/// Marker the view puts in the status of today's birthdays.
const TODAY_MARKER: &str = "СЕГОДНЯ";

/// Russian name of a calendar month, 1-based.
#[must_use]
pub fn month_name(month: i32) -> &'static str {
    usize::try_from(month - 1)
        .ok()
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
        .unwrap_or("Неизвестно")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BirthdayEntry {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub department: Option<String>,
    pub birth_date: NaiveDate,
    pub birth_day: i32,
    pub birth_month: i32,
    pub current_age: i32,
    pub next_birthday: Option<NaiveDate>,
    pub days_until_birthday: i32,
    pub hire_date: Option<NaiveDate>,
    pub years_in_company: Option<i32>,
    pub birthday_status: String,
    pub is_upcoming: bool,
    /// Set when the current age is a round number.
    pub milestone: Option<String>,
}

impl From<BirthdayRecord> for BirthdayEntry {
    fn from(record: BirthdayRecord) -> Self {
        let age = record.current_age;
        Self {
            employee_id: record.employee_id,
            full_name: full_name(
                &record.last_name,
                &record.first_name,
                record.middle_name.as_deref(),
            ),
            personal_number: record.personal_number,
            department: record.department_name,
            birth_date: record.birth_date,
            birth_day: record.birth_day,
            birth_month: record.birth_month,
            current_age: age,
            next_birthday: record.next_birthday,
            days_until_birthday: record.days_until_birthday,
            hire_date: record.hire_date,
            years_in_company: record.years_in_company,
            birthday_status: record.birthday_status,
            is_upcoming: record.days_until_birthday <= UPCOMING_DAYS,
            milestone: (age % 10 == 0).then(|| format!("Юбилей: {age} лет")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BirthdayGroup {
    pub status: String,
    pub count: usize,
    pub employees: Vec<BirthdayEntry>,
}

/// Employee as listed in the month calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthBirthday {
    pub name: String,
    pub day: i32,
    /// Age reached on the coming birthday.
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthGroup {
    pub month: String,
    pub count: usize,
    pub employees: Vec<MonthBirthday>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BirthdaySummary {
    pub total: usize,
    pub today_birthdays: usize,
    pub upcoming_30_days: usize,
    pub by_month: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AgeStatistics {
    pub avg_age: i64,
    pub youngest: i32,
    pub oldest: i32,
}

/// Body of `GET /api/views/employee-birthdays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BirthdayReport {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<BirthdaySummary>,
    pub data: Vec<BirthdayEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_birthdays: Option<Vec<BirthdayEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_birthdays: Option<Vec<BirthdayEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_status: Option<Vec<BirthdayGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_month: Option<Vec<MonthGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<AgeStatistics>,
}

impl BirthdayReport {
    /// Summarise rows already ordered by birth month and day.
    #[must_use]
    pub fn build(records: Vec<BirthdayRecord>) -> Self {
        let entries: Vec<BirthdayEntry> = records.into_iter().map(BirthdayEntry::from).collect();
        let (Some(youngest), Some(oldest)) = (
            entries.iter().map(|entry| entry.current_age).min(),
            entries.iter().map(|entry| entry.current_age).max(),
        ) else {
            return Self {
                status: ResponseStatus::Success,
                message: Some("Нет данных по дням рождения".to_owned()),
                summary: None,
                data: Vec::new(),
                today_birthdays: None,
                upcoming_birthdays: None,
                by_status: None,
                by_month: None,
                statistics: None,
            };
        };

        let by_status: Vec<BirthdayGroup> =
            group_in_order(entries.iter().cloned(), |entry| entry.birthday_status.clone())
                .into_iter()
                .map(|(status, members)| BirthdayGroup {
                    status,
                    count: members.len(),
                    employees: members,
                })
                .collect();

        let by_month: Vec<MonthGroup> =
            group_in_order(entries.iter(), |entry| month_name(entry.birth_month))
                .into_iter()
                .map(|(month, members)| MonthGroup {
                    month: month.to_owned(),
                    count: members.len(),
                    employees: members
                        .into_iter()
                        .map(|entry| MonthBirthday {
                            name: entry.full_name.clone(),
                            day: entry.birth_day,
                            age: entry.current_age + 1,
                        })
                        .collect(),
                })
                .collect();

        let mut upcoming: Vec<BirthdayEntry> = entries
            .iter()
            .filter(|entry| {
                entry.days_until_birthday > 0 && entry.days_until_birthday <= UPCOMING_DAYS
            })
            .cloned()
            .collect();
        upcoming.sort_by_key(|entry| entry.days_until_birthday);

        let today: Vec<BirthdayEntry> = entries
            .iter()
            .filter(|entry| entry.birthday_status.contains(TODAY_MARKER))
            .cloned()
            .collect();

        let ages: Vec<f64> = entries
            .iter()
            .map(|entry| f64::from(entry.current_age))
            .collect();

        Self {
            status: ResponseStatus::Success,
            message: None,
            summary: Some(BirthdaySummary {
                total: entries.len(),
                today_birthdays: today.len(),
                upcoming_30_days: upcoming.len(),
                by_month: by_month.len(),
            }),
            data: entries,
            today_birthdays: Some(today),
            upcoming_birthdays: Some(upcoming),
            by_status: Some(by_status),
            by_month: Some(by_month),
            statistics: Some(AgeStatistics {
                avg_age: rounded_mean(&ages),
                youngest,
                oldest,
            }),
        }
    }
}
