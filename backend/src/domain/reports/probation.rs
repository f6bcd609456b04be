//! Probation report.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::format::rounded_mean;
use super::grouping::group_in_order;
use crate::domain::commands::full_name;
use crate::domain::envelope::ResponseStatus;
use crate::domain::records::ProbationRecord;

/// Status the view reports for employees still on probation.
pub const ON_PROBATION: &str = "На испытательном сроке";
/// Status the view reports once probation has been passed.
pub const PROBATION_COMPLETED: &str = "Испытательный срок пройден";

/// Threshold, in days, for the `ending_soon` list.
const ENDING_SOON_DAYS: i64 = 14;

/// Urgency of a probation ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    Low,
    Medium,
    High,
}

impl WarningLevel {
    /// `High` within a week, `Medium` within two.
    #[must_use]
    pub const fn for_days_remaining(days: i64) -> Self {
        if days <= 7 {
            Self::High
        } else if days <= 14 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProbationEmployee {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub probation_period: i32,
    pub probation_end_date: Option<NaiveDate>,
    pub probation_status: String,
    pub days_worked: i32,
    pub days_remaining: i64,
    pub warning_level: WarningLevel,
}

impl ProbationEmployee {
    fn from_record(record: ProbationRecord, today: NaiveDate) -> Self {
        let days_remaining = record
            .probation_end_date
            .map_or(0, |end| (end - today).num_days().max(0));
        Self {
            employee_id: record.employee_id,
            full_name: full_name(
                &record.last_name,
                &record.first_name,
                record.middle_name.as_deref(),
            ),
            personal_number: record.personal_number,
            department: record.department_name,
            position: record.position_name,
            hire_date: record.hire_date,
            probation_period: record.probation_period,
            probation_end_date: record.probation_end_date,
            probation_status: record.probation_status,
            days_worked: record.days_worked,
            days_remaining,
            warning_level: WarningLevel::for_days_remaining(days_remaining),
        }
    }

    fn is_on_probation(&self) -> bool {
        self.probation_status == ON_PROBATION
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProbationGroup {
    pub status: String,
    pub count: usize,
    pub employees: Vec<ProbationEmployee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProbationSummary {
    pub total: usize,
    pub on_probation: usize,
    pub completed_probation: usize,
    pub ending_within_7_days: usize,
    pub ending_within_14_days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProbationStatistics {
    pub avg_probation_period: i64,
    pub avg_days_worked: i64,
    pub max_probation_period: i32,
    pub min_probation_period: i32,
}

/// Body of `GET /api/views/employees-on-probation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProbationReport {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProbationSummary>,
    pub data: Vec<ProbationEmployee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_by_status: Option<Vec<ProbationGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_soon: Option<Vec<ProbationEmployee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ProbationStatistics>,
}

impl ProbationReport {
    #[must_use]
    pub fn build(records: Vec<ProbationRecord>, today: NaiveDate) -> Self {
        let employees: Vec<ProbationEmployee> = records
            .into_iter()
            .map(|record| ProbationEmployee::from_record(record, today))
            .collect();

        let periods = employees.iter().map(|employee| employee.probation_period);
        let (Some(max_period), Some(min_period)) = (periods.clone().max(), periods.min()) else {
            return Self {
                status: ResponseStatus::Success,
                message: Some("Нет сотрудников на испытательном сроке".to_owned()),
                summary: None,
                data: Vec::new(),
                grouped_by_status: None,
                ending_soon: None,
                statistics: None,
            };
        };

        let grouped: Vec<ProbationGroup> =
            group_in_order(employees.iter().cloned(), |employee| {
                employee.probation_status.clone()
            })
            .into_iter()
            .map(|(status, members)| ProbationGroup {
                status,
                count: members.len(),
                employees: members,
            })
            .collect();
        let count_with_status = |status: &str| {
            grouped
                .iter()
                .find(|group| group.status == status)
                .map_or(0, |group| group.count)
        };

        let mut ending_soon: Vec<ProbationEmployee> = employees
            .iter()
            .filter(|employee| {
                employee.is_on_probation() && employee.days_remaining <= ENDING_SOON_DAYS
            })
            .cloned()
            .collect();
        ending_soon.sort_by_key(|employee| employee.days_remaining);

        let summary = ProbationSummary {
            total: employees.len(),
            on_probation: count_with_status(ON_PROBATION),
            completed_probation: count_with_status(PROBATION_COMPLETED),
            ending_within_7_days: ending_soon
                .iter()
                .filter(|employee| employee.days_remaining <= 7)
                .count(),
            ending_within_14_days: ending_soon.len(),
        };

        let periods: Vec<f64> = employees
            .iter()
            .map(|employee| f64::from(employee.probation_period))
            .collect();
        let days_worked: Vec<f64> = employees
            .iter()
            .map(|employee| f64::from(employee.days_worked))
            .collect();
        let statistics = ProbationStatistics {
            avg_probation_period: rounded_mean(&periods),
            avg_days_worked: rounded_mean(&days_worked),
            max_probation_period: max_period,
            min_probation_period: min_period,
        };

        Self {
            status: ResponseStatus::Success,
            message: None,
            summary: Some(summary),
            data: employees,
            grouped_by_status: Some(grouped),
            ending_soon: Some(ending_soon),
            statistics: Some(statistics),
        }
    }
}
