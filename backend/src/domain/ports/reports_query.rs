//! Driven port for the reporting views.

use async_trait::async_trait;

use super::GatewayError;
use super::fixture_data;
use crate::domain::commands::{BirthdayFilter, GradeFilter};
use crate::domain::records::{BirthdayRecord, ProbationRecord, SalaryGradeRecord};

/// Read access to `v_employees_on_probation`, `v_salary_grades` and
/// `v_employee_birthdays`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportsQuery: Send + Sync {
    async fn probation(&self) -> Result<Vec<ProbationRecord>, GatewayError>;

    /// Grade rows matching `filter`, by department then salary descending.
    async fn salary_grades(
        &self,
        filter: &GradeFilter,
    ) -> Result<Vec<SalaryGradeRecord>, GatewayError>;

    /// Birthday rows matching `filter`, by birth month then day.
    async fn birthdays(&self, filter: &BirthdayFilter) -> Result<Vec<BirthdayRecord>, GatewayError>;
}

/// Fixture reports port. Filters are applied in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReportsQuery;

fn matches_pattern(pattern: Option<&str>, value: &str) -> bool {
    pattern.is_none_or(|pattern| {
        let needle = pattern.trim_matches('%');
        value.to_lowercase().contains(needle)
    })
}

#[async_trait]
impl ReportsQuery for FixtureReportsQuery {
    async fn probation(&self) -> Result<Vec<ProbationRecord>, GatewayError> {
        fixture_data::probation()
    }

    async fn salary_grades(
        &self,
        filter: &GradeFilter,
    ) -> Result<Vec<SalaryGradeRecord>, GatewayError> {
        Ok(fixture_data::salary_grades()
            .into_iter()
            .filter(|row| {
                matches_pattern(filter.department_pattern.as_deref(), &row.department_name)
            })
            .filter(|row| matches_pattern(filter.grade_pattern.as_deref(), &row.salary_grade))
            .filter(|row| filter.min_salary.is_none_or(|min| row.salary >= min))
            .filter(|row| filter.max_salary.is_none_or(|max| row.salary <= max))
            .collect())
    }

    async fn birthdays(
        &self,
        filter: &BirthdayFilter,
    ) -> Result<Vec<BirthdayRecord>, GatewayError> {
        Ok(fixture_data::birthdays()?
            .into_iter()
            .filter(|row| filter.month.is_none_or(|month| row.birth_month == month))
            .filter(|row| {
                filter
                    .upcoming_days
                    .is_none_or(|days| row.days_until_birthday <= days)
            })
            .filter(|row| {
                matches_pattern(
                    filter.department_pattern.as_deref(),
                    row.department_name.as_deref().unwrap_or_default(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_grades_honour_filters() {
        let filter = GradeFilter {
            department_pattern: Some("%информ%".to_owned()),
            min_salary: Some(25_000.0),
            ..GradeFilter::default()
        };
        let rows = FixtureReportsQuery
            .salary_grades(&filter)
            .await
            .expect("grades");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].personal_number, "EMP-0001");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_birthdays_filter_by_month() {
        let filter = BirthdayFilter {
            month: Some(5),
            ..BirthdayFilter::default()
        };
        let rows = FixtureReportsQuery
            .birthdays(&filter)
            .await
            .expect("birthdays");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].birth_month, 5);
    }
}
