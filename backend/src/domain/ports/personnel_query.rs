//! Driven port for personnel reads.
//!
//! Covers the lookup functions of the personnel database together with the
//! small existence and headcount checks the service runs before a mutation.

use async_trait::async_trait;

use super::GatewayError;
use super::fixture_data;
use crate::domain::commands::{EmployeeLookup, NewEmployee, SalaryLookup};
use crate::domain::records::{
    ActiveEmployeeRecord, DepartmentRef, EmployeeInfoRecord, PayrollSnapshot,
    SalaryAnalysisRecord, SalaryTaxRecord,
};

/// Read access to employees, departments and payroll.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonnelQuery: Send + Sync {
    /// `func_get_employee_info`; `None` when no employee matches.
    async fn employee_info(
        &self,
        lookup: &EmployeeLookup,
    ) -> Result<Option<EmployeeInfoRecord>, GatewayError>;

    /// `get_active_employees`.
    async fn active_employees(&self) -> Result<Vec<ActiveEmployeeRecord>, GatewayError>;

    /// `func_calculate_salary_with_taxes_by_fio`; `None` when no employee
    /// matches.
    async fn salary_with_taxes(
        &self,
        lookup: &SalaryLookup,
    ) -> Result<Option<SalaryTaxRecord>, GatewayError>;

    async fn department(&self, department_id: i32) -> Result<Option<DepartmentRef>, GatewayError>;

    /// All departments ordered by name.
    async fn departments(&self) -> Result<Vec<DepartmentRef>, GatewayError>;

    /// `get_avg_salary_by_department`; `None` when the department has no
    /// active staff.
    async fn average_salary(&self, department_id: i32) -> Result<Option<f64>, GatewayError>;

    /// Salaries of the department's active employees.
    async fn active_salaries(&self, department_id: i32) -> Result<Vec<f64>, GatewayError>;

    /// `get_salary_analysis_wrapper_enhanced`, summary row first.
    async fn salary_analysis(&self) -> Result<Vec<SalaryAnalysisRecord>, GatewayError>;

    /// Active headcount and payroll budget.
    async fn payroll_snapshot(&self) -> Result<PayrollSnapshot, GatewayError>;

    /// Id of an employee already registered under the hire's full name.
    async fn duplicate_employee(&self, hire: &NewEmployee) -> Result<Option<i32>, GatewayError>;

    async fn position_in_department(
        &self,
        position_id: i32,
        department_id: i32,
    ) -> Result<bool, GatewayError>;

    async fn active_headcount(&self, department_id: i32) -> Result<i64, GatewayError>;

    /// Active headcount left in a department; `None` once it is deleted.
    async fn remaining_headcount(&self, department_id: i32) -> Result<Option<i64>, GatewayError>;
}

/// Deterministic in-memory personnel data used when no database is
/// configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePersonnelQuery;

#[async_trait]
impl PersonnelQuery for FixturePersonnelQuery {
    async fn employee_info(
        &self,
        lookup: &EmployeeLookup,
    ) -> Result<Option<EmployeeInfoRecord>, GatewayError> {
        let record = fixture_data::employee_info()?;
        let matches = lookup.first_name == fixture_data::FIRST_NAME
            && lookup.middle_name == fixture_data::MIDDLE_NAME
            && record.birth_date == Some(lookup.birth_date);
        Ok(matches.then_some(record))
    }

    async fn active_employees(&self) -> Result<Vec<ActiveEmployeeRecord>, GatewayError> {
        fixture_data::active_employees()
    }

    async fn salary_with_taxes(
        &self,
        lookup: &SalaryLookup,
    ) -> Result<Option<SalaryTaxRecord>, GatewayError> {
        let record = fixture_data::salary_taxes()?;
        let matches = lookup.last_name == fixture_data::LAST_NAME
            && lookup.first_name == fixture_data::FIRST_NAME
            && lookup.middle_name == fixture_data::MIDDLE_NAME
            && record.birth_date == Some(lookup.birth_date);
        Ok(matches.then_some(record))
    }

    async fn department(&self, department_id: i32) -> Result<Option<DepartmentRef>, GatewayError> {
        Ok(fixture_data::departments()
            .into_iter()
            .find(|department| department.department_id == department_id))
    }

    async fn departments(&self) -> Result<Vec<DepartmentRef>, GatewayError> {
        let mut departments = fixture_data::departments();
        departments.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(departments)
    }

    async fn average_salary(&self, department_id: i32) -> Result<Option<f64>, GatewayError> {
        let salaries = fixture_data::salaries(department_id);
        if salaries.is_empty() {
            return Ok(None);
        }
        let count = u32::try_from(salaries.len())
            .map_err(|err| GatewayError::query(format!("fixture salary count: {err}")))?;
        Ok(Some(salaries.iter().sum::<f64>() / f64::from(count)))
    }

    async fn active_salaries(&self, department_id: i32) -> Result<Vec<f64>, GatewayError> {
        Ok(fixture_data::salaries(department_id))
    }

    async fn salary_analysis(&self) -> Result<Vec<SalaryAnalysisRecord>, GatewayError> {
        Ok(fixture_data::salary_analysis())
    }

    async fn payroll_snapshot(&self) -> Result<PayrollSnapshot, GatewayError> {
        Ok(fixture_data::payroll_snapshot())
    }

    async fn duplicate_employee(&self, hire: &NewEmployee) -> Result<Option<i32>, GatewayError> {
        let duplicate = hire.last_name == fixture_data::LAST_NAME
            && hire.first_name == fixture_data::FIRST_NAME
            && hire.middle_name.as_deref() == Some(fixture_data::MIDDLE_NAME);
        Ok(duplicate.then_some(fixture_data::EMPLOYEE_ID))
    }

    async fn position_in_department(
        &self,
        position_id: i32,
        department_id: i32,
    ) -> Result<bool, GatewayError> {
        Ok(fixture_data::POSITIONS
            .iter()
            .any(|&(position, department)| position == position_id && department == department_id))
    }

    async fn active_headcount(&self, department_id: i32) -> Result<i64, GatewayError> {
        let count = fixture_data::salaries(department_id).len();
        i64::try_from(count).map_err(|err| GatewayError::query(format!("fixture headcount: {err}")))
    }

    async fn remaining_headcount(&self, _department_id: i32) -> Result<Option<i64>, GatewayError> {
        // Fixture removals always succeed, so the department is gone.
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn fixture_lookup() -> EmployeeLookup {
        EmployeeLookup {
            first_name: fixture_data::FIRST_NAME.to_owned(),
            middle_name: fixture_data::MIDDLE_NAME.to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).expect("date"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_finds_known_employee() {
        let record = FixturePersonnelQuery
            .employee_info(&fixture_lookup())
            .await
            .expect("query")
            .expect("known employee");
        assert_eq!(record.employee_id, fixture_data::EMPLOYEE_ID);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_misses_unknown_employee() {
        let mut lookup = fixture_lookup();
        lookup.first_name = "Пётр".to_owned();
        let record = FixturePersonnelQuery
            .employee_info(&lookup)
            .await
            .expect("query");
        assert!(record.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_departments_are_sorted_by_name() {
        let names: Vec<_> = FixturePersonnelQuery
            .departments()
            .await
            .expect("departments")
            .into_iter()
            .map(|department| department.name)
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_average_matches_salaries() {
        let average = FixturePersonnelQuery
            .average_salary(1)
            .await
            .expect("average")
            .expect("staffed department");
        assert!((average - 20_000.0).abs() < 1e-9);
    }
}
