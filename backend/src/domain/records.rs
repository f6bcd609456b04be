//! Rows returned by the personnel database, in domain form.
//!
//! These mirror the result sets of the stored functions and views. Numeric
//! columns arrive as `f64`, dates as [`NaiveDate`]. The service only reads
//! them.

use chrono::NaiveDate;

use crate::domain::commands::full_name;

/// One row of `func_get_employee_info`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInfoRecord {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    pub department_name: Option<String>,
    pub position_name: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub experience_years: Option<f64>,
    pub education: Option<String>,
    pub status: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// One row of `get_active_employees`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEmployeeRecord {
    pub personal_number: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub department_name: String,
    pub position_name: Option<String>,
    pub status: Option<String>,
}

impl ActiveEmployeeRecord {
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(
            &self.last_name,
            &self.first_name,
            self.middle_name.as_deref(),
        )
    }
}

/// One row of `func_calculate_salary_with_taxes_by_fio`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryTaxRecord {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    pub department_name: Option<String>,
    pub position_name: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub experience_years: Option<f64>,
    pub gross_salary: f64,
    pub tax_ndfl: f64,
    pub tax_pension: f64,
    pub tax_medical: f64,
    pub tax_social: f64,
    pub total_taxes: f64,
    pub net_salary: f64,
    pub total_cost: f64,
}

/// Active headcount and payroll at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayrollSnapshot {
    pub total_employees: i64,
    pub total_budget: f64,
    pub avg_salary: Option<f64>,
}

/// One row of `func_update_all_employee_salaries`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRaiseRecord {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub old_salary: f64,
    pub new_salary: f64,
    pub experience_years: Option<f64>,
    pub status: String,
}

impl SalaryRaiseRecord {
    #[must_use]
    pub fn increase(&self) -> f64 {
        self.new_salary - self.old_salary
    }
}

/// Department id and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRef {
    pub department_id: i32,
    pub name: String,
}

/// One row of `get_salary_analysis_wrapper_enhanced`.
///
/// The first row of the result set is the company-wide summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryAnalysisRecord {
    pub department_name: Option<String>,
    pub employee_count: i64,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub avg_salary: Option<f64>,
    pub department_salary_budget: Option<f64>,
    pub employees_list: Option<String>,
}

/// One row of `v_employees_on_probation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbationRecord {
    pub employee_id: i32,
    pub personal_number: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub department_name: Option<String>,
    pub position_name: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub probation_period: i32,
    pub probation_end_date: Option<NaiveDate>,
    pub probation_status: String,
    pub days_worked: i32,
}

/// One row of `v_salary_grades`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryGradeRecord {
    pub personal_number: String,
    pub employee_name: String,
    pub department_name: String,
    pub position_name: Option<String>,
    pub salary: f64,
    pub salary_grade: String,
    pub deviation_from_position_avg_percent: Option<f64>,
    pub salary_rank_in_department: i64,
}

/// One row of `v_employee_birthdays`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayRecord {
    pub employee_id: i32,
    pub personal_number: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub department_name: Option<String>,
    pub birth_date: NaiveDate,
    pub birth_day: i32,
    pub birth_month: i32,
    pub current_age: i32,
    pub next_birthday: Option<NaiveDate>,
    pub days_until_birthday: i32,
    pub hire_date: Option<NaiveDate>,
    pub years_in_company: Option<i32>,
    pub birthday_status: String,
}
