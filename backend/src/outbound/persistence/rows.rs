//! Row shapes decoded from raw SQL result sets.
//!
//! Each struct mirrors one statement in [`super::statements`] and converts
//! into its domain record.

use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Bool, Date, Double, Integer, Nullable, Text};

use crate::domain::records::{
    ActiveEmployeeRecord, BirthdayRecord, DepartmentRef, EmployeeInfoRecord, PayrollSnapshot,
    ProbationRecord, SalaryAnalysisRecord, SalaryGradeRecord, SalaryRaiseRecord, SalaryTaxRecord,
};

#[derive(Debug, QueryableByName)]
pub(super) struct EmployeeInfoRow {
    #[diesel(sql_type = Integer)]
    employee_id: i32,
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    full_name: String,
    #[diesel(sql_type = Nullable<Date>)]
    birth_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Integer>)]
    age: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    department_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    position_name: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    salary: Option<f64>,
    #[diesel(sql_type = Nullable<Date>)]
    hire_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Double>)]
    experience_years: Option<f64>,
    #[diesel(sql_type = Nullable<Text>)]
    education: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    status: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    phone_number: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    email: Option<String>,
}

impl From<EmployeeInfoRow> for EmployeeInfoRecord {
    fn from(row: EmployeeInfoRow) -> Self {
        Self {
            employee_id: row.employee_id,
            personal_number: row.personal_number,
            full_name: row.full_name,
            birth_date: row.birth_date,
            age: row.age,
            department_name: row.department_name,
            position_name: row.position_name,
            salary: row.salary,
            hire_date: row.hire_date,
            experience_years: row.experience_years,
            education: row.education,
            status: row.status,
            phone_number: row.phone_number,
            email: row.email,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct ActiveEmployeeRow {
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    last_name: String,
    #[diesel(sql_type = Text)]
    first_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    middle_name: Option<String>,
    #[diesel(sql_type = Nullable<Date>)]
    birth_date: Option<NaiveDate>,
    #[diesel(sql_type = Text)]
    department_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    position_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    status: Option<String>,
}

impl From<ActiveEmployeeRow> for ActiveEmployeeRecord {
    fn from(row: ActiveEmployeeRow) -> Self {
        Self {
            personal_number: row.personal_number,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            birth_date: row.birth_date,
            department_name: row.department_name,
            position_name: row.position_name,
            status: row.status,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct SalaryTaxRow {
    #[diesel(sql_type = Integer)]
    employee_id: i32,
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    full_name: String,
    #[diesel(sql_type = Nullable<Date>)]
    birth_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Integer>)]
    age: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    department_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    position_name: Option<String>,
    #[diesel(sql_type = Nullable<Date>)]
    hire_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Double>)]
    experience_years: Option<f64>,
    #[diesel(sql_type = Double)]
    gross_salary: f64,
    #[diesel(sql_type = Double)]
    tax_ndfl: f64,
    #[diesel(sql_type = Double)]
    tax_pension: f64,
    #[diesel(sql_type = Double)]
    tax_medical: f64,
    #[diesel(sql_type = Double)]
    tax_social: f64,
    #[diesel(sql_type = Double)]
    total_taxes: f64,
    #[diesel(sql_type = Double)]
    net_salary: f64,
    #[diesel(sql_type = Double)]
    total_cost: f64,
}

impl From<SalaryTaxRow> for SalaryTaxRecord {
    fn from(row: SalaryTaxRow) -> Self {
        Self {
            employee_id: row.employee_id,
            personal_number: row.personal_number,
            full_name: row.full_name,
            birth_date: row.birth_date,
            age: row.age,
            department_name: row.department_name,
            position_name: row.position_name,
            hire_date: row.hire_date,
            experience_years: row.experience_years,
            gross_salary: row.gross_salary,
            tax_ndfl: row.tax_ndfl,
            tax_pension: row.tax_pension,
            tax_medical: row.tax_medical,
            tax_social: row.tax_social,
            total_taxes: row.total_taxes,
            net_salary: row.net_salary,
            total_cost: row.total_cost,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct SalaryRaiseRow {
    #[diesel(sql_type = Integer)]
    employee_id: i32,
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    full_name: String,
    #[diesel(sql_type = Double)]
    old_salary: f64,
    #[diesel(sql_type = Double)]
    new_salary: f64,
    #[diesel(sql_type = Nullable<Double>)]
    experience_years: Option<f64>,
    #[diesel(sql_type = Text)]
    status: String,
}

impl From<SalaryRaiseRow> for SalaryRaiseRecord {
    fn from(row: SalaryRaiseRow) -> Self {
        Self {
            employee_id: row.employee_id,
            personal_number: row.personal_number,
            full_name: row.full_name,
            old_salary: row.old_salary,
            new_salary: row.new_salary,
            experience_years: row.experience_years,
            status: row.status,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct PayrollSnapshotRow {
    #[diesel(sql_type = BigInt)]
    total_employees: i64,
    #[diesel(sql_type = Double)]
    total_budget: f64,
    #[diesel(sql_type = Nullable<Double>)]
    avg_salary: Option<f64>,
}

impl From<PayrollSnapshotRow> for PayrollSnapshot {
    fn from(row: PayrollSnapshotRow) -> Self {
        Self {
            total_employees: row.total_employees,
            total_budget: row.total_budget,
            avg_salary: row.avg_salary,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct AverageSalaryRow {
    #[diesel(sql_type = Nullable<Double>)]
    pub(super) avg_salary: Option<f64>,
}

#[derive(Debug, QueryableByName)]
pub(super) struct SalaryRow {
    #[diesel(sql_type = Double)]
    pub(super) salary: f64,
}

#[derive(Debug, QueryableByName)]
pub(super) struct SalaryAnalysisRow {
    #[diesel(sql_type = Nullable<Text>)]
    department_name: Option<String>,
    #[diesel(sql_type = BigInt)]
    employee_count: i64,
    #[diesel(sql_type = Nullable<Double>)]
    min_salary: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    max_salary: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    avg_salary: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    department_salary_budget: Option<f64>,
    #[diesel(sql_type = Nullable<Text>)]
    employees_list: Option<String>,
}

impl From<SalaryAnalysisRow> for SalaryAnalysisRecord {
    fn from(row: SalaryAnalysisRow) -> Self {
        Self {
            department_name: row.department_name,
            employee_count: row.employee_count,
            min_salary: row.min_salary,
            max_salary: row.max_salary,
            avg_salary: row.avg_salary,
            department_salary_budget: row.department_salary_budget,
            employees_list: row.employees_list,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct DepartmentRow {
    #[diesel(sql_type = Integer)]
    department_id: i32,
    #[diesel(sql_type = Text)]
    name: String,
}

impl From<DepartmentRow> for DepartmentRef {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department_id: row.department_id,
            name: row.name,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct EmployeeIdRow {
    #[diesel(sql_type = Integer)]
    pub(super) employee_id: i32,
}

#[derive(Debug, QueryableByName)]
pub(super) struct PresenceRow {
    #[diesel(sql_type = Bool)]
    pub(super) present: bool,
}

#[derive(Debug, QueryableByName)]
pub(super) struct HeadcountRow {
    #[diesel(sql_type = BigInt)]
    pub(super) headcount: i64,
}

/// Out-parameters of `add_employee`.
#[derive(Debug, QueryableByName)]
pub(super) struct HireOutcomeRow {
    #[diesel(sql_type = Nullable<Integer>)]
    pub(super) p_employee_id: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) p_status: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) p_message: Option<String>,
}

/// Out-parameters of `dismiss_specific_employee`.
#[derive(Debug, QueryableByName)]
pub(super) struct StatusRow {
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) p_status: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub(super) p_message: Option<String>,
}

#[derive(Debug, QueryableByName)]
pub(super) struct ProbationRow {
    #[diesel(sql_type = Integer)]
    employee_id: i32,
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    last_name: String,
    #[diesel(sql_type = Text)]
    first_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    middle_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    department_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    position_name: Option<String>,
    #[diesel(sql_type = Nullable<Date>)]
    hire_date: Option<NaiveDate>,
    #[diesel(sql_type = Integer)]
    probation_period: i32,
    #[diesel(sql_type = Nullable<Date>)]
    probation_end_date: Option<NaiveDate>,
    #[diesel(sql_type = Text)]
    probation_status: String,
    #[diesel(sql_type = Integer)]
    days_worked: i32,
}

impl From<ProbationRow> for ProbationRecord {
    fn from(row: ProbationRow) -> Self {
        Self {
            employee_id: row.employee_id,
            personal_number: row.personal_number,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            department_name: row.department_name,
            position_name: row.position_name,
            hire_date: row.hire_date,
            probation_period: row.probation_period,
            probation_end_date: row.probation_end_date,
            probation_status: row.probation_status,
            days_worked: row.days_worked,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct SalaryGradeRow {
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    employee_name: String,
    #[diesel(sql_type = Text)]
    department_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    position_name: Option<String>,
    #[diesel(sql_type = Double)]
    salary: f64,
    #[diesel(sql_type = Text)]
    salary_grade: String,
    #[diesel(sql_type = Nullable<Double>)]
    deviation_from_position_avg_percent: Option<f64>,
    #[diesel(sql_type = BigInt)]
    salary_rank_in_department: i64,
}

impl From<SalaryGradeRow> for SalaryGradeRecord {
    fn from(row: SalaryGradeRow) -> Self {
        Self {
            personal_number: row.personal_number,
            employee_name: row.employee_name,
            department_name: row.department_name,
            position_name: row.position_name,
            salary: row.salary,
            salary_grade: row.salary_grade,
            deviation_from_position_avg_percent: row.deviation_from_position_avg_percent,
            salary_rank_in_department: row.salary_rank_in_department,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(super) struct BirthdayRow {
    #[diesel(sql_type = Integer)]
    employee_id: i32,
    #[diesel(sql_type = Text)]
    personal_number: String,
    #[diesel(sql_type = Text)]
    last_name: String,
    #[diesel(sql_type = Text)]
    first_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    middle_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    department_name: Option<String>,
    #[diesel(sql_type = Date)]
    birth_date: NaiveDate,
    #[diesel(sql_type = Integer)]
    birth_day: i32,
    #[diesel(sql_type = Integer)]
    birth_month: i32,
    #[diesel(sql_type = Integer)]
    current_age: i32,
    #[diesel(sql_type = Nullable<Date>)]
    next_birthday: Option<NaiveDate>,
    #[diesel(sql_type = Integer)]
    days_until_birthday: i32,
    #[diesel(sql_type = Nullable<Date>)]
    hire_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Integer>)]
    years_in_company: Option<i32>,
    #[diesel(sql_type = Text)]
    birthday_status: String,
}

impl From<BirthdayRow> for BirthdayRecord {
    fn from(row: BirthdayRow) -> Self {
        Self {
            employee_id: row.employee_id,
            personal_number: row.personal_number,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            department_name: row.department_name,
            birth_date: row.birth_date,
            birth_day: row.birth_day,
            birth_month: row.birth_month,
            current_age: row.current_age,
            next_birthday: row.next_birthday,
            days_until_birthday: row.days_until_birthday,
            hire_date: row.hire_date,
            years_in_company: row.years_in_company,
            birthday_status: row.birthday_status,
        }
    }
}
