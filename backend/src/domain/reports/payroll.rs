//! Salary, tax and payroll responses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::format::{count_as_f64, mean, percent_of, round_to, rubles};
use super::grouping::group_in_order;
use super::spread::{SalarySpread, SpreadLevel};
use crate::domain::envelope::ResponseStatus;
use crate::domain::records::{
    DepartmentRef, PayrollSnapshot, SalaryAnalysisRecord, SalaryRaiseRecord, SalaryTaxRecord,
};

/// Statutory rates, in percent.
pub const NDFL_RATE: f64 = 13.0;
pub const PENSION_RATE: f64 = 22.0;
pub const MEDICAL_RATE: f64 = 5.1;
pub const SOCIAL_RATE: f64 = 2.9;
/// Share of gross salary an employee receives after NDFL.
pub const NET_SHARE: f64 = 87.0;

const RAISE_POLICY: &str = "1 год = +10%, 2 года = +20%, 3+ лет = +30%";
const SAMPLE_SIZE: usize = 5;

/// Monetary value with its `ru-RU` rendering.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Money {
    pub value: f64,
    #[schema(example = "20\u{a0}000,00\u{a0}₽")]
    pub formatted: String,
}

impl Money {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            formatted: rubles(value),
        }
    }
}

// ---------------------------------------------------------------------------
// Salary with taxes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryEmployeeInfo {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub experience_years: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TaxAmount {
    pub amount: f64,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaxAmount {
    fn new(amount: f64, percent: Option<f64>, description: Option<&str>) -> Self {
        Self {
            amount,
            formatted: rubles(amount),
            percent,
            description: description.map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeTaxes {
    pub ndfl: TaxAmount,
    pub total_employee_taxes: TaxAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployerTaxes {
    pub pension: TaxAmount,
    pub medical: TaxAmount,
    pub social: TaxAmount,
    pub total_employer_taxes: TaxAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryCalculation {
    pub gross_salary: TaxAmount,
    pub employee_taxes: EmployeeTaxes,
    pub employer_taxes: EmployerTaxes,
    pub net_salary: TaxAmount,
    pub total_cost_for_employer: TaxAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TaxSummary {
    pub gross_salary: f64,
    pub net_salary: f64,
    pub total_taxes: f64,
    pub total_cost_for_employer: f64,
    pub tax_burden_percent: f64,
    pub effective_tax_rate: f64,
}

/// Shares of the employer's total cost, as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CostBreakdown {
    pub employee_receives: String,
    pub taxes_total: String,
    pub employer_costs: String,
}

/// Body of `POST /api/functions/calculate-salary`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryTaxResponse {
    pub status: ResponseStatus,
    pub employee_info: SalaryEmployeeInfo,
    pub salary_calculation: SalaryCalculation,
    pub summary: TaxSummary,
    pub breakdown: CostBreakdown,
}

fn share_of_cost(part: f64, total_cost: f64) -> String {
    format!("{:.1}% от общей стоимости", percent_of(part, total_cost, 1))
}

impl From<SalaryTaxRecord> for SalaryTaxResponse {
    fn from(record: SalaryTaxRecord) -> Self {
        let employer_total = record.tax_pension + record.tax_medical + record.tax_social;
        let employer_rate = round_to(PENSION_RATE + MEDICAL_RATE + SOCIAL_RATE, 1);
        let gross = record.gross_salary;

        let salary_calculation = SalaryCalculation {
            gross_salary: TaxAmount::new(gross, None, None),
            employee_taxes: EmployeeTaxes {
                ndfl: TaxAmount::new(
                    record.tax_ndfl,
                    Some(NDFL_RATE),
                    Some("НДФЛ (подоходный налог)"),
                ),
                total_employee_taxes: TaxAmount::new(record.tax_ndfl, Some(NDFL_RATE), None),
            },
            employer_taxes: EmployerTaxes {
                pension: TaxAmount::new(
                    record.tax_pension,
                    Some(PENSION_RATE),
                    Some("Пенсионные отчисления"),
                ),
                medical: TaxAmount::new(
                    record.tax_medical,
                    Some(MEDICAL_RATE),
                    Some("Медицинское страхование"),
                ),
                social: TaxAmount::new(
                    record.tax_social,
                    Some(SOCIAL_RATE),
                    Some("Социальное страхование"),
                ),
                total_employer_taxes: TaxAmount::new(employer_total, Some(employer_rate), None),
            },
            net_salary: TaxAmount::new(
                record.net_salary,
                Some(NET_SHARE),
                Some("Зарплата на руки (после вычета НДФЛ)"),
            ),
            total_cost_for_employer: TaxAmount::new(
                record.total_cost,
                None,
                Some("Общая стоимость для работодателя (оклад + налоги работодателя)"),
            ),
        };

        let summary = TaxSummary {
            gross_salary: gross,
            net_salary: record.net_salary,
            total_taxes: record.total_taxes,
            total_cost_for_employer: record.total_cost,
            tax_burden_percent: percent_of(record.total_taxes, gross, 2),
            effective_tax_rate: percent_of(record.tax_ndfl, gross, 2),
        };

        let breakdown = CostBreakdown {
            employee_receives: share_of_cost(record.net_salary, record.total_cost),
            taxes_total: share_of_cost(record.total_taxes, record.total_cost),
            employer_costs: share_of_cost(employer_total, record.total_cost),
        };

        Self {
            status: ResponseStatus::Success,
            employee_info: SalaryEmployeeInfo {
                employee_id: record.employee_id,
                personal_number: record.personal_number,
                full_name: record.full_name,
                birth_date: record.birth_date,
                age: record.age,
                department: record.department_name,
                position: record.position_name,
                hire_date: record.hire_date,
                experience_years: record.experience_years,
            },
            salary_calculation,
            summary,
            breakdown,
        }
    }
}

// ---------------------------------------------------------------------------
// Department averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentHeader {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AverageSalary {
    pub value: f64,
    pub formatted: String,
    pub currency: String,
    pub calculated_from: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryRange {
    pub value: f64,
    pub formatted: String,
    #[schema(example = "100.0%")]
    pub percentage_of_avg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StandardDeviation {
    pub value: f64,
    pub formatted: String,
    pub level: SpreadLevel,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryDistribution {
    pub min_salary: Money,
    pub max_salary: Money,
    pub salary_range: SalaryRange,
    pub midpoint: Money,
    pub standard_deviation: StandardDeviation,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyBudget {
    pub value: f64,
    pub formatted: String,
    pub monthly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentStatistics {
    pub employee_count: usize,
    pub total_budget: MonthlyBudget,
    pub avg_salary_percent_of_max: String,
    pub comparison_to_min: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Difference {
    pub difference: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryComparison {
    pub vs_min: Difference,
    pub vs_max: Difference,
}

/// Statistics reported for a department without active staff.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmptyDepartmentStatistics {
    pub employee_count: usize,
    pub avg_salary: f64,
    pub note: String,
}

/// Body of the single-department salary endpoints.
///
/// A department without active staff carries only `message` and
/// `statistics`; otherwise every analysis section is present.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentSalaryResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub department: DepartmentHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<EmptyDepartmentStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_salary: Option<AverageSalary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_distribution: Option<SalaryDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_statistics: Option<DepartmentStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<SalaryComparison>,
    pub timestamp: DateTime<Utc>,
}

impl DepartmentSalaryResponse {
    /// Analyse `salaries` of the department's active staff.
    ///
    /// `average` is the value reported by the database; the mean of
    /// `salaries` stands in when it is absent.
    #[must_use]
    pub fn build(
        department: DepartmentRef,
        average: Option<f64>,
        salaries: &[f64],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let header = DepartmentHeader {
            id: department.department_id,
            name: department.name,
        };
        let Some(spread) = SalarySpread::from_salaries(salaries) else {
            return Self {
                status: ResponseStatus::Success,
                message: Some(format!(
                    "В отделе \"{}\" нет активных сотрудников",
                    header.name
                )),
                department: header,
                statistics: Some(EmptyDepartmentStatistics {
                    employee_count: 0,
                    avg_salary: 0.0,
                    note: "Нет данных для расчета средней зарплаты".to_owned(),
                }),
                average_salary: None,
                salary_distribution: None,
                department_statistics: None,
                comparison: None,
                timestamp,
            };
        };

        let avg = average.unwrap_or(spread.average);
        let (min, max) = (spread.min, spread.max);
        let range = spread.range();

        let salary_distribution = SalaryDistribution {
            min_salary: Money::new(min),
            max_salary: Money::new(max),
            salary_range: SalaryRange {
                value: range,
                formatted: rubles(range),
                percentage_of_avg: format!("{:.1}%", percent_of(range, avg, 1)),
            },
            midpoint: Money::new(spread.midpoint()),
            standard_deviation: StandardDeviation {
                value: spread.standard_deviation,
                formatted: rubles(spread.standard_deviation),
                level: spread.level,
                interpretation: spread.level.interpretation().to_owned(),
            },
        };

        let comparison_to_min = if avg > min {
            format!("На {:.1}% выше минимальной", percent_of(avg - min, min, 1))
        } else {
            "Равна минимальной".to_owned()
        };

        Self {
            status: ResponseStatus::Success,
            message: None,
            department: header,
            statistics: None,
            average_salary: Some(AverageSalary {
                value: avg,
                formatted: rubles(avg),
                currency: "RUB".to_owned(),
                calculated_from: format!("{} сотрудников", spread.count),
            }),
            salary_distribution: Some(salary_distribution),
            department_statistics: Some(DepartmentStatistics {
                employee_count: spread.count,
                total_budget: MonthlyBudget {
                    value: spread.total,
                    formatted: rubles(spread.total),
                    monthly: true,
                },
                avg_salary_percent_of_max: format!("{:.1}%", percent_of(avg, max, 1)),
                comparison_to_min,
            }),
            comparison: Some(SalaryComparison {
                vs_min: Difference {
                    difference: avg - min,
                    percentage: percent_of(avg - min, min, 1),
                },
                vs_max: Difference {
                    difference: max - avg,
                    percentage: percent_of(max - avg, avg, 1),
                },
            }),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentAverage {
    pub department_id: i32,
    pub department_name: String,
    pub avg_salary: f64,
    pub formatted_salary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AllDepartmentsSummary {
    pub total_departments: usize,
    pub departments_with_salaries: usize,
    pub overall_average_salary: Money,
}

/// Body of `GET /api/functions/avg-salary/all-departments`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AllDepartmentsResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AllDepartmentsSummary>,
    pub departments: Vec<DepartmentAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_paid_department: Option<DepartmentAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_paid_department: Option<DepartmentAverage>,
    pub timestamp: DateTime<Utc>,
}

impl AllDepartmentsResponse {
    /// Rank departments by average salary, highest first.
    ///
    /// The overall average only counts departments paying a positive
    /// average.
    #[must_use]
    pub fn build(averages: Vec<(DepartmentRef, f64)>, timestamp: DateTime<Utc>) -> Self {
        if averages.is_empty() {
            return Self {
                status: ResponseStatus::Success,
                message: Some("В системе нет отделов".to_owned()),
                summary: None,
                departments: Vec::new(),
                highest_paid_department: None,
                lowest_paid_department: None,
                timestamp,
            };
        }

        let paying: Vec<f64> = averages
            .iter()
            .map(|(_, avg)| *avg)
            .filter(|avg| *avg > 0.0)
            .collect();
        let overall = mean(&paying);

        let mut departments: Vec<DepartmentAverage> = averages
            .into_iter()
            .map(|(department, avg)| DepartmentAverage {
                department_id: department.department_id,
                department_name: department.name,
                avg_salary: avg,
                formatted_salary: rubles(avg),
            })
            .collect();
        departments.sort_by(|left, right| right.avg_salary.total_cmp(&left.avg_salary));

        Self {
            status: ResponseStatus::Success,
            message: None,
            summary: Some(AllDepartmentsSummary {
                total_departments: departments.len(),
                departments_with_salaries: paying.len(),
                overall_average_salary: Money::new(overall),
            }),
            highest_paid_department: departments.first().cloned(),
            lowest_paid_department: departments.last().cloned(),
            departments,
            timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Tenure raise
// ---------------------------------------------------------------------------

/// Warning returned when the raise is requested without confirmation.
#[must_use]
pub fn raise_warning() -> String {
    format!(
        "Функция увеличит зарплаты сотрудникам в зависимости от стажа: {RAISE_POLICY}"
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaiseSummary {
    pub employees_processed: usize,
    pub total_budget_before: f64,
    pub total_budget_after: f64,
    pub total_increase: f64,
    pub percentage_increase: f64,
    pub avg_salary_before: Option<f64>,
    pub avg_salary_after: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaiseStatusShare {
    pub status: String,
    pub count: usize,
    pub percentage: f64,
    pub total_increase: f64,
    pub avg_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaisedEmployee {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub old_salary: f64,
    pub new_salary: f64,
    pub increase: f64,
    pub increase_percent: f64,
    pub experience_years: Option<f64>,
}

impl From<&SalaryRaiseRecord> for RaisedEmployee {
    fn from(record: &SalaryRaiseRecord) -> Self {
        Self {
            employee_id: record.employee_id,
            personal_number: record.personal_number.clone(),
            full_name: record.full_name.clone(),
            old_salary: record.old_salary,
            new_salary: record.new_salary,
            increase: record.increase(),
            increase_percent: percent_of(record.increase(), record.old_salary, 2),
            experience_years: record.experience_years,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaiseGroup {
    pub status: String,
    pub count: usize,
    pub total_increase: f64,
    pub employees: Vec<RaisedEmployee>,
}

/// Display row for the first few raised employees.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaiseSample {
    pub personal_number: String,
    pub full_name: String,
    pub experience_years: Option<f64>,
    pub old_salary: String,
    pub new_salary: String,
    pub increase: String,
    pub status: String,
}

/// Body of `POST /api/functions/update-salaries`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryRaiseResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub summary: RaiseSummary,
    pub statistics: Vec<RaiseStatusShare>,
    pub by_status: Vec<RaiseGroup>,
    pub sample_employees: Vec<RaiseSample>,
    pub all_employees: Vec<RaisedEmployee>,
    pub timestamp: DateTime<Utc>,
    pub note: String,
}

impl SalaryRaiseResponse {
    /// Summarise a completed raise against the payroll before and after.
    #[must_use]
    pub fn build(
        raises: &[SalaryRaiseRecord],
        before: PayrollSnapshot,
        after: PayrollSnapshot,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let processed = raises.len();
        let total_increase = after.total_budget - before.total_budget;

        let by_status: Vec<RaiseGroup> = group_in_order(raises, |record| record.status.clone())
            .into_iter()
            .map(|(status, members)| RaiseGroup {
                status,
                count: members.len(),
                total_increase: members.iter().map(|record| record.increase()).sum(),
                employees: members.into_iter().map(RaisedEmployee::from).collect(),
            })
            .collect();

        let statistics = by_status
            .iter()
            .map(|group| RaiseStatusShare {
                status: group.status.clone(),
                count: group.count,
                percentage: percent_of(count_as_f64(group.count), count_as_f64(processed), 1),
                total_increase: group.total_increase,
                avg_increase: group.total_increase / count_as_f64(group.count),
            })
            .collect();

        let sample_employees = raises
            .iter()
            .take(SAMPLE_SIZE)
            .map(|record| RaiseSample {
                personal_number: record.personal_number.clone(),
                full_name: record.full_name.clone(),
                experience_years: record.experience_years,
                old_salary: rubles(record.old_salary),
                new_salary: rubles(record.new_salary),
                increase: rubles(record.increase()),
                status: record.status.clone(),
            })
            .collect();

        Self {
            status: ResponseStatus::Success,
            message: "Зарплаты успешно обновлены".to_owned(),
            summary: RaiseSummary {
                employees_processed: processed,
                total_budget_before: before.total_budget,
                total_budget_after: after.total_budget,
                total_increase,
                percentage_increase: percent_of(total_increase, before.total_budget, 2),
                avg_salary_before: before.avg_salary,
                avg_salary_after: after.avg_salary,
            },
            statistics,
            by_status,
            sample_employees,
            all_employees: raises.iter().map(RaisedEmployee::from).collect(),
            timestamp,
            note: format!("Зарплаты увеличены в зависимости от стажа работы: {RAISE_POLICY}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Salary analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisSummary {
    pub department_count: usize,
    pub total_employees: i64,
    pub total_salary_budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentAnalysis {
    pub department_name: Option<String>,
    pub employee_count: i64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub avg_salary: f64,
    pub department_salary_budget: f64,
    pub employees_list: String,
}

/// Body of `GET /api/procedures/salary-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryAnalysisResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub summary: AnalysisSummary,
    pub departments: Vec<DepartmentAnalysis>,
    pub timestamp: DateTime<Utc>,
}

impl SalaryAnalysisResponse {
    /// The first row is the company total; the rest are departments.
    #[must_use]
    pub fn build(rows: Vec<SalaryAnalysisRecord>, timestamp: DateTime<Utc>) -> Self {
        let mut rows = rows.into_iter();
        let Some(total) = rows.next() else {
            return Self {
                status: ResponseStatus::Success,
                message: Some("Нет данных для анализа".to_owned()),
                summary: AnalysisSummary {
                    department_count: 0,
                    total_employees: 0,
                    total_salary_budget: 0.0,
                },
                departments: Vec::new(),
                timestamp,
            };
        };

        let departments: Vec<DepartmentAnalysis> = rows
            .map(|row| DepartmentAnalysis {
                department_name: row.department_name,
                employee_count: row.employee_count,
                min_salary: row.min_salary.unwrap_or_default(),
                max_salary: row.max_salary.unwrap_or_default(),
                avg_salary: row.avg_salary.unwrap_or_default(),
                department_salary_budget: row.department_salary_budget.unwrap_or_default(),
                employees_list: row.employees_list.unwrap_or_default(),
            })
            .collect();

        Self {
            status: ResponseStatus::Success,
            message: None,
            summary: AnalysisSummary {
                department_count: departments.len(),
                total_employees: total.employee_count,
                total_salary_budget: total.department_salary_budget.unwrap_or_default(),
            },
            departments,
            timestamp,
        }
    }
}
