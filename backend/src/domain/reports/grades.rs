//! Salary grade distribution report.

use serde::Serialize;
use utoipa::ToSchema;

use super::format::{count_as_f64, percent_of, rounded_mean};
use super::grouping::group_in_order;
use crate::domain::envelope::ResponseStatus;
use crate::domain::records::SalaryGradeRecord;

const TOP_EARNERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GradedEmployee {
    pub personal_number: String,
    pub employee_name: String,
    pub department: String,
    pub position: Option<String>,
    pub salary: f64,
    pub salary_grade: String,
    pub deviation_from_position_avg: Option<f64>,
    pub salary_rank_in_department: i64,
}

impl From<SalaryGradeRecord> for GradedEmployee {
    fn from(record: SalaryGradeRecord) -> Self {
        Self {
            personal_number: record.personal_number,
            employee_name: record.employee_name,
            department: record.department_name,
            position: record.position_name,
            salary: record.salary,
            salary_grade: record.salary_grade,
            deviation_from_position_avg: record.deviation_from_position_avg_percent,
            salary_rank_in_department: record.salary_rank_in_department,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GradeStatistic {
    pub grade: String,
    pub count: usize,
    /// Share of all listed employees, one decimal.
    pub percentage: f64,
    pub avg_salary: i64,
    pub departments_count: usize,
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentGrades {
    pub department: String,
    pub count: usize,
    pub avg_salary: i64,
    pub grade_distribution: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GradeStatistics {
    pub by_grade: Vec<GradeStatistic>,
    pub by_department: Vec<DepartmentGrades>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryBounds {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GradeSummary {
    pub total_employees: usize,
    pub total_departments: usize,
    pub total_grades: usize,
    pub avg_salary_all: i64,
    pub salary_range: SalaryBounds,
}

/// Body of `GET /api/views/salary-grades`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalaryGradeReport {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<GradeSummary>,
    pub data: Vec<GradedEmployee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<GradeStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_earners: Option<Vec<GradedEmployee>>,
}

fn average_salary(employees: &[&GradedEmployee]) -> i64 {
    let salaries: Vec<f64> = employees.iter().map(|employee| employee.salary).collect();
    rounded_mean(&salaries)
}

impl SalaryGradeReport {
    /// Summarise rows already ordered by department then salary.
    #[must_use]
    pub fn build(records: Vec<SalaryGradeRecord>) -> Self {
        let employees: Vec<GradedEmployee> =
            records.into_iter().map(GradedEmployee::from).collect();
        let salaries: Vec<f64> = employees.iter().map(|employee| employee.salary).collect();

        let (Some(min), Some(max)) = (
            salaries.iter().copied().reduce(f64::min),
            salaries.iter().copied().reduce(f64::max),
        ) else {
            return Self {
                status: ResponseStatus::Success,
                message: Some("Нет данных по зарплатным грейдам".to_owned()),
                summary: None,
                data: Vec::new(),
                statistics: None,
                top_earners: None,
            };
        };
        let total = employees.len();

        let grades = group_in_order(employees.iter(), |employee| employee.salary_grade.clone());
        let departments = group_in_order(employees.iter(), |employee| employee.department.clone());

        let mut by_grade: Vec<GradeStatistic> = grades
            .iter()
            .map(|(grade, members)| {
                let names: Vec<String> = group_in_order(members.iter(), |member| {
                    member.department.clone()
                })
                .into_iter()
                .map(|(department, _)| department)
                .collect();
                GradeStatistic {
                    grade: grade.clone(),
                    count: members.len(),
                    percentage: percent_of(count_as_f64(members.len()), count_as_f64(total), 1),
                    avg_salary: average_salary(members),
                    departments_count: names.len(),
                    departments: names,
                }
            })
            .collect();
        by_grade.sort_by(|left, right| right.count.cmp(&left.count));

        let by_department: Vec<DepartmentGrades> = departments
            .iter()
            .map(|(department, members)| DepartmentGrades {
                department: department.clone(),
                count: members.len(),
                avg_salary: average_salary(members),
                grade_distribution: grades
                    .iter()
                    .filter(|(grade, _)| members.iter().any(|member| member.salary_grade == *grade))
                    .map(|(grade, _)| grade.clone())
                    .collect(),
            })
            .collect();

        let mut top_earners: Vec<GradedEmployee> = employees
            .iter()
            .filter(|employee| employee.salary_rank_in_department == 1)
            .cloned()
            .collect();
        top_earners.sort_by(|left, right| right.salary.total_cmp(&left.salary));
        top_earners.truncate(TOP_EARNERS);

        Self {
            status: ResponseStatus::Success,
            message: None,
            summary: Some(GradeSummary {
                total_employees: total,
                total_departments: departments.len(),
                total_grades: by_grade.len(),
                avg_salary_all: rounded_mean(&salaries),
                salary_range: SalaryBounds {
                    min,
                    max,
                    range: max - min,
                },
            }),
            statistics: Some(GradeStatistics {
                by_grade,
                by_department,
            }),
            top_earners: Some(top_earners),
            data: employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(
        number: &str,
        department: &str,
        salary: f64,
        grade: &str,
        rank: i64,
    ) -> SalaryGradeRecord {
        SalaryGradeRecord {
            personal_number: number.to_owned(),
            employee_name: format!("Сотрудник {number}"),
            department_name: department.to_owned(),
            position_name: None,
            salary,
            salary_grade: grade.to_owned(),
            deviation_from_position_avg_percent: Some(0.0),
            salary_rank_in_department: rank,
        }
    }

    #[rstest]
    fn empty_report_has_no_summary() {
        let report = SalaryGradeReport::build(Vec::new());
        assert_eq!(
            report.message.as_deref(),
            Some("Нет данных по зарплатным грейдам")
        );
        assert!(report.summary.is_none());
    }

    #[rstest]
    fn grades_and_departments_are_summarised() {
        let report = SalaryGradeReport::build(vec![
            record("A", "Бухгалтерия", 45_000.0, "Средний", 1),
            record("B", "ИТ", 30_000.0, "Средний", 1),
            record("C", "ИТ", 20_000.0, "Низкий", 2),
            record("D", "ИТ", 10_000.0, "Низкий", 3),
            record("E", "Склад", 12_000.0, "Низкий", 1),
        ]);

        let summary = report.summary.expect("summary");
        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.total_departments, 3);
        assert_eq!(summary.total_grades, 2);
        assert_eq!(summary.avg_salary_all, 23_400);
        assert!((summary.salary_range.range - 35_000.0).abs() < f64::EPSILON);

        let statistics = report.statistics.expect("statistics");
        let low = &statistics.by_grade[0];
        assert_eq!(low.grade, "Низкий");
        assert_eq!(low.count, 3);
        assert!((low.percentage - 60.0).abs() < f64::EPSILON);
        assert_eq!(low.avg_salary, 14_000);
        assert_eq!(low.departments, ["ИТ", "Склад"]);

        let it = &statistics.by_department[1];
        assert_eq!(it.department, "ИТ");
        assert_eq!(it.grade_distribution, ["Средний", "Низкий"]);

        let top: Vec<&str> = report
            .top_earners
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|employee| employee.personal_number.as_str())
            .collect();
        assert_eq!(top, ["A", "B", "E"]);
    }
}
