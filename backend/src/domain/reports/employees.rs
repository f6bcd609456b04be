//! Employee lookup and active-staff responses.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::format::{count_as_f64, percent_of, rounded_mean, rubles};
use super::grouping::group_in_order;
use crate::domain::envelope::ResponseStatus;
use crate::domain::records::{ActiveEmployeeRecord, EmployeeInfoRecord};
use crate::domain::validation::age_on;

/// Full profile row of one employee.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeProfile {
    pub employee_id: i32,
    pub personal_number: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub experience_years: Option<f64>,
    pub education: Option<String>,
    pub status: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

/// Human-readable employment summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WorkInfo {
    pub department: Option<String>,
    pub position: Option<String>,
    #[schema(example = "100\u{a0}000,00\u{a0}₽")]
    pub salary: String,
    #[schema(example = "5 лет")]
    pub experience: String,
    pub hire_date: Option<NaiveDate>,
}

/// Body of `POST /api/functions/employee-info`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeInfoResponse {
    pub status: ResponseStatus,
    pub data: EmployeeProfile,
    pub contact_info: ContactInfo,
    pub work_info: WorkInfo,
}

impl From<EmployeeInfoRecord> for EmployeeInfoResponse {
    fn from(record: EmployeeInfoRecord) -> Self {
        let contact_info = ContactInfo {
            phone: record.phone_number.clone(),
            email: record.email.clone(),
            status: record.status.clone(),
        };
        let work_info = WorkInfo {
            department: record.department_name.clone(),
            position: record.position_name.clone(),
            salary: rubles(record.salary.unwrap_or_default()),
            experience: format!("{} лет", record.experience_years.unwrap_or_default()),
            hire_date: record.hire_date,
        };
        Self {
            status: ResponseStatus::Success,
            data: EmployeeProfile {
                employee_id: record.employee_id,
                personal_number: record.personal_number,
                full_name: record.full_name,
                birth_date: record.birth_date,
                age: record.age,
                department: record.department_name,
                position: record.position_name,
                salary: record.salary,
                hire_date: record.hire_date,
                experience_years: record.experience_years,
                education: record.education,
                status: record.status,
                phone_number: record.phone_number,
                email: record.email,
            },
            contact_info,
            work_info,
        }
    }
}

/// One active employee with derived name and age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActiveEmployee {
    pub personal_number: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub department: String,
    pub position: Option<String>,
    pub status: Option<String>,
    pub full_name: String,
    pub age: Option<i32>,
}

impl ActiveEmployee {
    fn from_record(record: ActiveEmployeeRecord, today: NaiveDate) -> Self {
        Self {
            full_name: record.full_name(),
            age: record.birth_date.map(|birth| age_on(birth, today)),
            personal_number: record.personal_number,
            last_name: record.last_name,
            first_name: record.first_name,
            middle_name: record.middle_name,
            birth_date: record.birth_date,
            department: record.department_name,
            position: record.position_name,
            status: record.status,
        }
    }
}

/// Active employees of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentRoster {
    pub department_name: String,
    pub employees: Vec<ActiveEmployee>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActiveEmployeesSummary {
    pub total_employees: usize,
    pub total_departments: usize,
    pub departments: Vec<DepartmentRoster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentShare {
    pub department: String,
    pub count: usize,
    /// Whole percent of all active employees.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActiveEmployeesStatistics {
    pub by_department: Vec<DepartmentShare>,
    pub average_age: i64,
}

/// Body of `GET /api/functions/active-employees`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActiveEmployeesResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<ActiveEmployee>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ActiveEmployeesSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ActiveEmployeesStatistics>,
}

impl ActiveEmployeesResponse {
    /// Build the listing with departments ordered by headcount, largest
    /// first.
    #[must_use]
    pub fn build(records: Vec<ActiveEmployeeRecord>, today: NaiveDate) -> Self {
        if records.is_empty() {
            return Self {
                status: ResponseStatus::Success,
                message: Some("Нет активных сотрудников".to_owned()),
                data: Vec::new(),
                count: 0,
                summary: None,
                statistics: None,
            };
        }

        let employees: Vec<ActiveEmployee> = records
            .into_iter()
            .map(|record| ActiveEmployee::from_record(record, today))
            .collect();
        let total = employees.len();

        let mut departments: Vec<DepartmentRoster> =
            group_in_order(employees.iter().cloned(), |employee| employee.department.clone())
                .into_iter()
                .map(|(department_name, members)| DepartmentRoster {
                    department_name,
                    count: members.len(),
                    employees: members,
                })
                .collect();
        departments.sort_by(|left, right| right.count.cmp(&left.count));

        let by_department = departments
            .iter()
            .map(|roster| DepartmentShare {
                department: roster.department_name.clone(),
                count: roster.count,
                percentage: percent_of(count_as_f64(roster.count), count_as_f64(total), 0),
            })
            .collect();

        let ages: Vec<f64> = employees
            .iter()
            .filter_map(|employee| employee.age)
            .map(f64::from)
            .collect();
        let average_age = rounded_mean(&ages);

        Self {
            status: ResponseStatus::Success,
            message: None,
            count: total,
            summary: Some(ActiveEmployeesSummary {
                total_employees: total,
                total_departments: departments.len(),
                departments,
            }),
            statistics: Some(ActiveEmployeesStatistics {
                by_department,
                average_age,
            }),
            data: employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn record(last: &str, department: &str, birth: NaiveDate) -> ActiveEmployeeRecord {
        ActiveEmployeeRecord {
            personal_number: format!("EMP-{last}"),
            last_name: last.to_owned(),
            first_name: "Анна".to_owned(),
            middle_name: None,
            birth_date: Some(birth),
            department_name: department.to_owned(),
            position_name: Some("Инженер".to_owned()),
            status: Some("активен".to_owned()),
        }
    }

    #[fixture]
    fn today() -> NaiveDate {
        date(2026, 3, 15)
    }

    #[rstest]
    fn empty_listing_is_success_with_zero_count(today: NaiveDate) {
        let response = ActiveEmployeesResponse::build(Vec::new(), today);
        assert_eq!(response.status, ResponseStatus::Success);
        assert_eq!(response.count, 0);
        assert!(response.data.is_empty());

        let body = serde_json::to_value(&response).expect("serialise");
        assert_eq!(body["status"], "success");
        assert_eq!(body["count"], 0);
        assert!(body.get("summary").is_none());
    }

    #[rstest]
    fn departments_sort_by_headcount(today: NaiveDate) {
        let records = vec![
            record("Соколова", "Склад", date(1990, 1, 1)),
            record("Петрова", "Бухгалтерия", date(1980, 6, 1)),
            record("Орлова", "Бухгалтерия", date(2000, 12, 31)),
        ];
        let response = ActiveEmployeesResponse::build(records, today);

        let summary = response.summary.expect("summary");
        let names: Vec<&str> = summary
            .departments
            .iter()
            .map(|roster| roster.department_name.as_str())
            .collect();
        assert_eq!(names, ["Бухгалтерия", "Склад"]);
        assert_eq!(summary.total_departments, 2);

        let statistics = response.statistics.expect("statistics");
        assert!((statistics.by_department[0].percentage - 67.0).abs() < f64::EPSILON);
        assert!((statistics.by_department[1].percentage - 33.0).abs() < f64::EPSILON);
        // Ages 36, 45 and 25.
        assert_eq!(statistics.average_age, 35);
    }

    #[rstest]
    fn employee_age_uses_birthday_boundary(today: NaiveDate) {
        let response =
            ActiveEmployeesResponse::build(vec![record("Ким", "Склад", date(2000, 3, 16))], today);
        assert_eq!(response.data[0].age, Some(25));
        assert_eq!(response.data[0].full_name, "Ким Анна");
    }
}
