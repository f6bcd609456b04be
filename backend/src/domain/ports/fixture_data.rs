//! Shared in-memory records backing the fixture ports.

use chrono::NaiveDate;

use super::GatewayError;
use crate::domain::records::{
    ActiveEmployeeRecord, BirthdayRecord, DepartmentRef, EmployeeInfoRecord, PayrollSnapshot,
    ProbationRecord, SalaryAnalysisRecord, SalaryGradeRecord, SalaryRaiseRecord, SalaryTaxRecord,
};

pub(crate) const EMPLOYEE_ID: i32 = 1;
pub(crate) const LAST_NAME: &str = "Иванов";
pub(crate) const FIRST_NAME: &str = "Иван";
pub(crate) const MIDDLE_NAME: &str = "Петрович";

pub(crate) const FIXTURE_DEPARTMENTS: &[(i32, &str)] =
    &[(1, "Информационные технологии"), (2, "Бухгалтерия"), (3, "Склад")];

/// `(position_id, department_id)` pairs.
pub(crate) const POSITIONS: &[(i32, i32)] = &[(1, 1), (2, 1), (3, 2), (4, 3)];

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, GatewayError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| GatewayError::query(format!("invalid fixture date {year}-{month}-{day}")))
}

fn text(value: &str) -> Option<String> {
    Some(value.to_owned())
}

pub(crate) fn departments() -> Vec<DepartmentRef> {
    FIXTURE_DEPARTMENTS
        .iter()
        .map(|&(department_id, name)| DepartmentRef {
            department_id,
            name: name.to_owned(),
        })
        .collect()
}

pub(crate) fn salaries(department_id: i32) -> Vec<f64> {
    match department_id {
        1 => vec![10_000.0, 20_000.0, 30_000.0],
        2 => vec![45_000.0],
        _ => Vec::new(),
    }
}

pub(crate) fn employee_info() -> Result<EmployeeInfoRecord, GatewayError> {
    Ok(EmployeeInfoRecord {
        employee_id: EMPLOYEE_ID,
        personal_number: "EMP-0001".to_owned(),
        full_name: format!("{LAST_NAME} {FIRST_NAME} {MIDDLE_NAME}"),
        birth_date: Some(date(1990, 5, 15)?),
        age: Some(35),
        department_name: text("Информационные технологии"),
        position_name: text("Разработчик"),
        salary: Some(30_000.0),
        hire_date: Some(date(2019, 9, 2)?),
        experience_years: Some(6.0),
        education: text("Высшее"),
        status: text("активен"),
        phone_number: text("79161234567"),
        email: text("ivanov@example.ru"),
    })
}

pub(crate) fn active_employees() -> Result<Vec<ActiveEmployeeRecord>, GatewayError> {
    Ok(vec![
        ActiveEmployeeRecord {
            personal_number: "EMP-0001".to_owned(),
            last_name: LAST_NAME.to_owned(),
            first_name: FIRST_NAME.to_owned(),
            middle_name: text(MIDDLE_NAME),
            birth_date: Some(date(1990, 5, 15)?),
            department_name: "Информационные технологии".to_owned(),
            position_name: text("Разработчик"),
            status: text("активен"),
        },
        ActiveEmployeeRecord {
            personal_number: "EMP-0002".to_owned(),
            last_name: "Смирнова".to_owned(),
            first_name: "Анна".to_owned(),
            middle_name: None,
            birth_date: Some(date(1985, 11, 3)?),
            department_name: "Информационные технологии".to_owned(),
            position_name: text("Тестировщик"),
            status: text("активен"),
        },
        ActiveEmployeeRecord {
            personal_number: "EMP-0003".to_owned(),
            last_name: "Кузнецов".to_owned(),
            first_name: "Олег".to_owned(),
            middle_name: text("Сергеевич"),
            birth_date: Some(date(1978, 2, 20)?),
            department_name: "Бухгалтерия".to_owned(),
            position_name: text("Бухгалтер"),
            status: text("активен"),
        },
    ])
}

pub(crate) fn salary_taxes() -> Result<SalaryTaxRecord, GatewayError> {
    Ok(SalaryTaxRecord {
        employee_id: EMPLOYEE_ID,
        personal_number: "EMP-0001".to_owned(),
        full_name: format!("{LAST_NAME} {FIRST_NAME} {MIDDLE_NAME}"),
        birth_date: Some(date(1990, 5, 15)?),
        age: Some(35),
        department_name: text("Информационные технологии"),
        position_name: text("Разработчик"),
        hire_date: Some(date(2019, 9, 2)?),
        experience_years: Some(6.0),
        gross_salary: 100_000.0,
        tax_ndfl: 13_000.0,
        tax_pension: 22_000.0,
        tax_medical: 5_100.0,
        tax_social: 2_900.0,
        total_taxes: 43_000.0,
        net_salary: 87_000.0,
        total_cost: 130_000.0,
    })
}

pub(crate) fn salary_analysis() -> Vec<SalaryAnalysisRecord> {
    vec![
        SalaryAnalysisRecord {
            department_name: text("ИТОГО"),
            employee_count: 4,
            min_salary: Some(10_000.0),
            max_salary: Some(45_000.0),
            avg_salary: Some(26_250.0),
            department_salary_budget: Some(105_000.0),
            employees_list: None,
        },
        SalaryAnalysisRecord {
            department_name: text("Информационные технологии"),
            employee_count: 3,
            min_salary: Some(10_000.0),
            max_salary: Some(30_000.0),
            avg_salary: Some(20_000.0),
            department_salary_budget: Some(60_000.0),
            employees_list: text("Иванов И.П., Смирнова А., Петров П.П."),
        },
        SalaryAnalysisRecord {
            department_name: text("Бухгалтерия"),
            employee_count: 1,
            min_salary: Some(45_000.0),
            max_salary: Some(45_000.0),
            avg_salary: Some(45_000.0),
            department_salary_budget: Some(45_000.0),
            employees_list: text("Кузнецов О.С."),
        },
    ]
}

pub(crate) fn payroll_snapshot() -> PayrollSnapshot {
    PayrollSnapshot {
        total_employees: 4,
        total_budget: 105_000.0,
        avg_salary: Some(26_250.0),
    }
}

pub(crate) fn salary_raises() -> Vec<SalaryRaiseRecord> {
    vec![
        SalaryRaiseRecord {
            employee_id: EMPLOYEE_ID,
            personal_number: "EMP-0001".to_owned(),
            full_name: format!("{LAST_NAME} {FIRST_NAME} {MIDDLE_NAME}"),
            old_salary: 30_000.0,
            new_salary: 39_000.0,
            experience_years: Some(6.0),
            status: "Повышена на 30%".to_owned(),
        },
        SalaryRaiseRecord {
            employee_id: 2,
            personal_number: "EMP-0002".to_owned(),
            full_name: "Смирнова Анна".to_owned(),
            old_salary: 20_000.0,
            new_salary: 20_000.0,
            experience_years: Some(0.5),
            status: "Без изменений".to_owned(),
        },
    ]
}

pub(crate) fn probation() -> Result<Vec<ProbationRecord>, GatewayError> {
    Ok(vec![
        ProbationRecord {
            employee_id: 2,
            personal_number: "EMP-0002".to_owned(),
            last_name: "Смирнова".to_owned(),
            first_name: "Анна".to_owned(),
            middle_name: None,
            department_name: text("Информационные технологии"),
            position_name: text("Тестировщик"),
            hire_date: Some(date(2026, 1, 12)?),
            probation_period: 90,
            probation_end_date: Some(date(2026, 4, 12)?),
            probation_status: "На испытательном сроке".to_owned(),
            days_worked: 62,
        },
        ProbationRecord {
            employee_id: 3,
            personal_number: "EMP-0003".to_owned(),
            last_name: "Кузнецов".to_owned(),
            first_name: "Олег".to_owned(),
            middle_name: text("Сергеевич"),
            department_name: text("Бухгалтерия"),
            position_name: text("Бухгалтер"),
            hire_date: Some(date(2025, 6, 1)?),
            probation_period: 60,
            probation_end_date: Some(date(2025, 7, 31)?),
            probation_status: "Испытательный срок пройден".to_owned(),
            days_worked: 287,
        },
    ])
}

pub(crate) fn salary_grades() -> Vec<SalaryGradeRecord> {
    vec![
        SalaryGradeRecord {
            personal_number: "EMP-0003".to_owned(),
            employee_name: "Кузнецов Олег Сергеевич".to_owned(),
            department_name: "Бухгалтерия".to_owned(),
            position_name: text("Бухгалтер"),
            salary: 45_000.0,
            salary_grade: "Средний".to_owned(),
            deviation_from_position_avg_percent: Some(0.0),
            salary_rank_in_department: 1,
        },
        SalaryGradeRecord {
            personal_number: "EMP-0001".to_owned(),
            employee_name: format!("{LAST_NAME} {FIRST_NAME} {MIDDLE_NAME}"),
            department_name: "Информационные технологии".to_owned(),
            position_name: text("Разработчик"),
            salary: 30_000.0,
            salary_grade: "Средний".to_owned(),
            deviation_from_position_avg_percent: Some(50.0),
            salary_rank_in_department: 1,
        },
        SalaryGradeRecord {
            personal_number: "EMP-0002".to_owned(),
            employee_name: "Смирнова Анна".to_owned(),
            department_name: "Информационные технологии".to_owned(),
            position_name: text("Тестировщик"),
            salary: 20_000.0,
            salary_grade: "Низкий".to_owned(),
            deviation_from_position_avg_percent: Some(-33.3),
            salary_rank_in_department: 2,
        },
    ]
}

pub(crate) fn birthdays() -> Result<Vec<BirthdayRecord>, GatewayError> {
    Ok(vec![
        BirthdayRecord {
            employee_id: 3,
            personal_number: "EMP-0003".to_owned(),
            last_name: "Кузнецов".to_owned(),
            first_name: "Олег".to_owned(),
            middle_name: text("Сергеевич"),
            department_name: text("Бухгалтерия"),
            birth_date: date(1976, 3, 20)?,
            birth_day: 20,
            birth_month: 3,
            current_age: 49,
            next_birthday: Some(date(2026, 3, 20)?),
            days_until_birthday: 5,
            hire_date: Some(date(2025, 6, 1)?),
            years_in_company: Some(0),
            birthday_status: "Скоро".to_owned(),
        },
        BirthdayRecord {
            employee_id: EMPLOYEE_ID,
            personal_number: "EMP-0001".to_owned(),
            last_name: LAST_NAME.to_owned(),
            first_name: FIRST_NAME.to_owned(),
            middle_name: text(MIDDLE_NAME),
            department_name: text("Информационные технологии"),
            birth_date: date(1990, 5, 15)?,
            birth_day: 15,
            birth_month: 5,
            current_age: 35,
            next_birthday: Some(date(2026, 5, 15)?),
            days_until_birthday: 61,
            hire_date: Some(date(2019, 9, 2)?),
            years_in_company: Some(6),
            birthday_status: "В этом году".to_owned(),
        },
    ])
}
