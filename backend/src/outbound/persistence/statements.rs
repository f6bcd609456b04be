//! Fixed SQL statements issued by the personnel adapters.
//!
//! Parameter order is part of each routine's signature and must not change.
//! Numeric columns are cast to `float8` and non-ASCII column names are
//! aliased so rows decode into plain `QueryableByName` structs.

/// `$1` middle name, `$2` first name, `$3` birth date.
pub(super) const EMPLOYEE_INFO: &str = r"
SELECT employee_id::int4 AS employee_id,
       personal_number,
       full_name,
       birth_date,
       age::int4 AS age,
       department_name,
       position_name,
       salary::float8 AS salary,
       hire_date,
       experience_years::float8 AS experience_years,
       education,
       status,
       phone_number,
       email
FROM func_get_employee_info($1, $2, $3)
";

pub(super) const ACTIVE_EMPLOYEES: &str = r"
SELECT табельный_номер AS personal_number,
       фамилия AS last_name,
       имя AS first_name,
       отчество AS middle_name,
       дата_рождения AS birth_date,
       отдел AS department_name,
       должность AS position_name,
       статус AS status
FROM get_active_employees()
";

/// `$1` middle name, `$2` first name, `$3` last name, `$4` birth date.
pub(super) const SALARY_WITH_TAXES: &str = r"
SELECT employee_id::int4 AS employee_id,
       personal_number,
       full_name,
       birth_date,
       age::int4 AS age,
       department_name,
       position_name,
       hire_date,
       experience_years::float8 AS experience_years,
       gross_salary::float8 AS gross_salary,
       tax_ndfl::float8 AS tax_ndfl,
       tax_pension::float8 AS tax_pension,
       tax_medical::float8 AS tax_medical,
       tax_social::float8 AS tax_social,
       total_taxes::float8 AS total_taxes,
       net_salary::float8 AS net_salary,
       total_cost::float8 AS total_cost
FROM func_calculate_salary_with_taxes_by_fio($1, $2, $3, $4)
";

pub(super) const SALARY_RAISE: &str = r"
SELECT emp_id::int4 AS employee_id,
       tab_number AS personal_number,
       fio AS full_name,
       old_sal::float8 AS old_salary,
       new_sal::float8 AS new_salary,
       exp_years::float8 AS experience_years,
       status
FROM func_update_all_employee_salaries()
";

pub(super) const PAYROLL_SNAPSHOT: &str = r"
SELECT COUNT(*) AS total_employees,
       COALESCE(SUM(ec.salary), 0)::float8 AS total_budget,
       AVG(ec.salary)::float8 AS avg_salary
FROM employees e
JOIN employment_contract ec ON e.contract_id = ec.contract_id
WHERE e.status = 'активен'
";

/// `$1` department id.
pub(super) const AVERAGE_SALARY: &str =
    "SELECT get_avg_salary_by_department($1)::float8 AS avg_salary";

/// `$1` department id.
pub(super) const ACTIVE_SALARIES: &str = r"
SELECT ec.salary::float8 AS salary
FROM employees e
JOIN employment_contract ec ON e.contract_id = ec.contract_id
WHERE e.department_id = $1 AND e.status = 'активен'
";

pub(super) const SALARY_ANALYSIS: &str = r"
SELECT department_name,
       employee_count::int8 AS employee_count,
       min_salary::float8 AS min_salary,
       max_salary::float8 AS max_salary,
       avg_salary::float8 AS avg_salary,
       department_salary_budget::float8 AS department_salary_budget,
       employees_list::text AS employees_list
FROM get_salary_analysis_wrapper_enhanced()
";

/// `$1` department id.
pub(super) const DEPARTMENT: &str =
    "SELECT department_id, name FROM departments WHERE department_id = $1";

pub(super) const DEPARTMENTS: &str = "SELECT department_id, name FROM departments ORDER BY name";

/// `$1` first name, `$2` last name, `$3` middle name or `NULL`.
pub(super) const DUPLICATE_EMPLOYEE: &str = r"
SELECT employee_id
FROM employees
WHERE first_name = $1
  AND last_name = $2
  AND (middle_name = $3 OR (middle_name IS NULL AND $3 IS NULL))
LIMIT 1
";

/// `$1` position id, `$2` department id.
pub(super) const POSITION_IN_DEPARTMENT: &str = r"
SELECT EXISTS (
    SELECT 1 FROM position WHERE position_id = $1 AND department_id = $2
) AS present
";

/// `$1` department id.
pub(super) const ACTIVE_HEADCOUNT: &str = r"
SELECT COUNT(*) AS headcount
FROM employees
WHERE department_id = $1 AND status = 'активен'
";

/// `$1` department id. No row once the department is gone.
pub(super) const REMAINING_HEADCOUNT: &str = r"
SELECT (
    SELECT COUNT(*)
    FROM employees e
    WHERE e.department_id = d.department_id AND e.status = 'активен'
) AS headcount
FROM departments d
WHERE d.department_id = $1
";

/// Eighteen inputs followed by the `p_employee_id`, `p_status` and
/// `p_message` out-parameters.
pub(super) const ADD_EMPLOYEE: &str = r"
CALL add_employee(
    $1::VARCHAR(20),
    $2::VARCHAR(50),
    $3::VARCHAR(50),
    $4::VARCHAR(50),
    $5::DATE,
    $6::VARCHAR(10),
    $7::VARCHAR(12),
    $8::VARCHAR(14),
    $9::VARCHAR(100),
    $10::VARCHAR(11),
    $11::INTEGER,
    $12::INTEGER,
    $13::VARCHAR(100),
    $14::VARCHAR(50),
    $15::DATE,
    $16::DATE,
    $17::NUMERIC,
    $18::NUMERIC,
    NULL::INTEGER,
    NULL::VARCHAR(10),
    NULL::VARCHAR(255)
)
";

/// `$1` department to delete, `$2` target department, `$3` reason.
pub(super) const DELETE_DEPARTMENT: &str = r"
CALL delete_department_with_transfer(
    $1::INTEGER,
    $2::INTEGER,
    $3::VARCHAR(100),
    NULL::VARCHAR(50),
    NULL::VARCHAR(200)
)
";

/// `$1` middle name, `$2` first name, `$3` last name, `$4` department,
/// `$5` position, `$6` reason.
pub(super) const DISMISS_EMPLOYEE: &str = r"
CALL dismiss_specific_employee(
    $1::VARCHAR(50),
    $2::VARCHAR(50),
    $3::VARCHAR(50),
    $4::VARCHAR(50),
    $5::VARCHAR(50),
    $6::VARCHAR(255),
    NULL::VARCHAR(10),
    NULL::VARCHAR(255)
)
";

pub(super) const PROBATION: &str = r"
SELECT employee_id::int4 AS employee_id,
       personal_number,
       last_name,
       first_name,
       middle_name,
       department_name,
       position_name,
       hire_date,
       probation_period::int4 AS probation_period,
       probation_end_date,
       probation_status,
       days_worked::int4 AS days_worked
FROM v_employees_on_probation
";

/// `$1` department pattern, `$2` grade pattern, `$3` minimum salary,
/// `$4` maximum salary. A `NULL` parameter disables its filter.
pub(super) const SALARY_GRADES: &str = r"
SELECT personal_number,
       employee_name,
       department_name,
       position_name,
       salary::float8 AS salary,
       salary_grade,
       deviation_from_position_avg_percent::float8 AS deviation_from_position_avg_percent,
       salary_rank_in_department::int8 AS salary_rank_in_department
FROM v_salary_grades
WHERE ($1::text IS NULL OR LOWER(department_name) LIKE $1)
  AND ($2::text IS NULL OR LOWER(salary_grade) LIKE $2)
  AND ($3::float8 IS NULL OR salary >= $3)
  AND ($4::float8 IS NULL OR salary <= $4)
ORDER BY department_name, salary DESC
";

/// `$1` birth month, `$2` department pattern, `$3` horizon in days.
/// A `NULL` parameter disables its filter.
pub(super) const BIRTHDAYS: &str = r"
SELECT employee_id::int4 AS employee_id,
       personal_number,
       last_name,
       first_name,
       middle_name,
       department_name,
       birth_date,
       birth_day::int4 AS birth_day,
       birth_month::int4 AS birth_month,
       current_age::int4 AS current_age,
       next_birthday,
       days_until_birthday::int4 AS days_until_birthday,
       hire_date,
       years_in_company::int4 AS years_in_company,
       birthday_status
FROM v_employee_birthdays
WHERE ($1::int4 IS NULL OR EXTRACT(MONTH FROM birth_date) = $1)
  AND ($2::text IS NULL OR LOWER(department_name) LIKE $2)
  AND ($3::int4 IS NULL OR days_until_birthday <= $3)
ORDER BY birth_month, birth_day
";
