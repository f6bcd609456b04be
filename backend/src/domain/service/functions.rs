//! Endpoints backed by database functions under `/api/functions`.

use serde_json::json;
use tracing::{info, warn};

use super::PersonnelService;
use crate::domain::Error;
use crate::domain::classifier::Operation;
use crate::domain::commands::{
    DepartmentSelector, DepartmentSelectorDraft, EmployeeLookup, EmployeeLookupDraft,
    SalaryLookup, SalaryLookupDraft, SalaryRaiseDraft,
};
use crate::domain::reports::{
    ActiveEmployeesResponse, AllDepartmentsResponse, DepartmentSalaryResponse,
    EmployeeInfoResponse, SalaryRaiseResponse, SalaryTaxResponse, raise_warning,
};

const EMPLOYEE_NOT_FOUND: &str = "Сотрудник не найден. Проверьте введенные данные.";
const RAISE_CONFIRMATION: &str = "Эта операция обновит зарплаты всех сотрудников. \
     Для подтверждения отправьте confirm: true в теле запроса.";

impl PersonnelService {
    /// Look up one employee by first name, patronymic and birth date.
    pub async fn employee_info(
        &self,
        draft: &EmployeeLookupDraft,
    ) -> Result<EmployeeInfoResponse, Error> {
        let lookup = EmployeeLookup::validate(draft, self.today())?;
        let record = self
            .personnel
            .employee_info(&lookup)
            .await
            .map_err(self.classify(Operation::EmployeeInfo))?;
        let Some(record) = record else {
            warn!(first_name = %lookup.first_name, "employee lookup matched nothing");
            return Err(Error::not_found(EMPLOYEE_NOT_FOUND).with_details(json!({
                "search_criteria": {
                    "first_name": lookup.first_name,
                    "middle_name": lookup.middle_name,
                    "birth_date": lookup.birth_date.format("%Y-%m-%d").to_string(),
                }
            })));
        };
        Ok(EmployeeInfoResponse::from(record))
    }

    pub async fn active_employees(&self) -> Result<ActiveEmployeesResponse, Error> {
        let records = self
            .personnel
            .active_employees()
            .await
            .map_err(self.classify(Operation::ActiveEmployees))?;
        Ok(ActiveEmployeesResponse::build(records, self.today()))
    }

    /// Apply the tenure-based raise to every active employee.
    ///
    /// Nothing is written unless the draft carries an explicit confirmation.
    pub async fn raise_salaries(
        &self,
        draft: &SalaryRaiseDraft,
    ) -> Result<SalaryRaiseResponse, Error> {
        if !draft.is_confirmed() {
            return Err(Error::confirmation_required(RAISE_CONFIRMATION).with_details(json!({
                "warning": raise_warning(),
                "required": { "confirm": true },
            })));
        }
        let classify = self.classify(Operation::SalaryRaise);
        let before = self.personnel.payroll_snapshot().await.map_err(&classify)?;
        let raises = self
            .commands
            .raise_salaries_by_tenure()
            .await
            .map_err(&classify)?;
        let after = self.personnel.payroll_snapshot().await.map_err(&classify)?;
        info!(
            processed = raises.len(),
            budget_before = before.total_budget,
            budget_after = after.total_budget,
            "salaries raised by tenure"
        );
        let now = self.now();
        Ok(SalaryRaiseResponse::build(&raises, before, after, now))
    }

    /// Gross salary, statutory taxes and employer cost for one employee.
    pub async fn salary_with_taxes(
        &self,
        draft: &SalaryLookupDraft,
    ) -> Result<SalaryTaxResponse, Error> {
        let lookup = SalaryLookup::validate(draft, self.today())?;
        let record = self
            .personnel
            .salary_with_taxes(&lookup)
            .await
            .map_err(self.classify(Operation::SalaryCalculation))?;
        record
            .map(SalaryTaxResponse::from)
            .ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
    }

    /// Salary analysis of one department, chosen by path or body.
    pub async fn department_salary(
        &self,
        path: Option<&str>,
        draft: &DepartmentSelectorDraft,
    ) -> Result<DepartmentSalaryResponse, Error> {
        let department_id = DepartmentSelector::resolve(path, draft.department_id.as_deref())?.id();
        let classify = self.classify(Operation::DepartmentSalary);
        let department = self
            .personnel
            .department(department_id)
            .await
            .map_err(&classify)?
            .ok_or_else(|| Error::not_found(format!("Отдел с ID {department_id} не найден")))?;
        let average = self
            .personnel
            .average_salary(department_id)
            .await
            .map_err(&classify)?;
        let salaries = self
            .personnel
            .active_salaries(department_id)
            .await
            .map_err(&classify)?;
        Ok(DepartmentSalaryResponse::build(
            department,
            average,
            &salaries,
            self.now(),
        ))
    }

    /// Average salary of every department, highest first.
    pub async fn all_department_salaries(&self) -> Result<AllDepartmentsResponse, Error> {
        let classify = self.classify(Operation::AllDepartmentSalaries);
        let departments = self.personnel.departments().await.map_err(&classify)?;
        let mut averages = Vec::with_capacity(departments.len());
        for department in departments {
            let average = self
                .personnel
                .average_salary(department.department_id)
                .await
                .map_err(&classify)?;
            averages.push((department, average.unwrap_or(0.0)));
        }
        Ok(AllDepartmentsResponse::build(averages, self.now()))
    }
}
