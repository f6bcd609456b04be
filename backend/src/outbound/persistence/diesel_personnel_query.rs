//! PostgreSQL-backed personnel read adapter.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{Date, Integer, Nullable, Text};
use diesel_async::RunQueryDsl;

use crate::domain::commands::{EmployeeLookup, NewEmployee, SalaryLookup};
use crate::domain::ports::{GatewayError, PersonnelQuery};
use crate::domain::records::{
    ActiveEmployeeRecord, DepartmentRef, EmployeeInfoRecord, PayrollSnapshot,
    SalaryAnalysisRecord, SalaryTaxRecord,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::rows::{
    ActiveEmployeeRow, AverageSalaryRow, DepartmentRow, EmployeeIdRow, EmployeeInfoRow,
    HeadcountRow, PayrollSnapshotRow, PresenceRow, SalaryAnalysisRow, SalaryRow, SalaryTaxRow,
};
use super::statements;

/// Diesel-backed implementation of [`PersonnelQuery`].
#[derive(Clone)]
pub struct DieselPersonnelQuery {
    pool: DbPool,
}

impl DieselPersonnelQuery {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonnelQuery for DieselPersonnelQuery {
    async fn employee_info(
        &self,
        lookup: &EmployeeLookup,
    ) -> Result<Option<EmployeeInfoRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EmployeeInfoRow> = sql_query(statements::EMPLOYEE_INFO)
            .bind::<Text, _>(&lookup.middle_name)
            .bind::<Text, _>(&lookup.first_name)
            .bind::<Date, _>(lookup.birth_date)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "employee info"))?;
        Ok(rows.into_iter().next().map(EmployeeInfoRecord::from))
    }

    async fn active_employees(&self) -> Result<Vec<ActiveEmployeeRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ActiveEmployeeRow> = sql_query(statements::ACTIVE_EMPLOYEES)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "active employees"))?;
        Ok(rows.into_iter().map(ActiveEmployeeRecord::from).collect())
    }

    async fn salary_with_taxes(
        &self,
        lookup: &SalaryLookup,
    ) -> Result<Option<SalaryTaxRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SalaryTaxRow> = sql_query(statements::SALARY_WITH_TAXES)
            .bind::<Text, _>(&lookup.middle_name)
            .bind::<Text, _>(&lookup.first_name)
            .bind::<Text, _>(&lookup.last_name)
            .bind::<Date, _>(lookup.birth_date)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "salary with taxes"))?;
        Ok(rows.into_iter().next().map(SalaryTaxRecord::from))
    }

    async fn department(&self, department_id: i32) -> Result<Option<DepartmentRef>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DepartmentRow> = sql_query(statements::DEPARTMENT)
            .bind::<Integer, _>(department_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "department lookup"))?;
        Ok(rows.into_iter().next().map(DepartmentRef::from))
    }

    async fn departments(&self) -> Result<Vec<DepartmentRef>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DepartmentRow> = sql_query(statements::DEPARTMENTS)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "department list"))?;
        Ok(rows.into_iter().map(DepartmentRef::from).collect())
    }

    async fn average_salary(&self, department_id: i32) -> Result<Option<f64>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AverageSalaryRow> = sql_query(statements::AVERAGE_SALARY)
            .bind::<Integer, _>(department_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "average salary"))?;
        Ok(rows.into_iter().next().and_then(|row| row.avg_salary))
    }

    async fn active_salaries(&self, department_id: i32) -> Result<Vec<f64>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SalaryRow> = sql_query(statements::ACTIVE_SALARIES)
            .bind::<Integer, _>(department_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "department salaries"))?;
        Ok(rows.into_iter().map(|row| row.salary).collect())
    }

    async fn salary_analysis(&self) -> Result<Vec<SalaryAnalysisRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SalaryAnalysisRow> = sql_query(statements::SALARY_ANALYSIS)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "salary analysis"))?;
        Ok(rows.into_iter().map(SalaryAnalysisRecord::from).collect())
    }

    async fn payroll_snapshot(&self) -> Result<PayrollSnapshot, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PayrollSnapshotRow> = sql_query(statements::PAYROLL_SNAPSHOT)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "payroll snapshot"))?;
        // An aggregate always yields one row.
        Ok(rows
            .into_iter()
            .next()
            .map(PayrollSnapshot::from)
            .unwrap_or_default())
    }

    async fn duplicate_employee(&self, hire: &NewEmployee) -> Result<Option<i32>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EmployeeIdRow> = sql_query(statements::DUPLICATE_EMPLOYEE)
            .bind::<Text, _>(&hire.first_name)
            .bind::<Text, _>(&hire.last_name)
            .bind::<Nullable<Text>, _>(hire.middle_name.as_deref())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "duplicate employee check"))?;
        Ok(rows.into_iter().next().map(|row| row.employee_id))
    }

    async fn position_in_department(
        &self,
        position_id: i32,
        department_id: i32,
    ) -> Result<bool, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PresenceRow> = sql_query(statements::POSITION_IN_DEPARTMENT)
            .bind::<Integer, _>(position_id)
            .bind::<Integer, _>(department_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "position check"))?;
        Ok(rows.into_iter().next().is_some_and(|row| row.present))
    }

    async fn active_headcount(&self, department_id: i32) -> Result<i64, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HeadcountRow> = sql_query(statements::ACTIVE_HEADCOUNT)
            .bind::<Integer, _>(department_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "active headcount"))?;
        Ok(rows.into_iter().next().map_or(0, |row| row.headcount))
    }

    async fn remaining_headcount(&self, department_id: i32) -> Result<Option<i64>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HeadcountRow> = sql_query(statements::REMAINING_HEADCOUNT)
            .bind::<Integer, _>(department_id)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "remaining headcount"))?;
        Ok(rows.into_iter().next().map(|row| row.headcount))
    }
}
