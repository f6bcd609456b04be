//! PostgreSQL-backed adapter for the reporting views.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{Double, Integer, Nullable, Text};
use diesel_async::RunQueryDsl;

use crate::domain::commands::{BirthdayFilter, GradeFilter};
use crate::domain::ports::{GatewayError, ReportsQuery};
use crate::domain::records::{BirthdayRecord, ProbationRecord, SalaryGradeRecord};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::rows::{BirthdayRow, ProbationRow, SalaryGradeRow};
use super::statements;

/// Diesel-backed implementation of [`ReportsQuery`].
#[derive(Clone)]
pub struct DieselReportsQuery {
    pool: DbPool,
}

impl DieselReportsQuery {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportsQuery for DieselReportsQuery {
    async fn probation(&self) -> Result<Vec<ProbationRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProbationRow> = sql_query(statements::PROBATION)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "probation view"))?;
        Ok(rows.into_iter().map(ProbationRecord::from).collect())
    }

    async fn salary_grades(
        &self,
        filter: &GradeFilter,
    ) -> Result<Vec<SalaryGradeRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SalaryGradeRow> = sql_query(statements::SALARY_GRADES)
            .bind::<Nullable<Text>, _>(filter.department_pattern.as_deref())
            .bind::<Nullable<Text>, _>(filter.grade_pattern.as_deref())
            .bind::<Nullable<Double>, _>(filter.min_salary)
            .bind::<Nullable<Double>, _>(filter.max_salary)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "salary grade view"))?;
        Ok(rows.into_iter().map(SalaryGradeRecord::from).collect())
    }

    async fn birthdays(
        &self,
        filter: &BirthdayFilter,
    ) -> Result<Vec<BirthdayRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BirthdayRow> = sql_query(statements::BIRTHDAYS)
            .bind::<Nullable<Integer>, _>(filter.month)
            .bind::<Nullable<Text>, _>(filter.department_pattern.as_deref())
            .bind::<Nullable<Integer>, _>(filter.upcoming_days)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "birthday view"))?;
        Ok(rows.into_iter().map(BirthdayRecord::from).collect())
    }
}
