//! PostgreSQL-backed adapter for the personnel stored procedures.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{Date, Double, Integer, Nullable, Text};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::commands::{DepartmentRemoval, Dismissal, NewEmployee};
use crate::domain::ports::{GatewayError, PersonnelCommand};
use crate::domain::records::SalaryRaiseRecord;
use crate::domain::{ProcedureReceipt, RoutineOutcome};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::rows::{HireOutcomeRow, SalaryRaiseRow, StatusRow};
use super::statements;

/// Diesel-backed implementation of [`PersonnelCommand`].
#[derive(Clone)]
pub struct DieselPersonnelCommand {
    pool: DbPool,
}

impl DieselPersonnelCommand {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Fold a routine exception back into the outcome it stands for.
///
/// Dismissal and department removal refuse by raising; `add_employee`
/// refuses through `p_status` and keeps its exceptions as errors.
fn rejection_as_outcome<T>(
    result: Result<RoutineOutcome<T>, GatewayError>,
) -> Result<RoutineOutcome<T>, GatewayError> {
    match result {
        Err(GatewayError::Rejected { kind, message }) => {
            debug!(?kind, %message, "routine raised a business exception");
            Ok(RoutineOutcome::rejected(kind, message))
        }
        other => other,
    }
}

impl DieselPersonnelCommand {
    async fn call_add_employee(
        &self,
        hire: &NewEmployee,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HireOutcomeRow> = sql_query(statements::ADD_EMPLOYEE)
            .bind::<Text, _>(&hire.personal_number)
            .bind::<Nullable<Text>, _>(hire.middle_name.as_deref())
            .bind::<Text, _>(&hire.first_name)
            .bind::<Text, _>(&hire.last_name)
            .bind::<Date, _>(hire.birth_date)
            .bind::<Text, _>(&hire.passport)
            .bind::<Text, _>(&hire.inn)
            .bind::<Text, _>(&hire.snils)
            .bind::<Nullable<Text>, _>(hire.address.as_deref())
            .bind::<Text, _>(&hire.phone_number)
            .bind::<Integer, _>(hire.department_id)
            .bind::<Integer, _>(hire.position_id)
            .bind::<Text, _>(&hire.education)
            .bind::<Nullable<Text>, _>(hire.diploma_number.as_deref())
            .bind::<Date, _>(hire.finish_date)
            .bind::<Date, _>(hire.hire_date)
            .bind::<Double, _>(hire.salary)
            .bind::<Integer, _>(hire.probation_period)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "add_employee"))?;
        // The procedure reports through its final row.
        let row = rows
            .into_iter()
            .last()
            .ok_or_else(GatewayError::missing_result)?;
        let message = row.p_message.unwrap_or_default();
        Ok(RoutineOutcome::from_status(
            row.p_status.as_deref(),
            message.clone(),
            ProcedureReceipt {
                message,
                employee_id: row.p_employee_id,
            },
        ))
    }

    async fn call_dismiss_employee(
        &self,
        dismissal: &Dismissal,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<StatusRow> = sql_query(statements::DISMISS_EMPLOYEE)
            .bind::<Nullable<Text>, _>(dismissal.middle_name.as_deref())
            .bind::<Text, _>(&dismissal.first_name)
            .bind::<Text, _>(&dismissal.last_name)
            .bind::<Text, _>(&dismissal.department_name)
            .bind::<Text, _>(&dismissal.position_name)
            .bind::<Text, _>(&dismissal.reason)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "dismiss_specific_employee"))?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(GatewayError::missing_result)?;
        let message = row.p_message.unwrap_or_default();
        Ok(RoutineOutcome::from_status(
            row.p_status.as_deref(),
            message.clone(),
            ProcedureReceipt {
                message,
                employee_id: None,
            },
        ))
    }

    async fn call_remove_department(
        &self,
        removal: &DepartmentRemoval,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Refusals arrive as exceptions; the follow-up headcount decides
        // whether the department is gone.
        sql_query(statements::DELETE_DEPARTMENT)
            .bind::<Integer, _>(removal.department_id)
            .bind::<Integer, _>(removal.target_department_id)
            .bind::<Text, _>(&removal.reason)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete_department_with_transfer"))?;
        Ok(RoutineOutcome::Ok(ProcedureReceipt {
            message: format!("Отдел {} обработан", removal.department_id),
            employee_id: None,
        }))
    }
}

#[async_trait]
impl PersonnelCommand for DieselPersonnelCommand {
    async fn add_employee(
        &self,
        hire: &NewEmployee,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        // Only `p_status` refusals become outcomes; exceptions stay errors.
        self.call_add_employee(hire).await
    }

    async fn dismiss_employee(
        &self,
        dismissal: &Dismissal,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        rejection_as_outcome(self.call_dismiss_employee(dismissal).await)
    }

    async fn remove_department(
        &self,
        removal: &DepartmentRemoval,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        rejection_as_outcome(self.call_remove_department(removal).await)
    }

    async fn raise_salaries_by_tenure(&self) -> Result<Vec<SalaryRaiseRecord>, GatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SalaryRaiseRow> = sql_query(statements::SALARY_RAISE)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "salary raise"))?;
        Ok(rows.into_iter().map(SalaryRaiseRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RejectionKind;
    use rstest::rstest;

    #[rstest]
    fn routine_exceptions_become_outcomes() {
        let result: Result<RoutineOutcome<()>, _> = Err(GatewayError::rejected(
            RejectionKind::NotFound,
            "Сотрудник не найден",
        ));
        let outcome = rejection_as_outcome(result).expect("outcome");
        assert_eq!(
            outcome,
            RoutineOutcome::NotFound {
                reason: "Сотрудник не найден".to_owned()
            }
        );
    }

    #[rstest]
    #[case(GatewayError::connection("refused"))]
    #[case(GatewayError::foreign_key_violation(None::<String>, "fk"))]
    #[case(GatewayError::missing_result())]
    fn infrastructure_failures_pass_through(#[case] failure: GatewayError) {
        let result: Result<RoutineOutcome<()>, _> = Err(failure.clone());
        assert_eq!(rejection_as_outcome(result), Err(failure));
    }
}
