//! Driven port for personnel mutations.
//!
//! Every method maps onto one stored routine. Business refusals come back as
//! a [`RoutineOutcome`]; only infrastructure and integrity failures use
//! [`GatewayError`].

use async_trait::async_trait;

use super::GatewayError;
use super::fixture_data;
use crate::domain::commands::{DepartmentRemoval, Dismissal, NewEmployee};
use crate::domain::outcome::{ProcedureReceipt, RoutineOutcome};
use crate::domain::records::SalaryRaiseRecord;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonnelCommand: Send + Sync {
    /// `CALL add_employee(...)`.
    async fn add_employee(
        &self,
        hire: &NewEmployee,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError>;

    /// `CALL dismiss_specific_employee(...)`.
    async fn dismiss_employee(
        &self,
        dismissal: &Dismissal,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError>;

    /// `CALL delete_department_with_transfer(...)`.
    async fn remove_department(
        &self,
        removal: &DepartmentRemoval,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError>;

    /// `func_update_all_employee_salaries()`: tenure-based raise for every
    /// active employee. Not idempotent.
    async fn raise_salaries_by_tenure(&self) -> Result<Vec<SalaryRaiseRecord>, GatewayError>;
}

/// Fixture command port that accepts every mutation without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePersonnelCommand;

#[async_trait]
impl PersonnelCommand for FixturePersonnelCommand {
    async fn add_employee(
        &self,
        _hire: &NewEmployee,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        Ok(RoutineOutcome::Ok(ProcedureReceipt {
            message: "Сотрудник успешно добавлен".to_owned(),
            employee_id: Some(101),
        }))
    }

    async fn dismiss_employee(
        &self,
        dismissal: &Dismissal,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        Ok(RoutineOutcome::Ok(ProcedureReceipt {
            message: format!("Сотрудник {} успешно уволен", dismissal.full_name()),
            employee_id: None,
        }))
    }

    async fn remove_department(
        &self,
        removal: &DepartmentRemoval,
    ) -> Result<RoutineOutcome<ProcedureReceipt>, GatewayError> {
        Ok(RoutineOutcome::Ok(ProcedureReceipt {
            message: format!("Отдел {} удален", removal.department_id),
            employee_id: None,
        }))
    }

    async fn raise_salaries_by_tenure(&self) -> Result<Vec<SalaryRaiseRecord>, GatewayError> {
        Ok(fixture_data::salary_raises())
    }
}
