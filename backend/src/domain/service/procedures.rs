//! Endpoints backed by stored procedures under `/api/procedures`.

use serde_json::json;
use tracing::{info, warn};

use super::PersonnelService;
use crate::domain::classifier::Operation;
use crate::domain::commands::{
    DepartmentRemoval, DepartmentRemovalDraft, Dismissal, DismissalDraft, NewEmployee,
    NewEmployeeDraft,
};
use crate::domain::reports::{
    DepartmentRemovalResponse, DismissalResponse, HireResponse, ProcedureCatalogue,
    SalaryAnalysisResponse,
};
use crate::domain::{Error, RoutineOutcome};

impl PersonnelService {
    #[must_use]
    pub fn procedure_catalogue(&self) -> ProcedureCatalogue {
        ProcedureCatalogue::published()
    }

    /// Register a new employee through `add_employee`.
    ///
    /// Duplicate names, unknown departments and positions outside the
    /// department are refused before the procedure runs.
    pub async fn hire(&self, draft: &NewEmployeeDraft) -> Result<HireResponse, Error> {
        let hire = NewEmployee::validate(draft, self.today())?;
        let classify = self.classify(Operation::Hiring);

        if let Some(existing) = self
            .personnel
            .duplicate_employee(&hire)
            .await
            .map_err(&classify)?
        {
            warn!(existing, "hire refused: duplicate full name");
            return Err(
                Error::conflict("Сотрудник с таким ФИО уже существует в системе")
                    .with_details(json!({ "existing_employee_id": existing })),
            );
        }
        if self
            .personnel
            .department(hire.department_id)
            .await
            .map_err(&classify)?
            .is_none()
        {
            return Err(Error::not_found(format!(
                "Отдел с ID {} не существует",
                hire.department_id
            )));
        }
        if !self
            .personnel
            .position_in_department(hire.position_id, hire.department_id)
            .await
            .map_err(&classify)?
        {
            return Err(Error::not_found(format!(
                "Должность с ID {} не существует в отделе {}",
                hire.position_id, hire.department_id
            )));
        }

        match self.commands.add_employee(&hire).await.map_err(&classify)? {
            RoutineOutcome::Ok(receipt) => {
                info!(
                    employee_id = receipt.employee_id,
                    department_id = hire.department_id,
                    "employee hired"
                );
                Ok(HireResponse::new(
                    &hire,
                    receipt.message,
                    receipt.employee_id,
                ))
            }
            RoutineOutcome::NotFound { reason }
            | RoutineOutcome::Conflict { reason }
            | RoutineOutcome::Invalid { reason } => {
                warn!(%reason, "hire refused by procedure");
                Err(Error::invalid_request(reason))
            }
        }
    }

    /// Transfer every employee of a department elsewhere and delete it.
    pub async fn remove_department(
        &self,
        draft: &DepartmentRemovalDraft,
    ) -> Result<DepartmentRemovalResponse, Error> {
        let removal = DepartmentRemoval::validate(draft)?;
        let classify = self.classify(Operation::DepartmentRemoval);

        let source = self
            .personnel
            .department(removal.department_id)
            .await
            .map_err(&classify)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Отдел с ID {} не существует",
                    removal.department_id
                ))
            })?;
        let target = self
            .personnel
            .department(removal.target_department_id)
            .await
            .map_err(&classify)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Целевой отдел с ID {} не существует",
                    removal.target_department_id
                ))
            })?;
        if removal.transfers_to_itself() {
            return Err(Error::invalid_request(
                "Удаляемый и целевой отделы не могут быть одинаковыми",
            ));
        }

        let transferred = self
            .personnel
            .active_headcount(removal.department_id)
            .await
            .map_err(&classify)?;
        match self
            .commands
            .remove_department(&removal)
            .await
            .map_err(&classify)?
        {
            RoutineOutcome::Ok(_) => {}
            RoutineOutcome::NotFound { reason } => return Err(Error::not_found(reason)),
            RoutineOutcome::Conflict { reason } => return Err(Error::conflict(reason)),
            RoutineOutcome::Invalid { reason } => return Err(Error::invalid_request(reason)),
        }

        let remaining = self
            .personnel
            .remaining_headcount(removal.department_id)
            .await
            .map_err(&classify)?;
        info!(
            department_id = removal.department_id,
            target_department_id = removal.target_department_id,
            transferred,
            ?remaining,
            "department removal procedure completed"
        );
        Ok(DepartmentRemovalResponse::build(
            &removal,
            source,
            target,
            transferred,
            remaining,
            self.now(),
        ))
    }

    /// Dismiss the employee identified by name, department and position.
    pub async fn dismiss(&self, draft: &DismissalDraft) -> Result<DismissalResponse, Error> {
        let dismissal = Dismissal::validate(draft)?;
        let outcome = self
            .commands
            .dismiss_employee(&dismissal)
            .await
            .map_err(self.classify(Operation::Dismissal))?;
        match outcome {
            RoutineOutcome::Ok(receipt) => {
                info!(
                    department = %dismissal.department_name,
                    position = %dismissal.position_name,
                    "employee dismissed"
                );
                Ok(DismissalResponse::new(
                    &dismissal,
                    receipt.message,
                    self.today(),
                ))
            }
            RoutineOutcome::NotFound { reason } => {
                warn!(%reason, "dismissal target not found");
                Err(
                    Error::not_found("Сотрудник не найден. Проверьте ФИО, отдел и должность.")
                        .with_details(json!({ "original_message": reason })),
                )
            }
            RoutineOutcome::Conflict { reason } => {
                warn!(%reason, "dismissal conflicts with employee state");
                Err(Error::conflict(reason))
            }
            RoutineOutcome::Invalid { reason } => {
                warn!(%reason, "dismissal refused by procedure");
                Err(Error::invalid_request(reason))
            }
        }
    }

    /// Company summary followed by per-department salary rows.
    pub async fn salary_analysis(&self) -> Result<SalaryAnalysisResponse, Error> {
        let rows = self
            .personnel
            .salary_analysis()
            .await
            .map_err(self.classify(Operation::SalaryAnalysis))?;
        Ok(SalaryAnalysisResponse::build(rows, self.now()))
    }
}
