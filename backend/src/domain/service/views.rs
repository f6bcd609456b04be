//! Report endpoints under `/api/views`.

use super::PersonnelService;
use crate::domain::Error;
use crate::domain::classifier::Operation;
use crate::domain::commands::{BirthdayFilter, BirthdayFilterDraft, GradeFilter, GradeFilterDraft};
use crate::domain::reports::{BirthdayReport, ProbationReport, SalaryGradeReport};

impl PersonnelService {
    pub async fn probation_report(&self) -> Result<ProbationReport, Error> {
        let records = self
            .reports
            .probation()
            .await
            .map_err(self.classify(Operation::ProbationReport))?;
        Ok(ProbationReport::build(records, self.today()))
    }

    /// Grade distribution; non-numeric salary bounds fail validation.
    pub async fn salary_grades(
        &self,
        draft: &GradeFilterDraft,
    ) -> Result<SalaryGradeReport, Error> {
        let filter = GradeFilter::validate(draft)?;
        let records = self
            .reports
            .salary_grades(&filter)
            .await
            .map_err(self.classify(Operation::GradeReport))?;
        Ok(SalaryGradeReport::build(records))
    }

    /// Birthday calendar. Out-of-range filters are ignored rather than
    /// rejected.
    pub async fn birthdays(&self, draft: &BirthdayFilterDraft) -> Result<BirthdayReport, Error> {
        let filter = BirthdayFilter::from(draft);
        let records = self
            .reports
            .birthdays(&filter)
            .await
            .map_err(self.classify(Operation::BirthdayReport))?;
        Ok(BirthdayReport::build(records))
    }
}
