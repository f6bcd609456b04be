//! Response shaping for the personnel endpoints.
//!
//! Builders here turn database rows into the JSON bodies clients receive:
//! flattening records, grouping them by department, grade, status or month
//! in first-seen order, and computing counts, percentages and salary
//! statistics. Builders are pure; the service supplies today's date and the
//! response timestamp.

mod birthdays;
mod employees;
mod format;
mod grades;
mod grouping;
mod payroll;
mod probation;
mod procedures;
mod spread;

pub use birthdays::{
    AgeStatistics, BirthdayEntry, BirthdayGroup, BirthdayReport, BirthdaySummary, MonthBirthday,
    MonthGroup, month_name,
};
pub use employees::{
    ActiveEmployee, ActiveEmployeesResponse, ActiveEmployeesStatistics, ActiveEmployeesSummary,
    ContactInfo, DepartmentRoster, DepartmentShare, EmployeeInfoResponse, EmployeeProfile,
    WorkInfo,
};
pub use format::{mean, percent_of, round_to, rubles};
pub use grades::{
    DepartmentGrades, GradeStatistic, GradeStatistics, GradeSummary, GradedEmployee,
    SalaryBounds, SalaryGradeReport,
};
pub use grouping::group_in_order;
pub use payroll::{
    AllDepartmentsResponse, AllDepartmentsSummary, AnalysisSummary, AverageSalary,
    CostBreakdown, DepartmentAnalysis, DepartmentAverage, DepartmentHeader,
    DepartmentSalaryResponse, DepartmentStatistics, Difference, EmployeeTaxes, EmployerTaxes,
    EmptyDepartmentStatistics, MEDICAL_RATE, Money, MonthlyBudget, NDFL_RATE, NET_SHARE,
    PENSION_RATE, RaiseGroup, RaiseSample, RaiseStatusShare, RaiseSummary, RaisedEmployee,
    SOCIAL_RATE, SalaryAnalysisResponse, SalaryCalculation, SalaryComparison,
    SalaryDistribution, SalaryEmployeeInfo, SalaryRaiseResponse, SalaryRange, SalaryTaxResponse,
    StandardDeviation, TaxAmount, TaxSummary, raise_warning,
};
pub use probation::{
    ON_PROBATION, PROBATION_COMPLETED, ProbationEmployee, ProbationGroup, ProbationReport,
    ProbationStatistics, ProbationSummary, WarningLevel,
};
pub use procedures::{
    DepartmentRemovalResponse, DismissalDetails, DismissalResponse, HireDetails, HireResponse,
    ProcedureCatalogue, ProcedureDescriptor, RemovalDetails, RemovedDepartment,
    RetainedDepartment, UnexplainedRetention,
};
pub use spread::{SalarySpread, SpreadLevel};
