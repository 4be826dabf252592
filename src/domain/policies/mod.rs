//! Domain Policies
//!
//! Business rules that decide what counts as an issue.
//! These are pure values passed into the domain services.

mod analysis_policy;

pub use analysis_policy::{
    AnalysisPolicy, BandPosition, SalaryBand, MAX_MANAGER_SALARY_RATIO, MAX_REPORTING_LEVELS,
    MIN_MANAGER_SALARY_RATIO,
};
