//! Analyze Use Case
//!
//! Orchestrates the analysis flow:
//! 1. Load employee records from the source
//! 2. Validate the hierarchy and build the index
//! 3. Analyze salaries and reporting lines
//!
//! Pure orchestration; the rules live in domain services.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::domain::entities::{AnalysisReport, Employee};
use crate::domain::policies::AnalysisPolicy;
use crate::domain::ports::EmployeeRepository;
use crate::domain::services::{reporting_levels, HierarchyValidator, OrganizationAnalyzer};
use crate::error::OrgResult;

use super::options::AnalyzeOptions;
use super::result::{AnalyzeResult, ValidateResult};

/// Analyze use case, parameterized by where records come from
pub struct AnalyzeUseCase<R>
where
    R: EmployeeRepository,
{
    repository: R,
}

impl<R> AnalyzeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Execute the full load → validate → analyze pipeline
    pub fn execute(&self, options: &AnalyzeOptions) -> Result<AnalyzeResult> {
        options
            .policy
            .validate()
            .map_err(anyhow::Error::msg)
            .context("invalid analysis policy")?;

        let records = self.load(&options.source)?;
        info!(
            employees = records.len(),
            source = %options.source.display(),
            "analyzing organization"
        );

        let report = analyze_records(&records, options.policy)?;
        info!(
            underpaid = report.underpaid_managers().len(),
            overpaid = report.overpaid_managers().len(),
            long_lines = report.long_reporting_lines().len(),
            "analysis complete"
        );

        Ok(AnalyzeResult {
            employee_count: records.len(),
            policy: options.policy,
            report,
        })
    }

    /// Load and validate only
    pub fn validate(&self, source: &Path) -> Result<ValidateResult> {
        let records = self.load(source)?;
        let index = HierarchyValidator::new().validate_and_index(&records)?;

        let max_depth = records
            .iter()
            .map(|e| reporting_levels(e, &index))
            .max()
            .unwrap_or_default();

        Ok(ValidateResult {
            employee_count: records.len(),
            root: index.root().clone(),
            manager_count: index.manager_count(),
            max_depth,
        })
    }

    fn load(&self, source: &Path) -> Result<Vec<Employee>> {
        let records = self.repository.load_all(source)?;
        debug!(count = records.len(), "records loaded");
        Ok(records)
    }
}

/// Validate and analyze records already in memory
pub fn analyze_records(records: &[Employee], policy: AnalysisPolicy) -> OrgResult<AnalysisReport> {
    let index = HierarchyValidator::new().validate_and_index(records)?;
    debug!(managers = index.manager_count(), "running analysis");
    Ok(OrganizationAnalyzer::new(policy).analyze(records, &index))
}
