//! Analyze Result
//!
//! Result types for analyze and validate operations.

use crate::domain::entities::{AnalysisReport, Employee};
use crate::domain::policies::AnalysisPolicy;

/// Result of an analyze operation
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeResult {
    /// Number of records loaded
    pub employee_count: usize,
    /// Policy the report was computed against
    pub policy: AnalysisPolicy,
    pub report: AnalysisReport,
}

impl AnalyzeResult {
    pub fn has_issues(&self) -> bool {
        self.report.has_issues()
    }
}

/// Result of a validate-only operation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateResult {
    pub employee_count: usize,
    pub root: Employee,
    /// Employees with at least one direct report
    pub manager_count: usize,
    /// Longest reporting line in the organization
    pub max_depth: usize,
}
