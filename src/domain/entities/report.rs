//! Analysis report - issues found in one analysis run
//!
//! Reports are plain data: created fresh per analysis call, then handed to
//! the caller read-only.

use serde::Serialize;

use super::Employee;

/// A manager whose salary falls outside the expected band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryIssue {
    pub manager: Employee,
    /// Mean salary of the manager's direct subordinates
    pub average_subordinate_salary: f64,
    /// Distance from the nearest band boundary (always positive)
    pub difference: f64,
}

/// An employee with more reporting levels than allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingLineIssue {
    pub employee: Employee,
    /// Manager hops between the employee and the root
    pub reporting_levels: usize,
    pub excess_levels: usize,
}

/// Result of analyzing a validated organization
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    underpaid_managers: Vec<SalaryIssue>,
    overpaid_managers: Vec<SalaryIssue>,
    long_reporting_lines: Vec<ReportingLineIssue>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_underpaid(&mut self, issue: SalaryIssue) {
        self.underpaid_managers.push(issue);
    }

    pub(crate) fn push_overpaid(&mut self, issue: SalaryIssue) {
        self.overpaid_managers.push(issue);
    }

    pub(crate) fn push_long_reporting_line(&mut self, issue: ReportingLineIssue) {
        self.long_reporting_lines.push(issue);
    }

    pub fn underpaid_managers(&self) -> &[SalaryIssue] {
        &self.underpaid_managers
    }

    pub fn overpaid_managers(&self) -> &[SalaryIssue] {
        &self.overpaid_managers
    }

    pub fn long_reporting_lines(&self) -> &[ReportingLineIssue] {
        &self.long_reporting_lines
    }

    /// True if any category holds at least one issue
    pub fn has_issues(&self) -> bool {
        !self.underpaid_managers.is_empty()
            || !self.overpaid_managers.is_empty()
            || !self.long_reporting_lines.is_empty()
    }

    /// Total number of issues across all categories
    pub fn issue_count(&self) -> usize {
        self.underpaid_managers.len() + self.overpaid_managers.len() + self.long_reporting_lines.len()
    }
}
