//! Organization analyzer
//!
//! Classifies manager salaries against the band derived from their direct
//! reports, and flags employees whose reporting line is too long.
//!
//! Input must already have passed [`HierarchyValidator`](super::HierarchyValidator);
//! nothing is re-validated here and analysis never fails.

use tracing::trace;

use crate::domain::entities::{AnalysisReport, Employee, ReportingLineIssue, SalaryIssue};
use crate::domain::policies::{AnalysisPolicy, BandPosition};

use super::OrgIndex;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationAnalyzer {
    policy: AnalysisPolicy,
}

impl OrganizationAnalyzer {
    pub fn new(policy: AnalysisPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AnalysisPolicy {
        &self.policy
    }

    /// Run both checks. Issues follow the order of `records`.
    pub fn analyze(&self, records: &[Employee], index: &OrgIndex<'_>) -> AnalysisReport {
        let mut report = AnalysisReport::new();
        self.check_salaries(records, index, &mut report);
        self.check_reporting_lines(records, index, &mut report);
        report
    }

    fn check_salaries(&self, records: &[Employee], index: &OrgIndex<'_>, report: &mut AnalysisReport) {
        for manager in records {
            let subordinates = index.direct_subordinates(manager.id());
            let Some(average) = average_salary(subordinates) else {
                continue;
            };

            let band = self.policy.salary_band(average);
            match band.classify(manager.salary()) {
                BandPosition::Below(difference) => report.push_underpaid(SalaryIssue {
                    manager: manager.clone(),
                    average_subordinate_salary: average,
                    difference,
                }),
                BandPosition::Above(difference) => report.push_overpaid(SalaryIssue {
                    manager: manager.clone(),
                    average_subordinate_salary: average,
                    difference,
                }),
                BandPosition::Within => {
                    trace!(manager = manager.id(), average, "salary within band");
                }
            }
        }
    }

    fn check_reporting_lines(
        &self,
        records: &[Employee],
        index: &OrgIndex<'_>,
        report: &mut AnalysisReport,
    ) {
        for employee in records.iter().filter(|e| !e.is_root()) {
            let levels = reporting_levels(employee, index);
            if let Some(excess_levels) = self.policy.excess_levels(levels) {
                report.push_long_reporting_line(ReportingLineIssue {
                    employee: employee.clone(),
                    reporting_levels: levels,
                    excess_levels,
                });
            }
        }
    }
}

/// Arithmetic mean of direct reports' salaries; `None` when there are none.
pub fn average_salary(employees: &[&Employee]) -> Option<f64> {
    if employees.is_empty() {
        return None;
    }
    let total: f64 = employees.iter().map(|e| e.salary()).sum();
    Some(total / employees.len() as f64)
}

/// Manager hops from `employee` up to the root. The root itself is 0.
///
/// The walk stops after `index.len()` hops, so it terminates even on input
/// that skipped validation.
pub fn reporting_levels(employee: &Employee, index: &OrgIndex<'_>) -> usize {
    let mut levels = 0;
    let mut current = employee;
    while let Some(manager_id) = current.manager_id() {
        let Some(manager) = index.employee(manager_id) else {
            break;
        };
        levels += 1;
        if levels > index.len() {
            break;
        }
        current = manager;
    }
    levels
}
