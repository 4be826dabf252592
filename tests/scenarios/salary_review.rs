//! Scenario: Salary Review
//!
//! Journey: HR exports the org chart and checks manager pay bands.
//!
//! Success Criteria:
//! - Exactly one underpaid manager (124) with the expected figures
//! - The root shows up as overpaid against its two direct reports
//! - No long reporting lines in a four-level organization

use std::path::Path;

use orgcheck::presentation::create_analyze_use_case;
use orgcheck::{AnalysisPolicy, AnalyzeOptions, CsvEmployeeRepository};
use orgcheck::domain::ports::EmployeeRepository;

use crate::common::*;

/// SCENARIO: Library users get the same report as the CLI
#[test]
fn scenario_reference_org_through_library() {
    let env = TestEnv::new();
    let path = env.write_project_file("org.csv", REFERENCE_ORG);

    let result = create_analyze_use_case()
        .execute(&AnalyzeOptions::new(&path))
        .unwrap();
    let report = &result.report;

    assert_eq!(result.employee_count, 5);
    assert_eq!(report.underpaid_managers().len(), 1);

    let underpaid = &report.underpaid_managers()[0];
    assert_eq!(underpaid.manager.id(), "124");
    assert_eq!(underpaid.average_subordinate_salary, 50_000.0);
    assert!((underpaid.difference - 30_000.0).abs() < 1e-6);

    assert_eq!(report.overpaid_managers().len(), 1);
    assert_eq!(report.overpaid_managers()[0].manager.id(), "123");
    assert!(report.long_reporting_lines().is_empty());
    assert_eq!(report.issue_count(), 2);
}

/// SCENARIO: Raising the ceiling clears the overpaid root
#[test]
fn scenario_relaxed_policy_keeps_only_underpaid() {
    let records = CsvEmployeeRepository::new()
        .read_from(REFERENCE_ORG.as_bytes(), Path::new("reference.csv"))
        .unwrap();
    let policy = AnalysisPolicy::default().with_salary_ratios(1.2, 1.6);

    let report = orgcheck::analyze_records(&records, policy).unwrap();

    assert_eq!(report.underpaid_managers().len(), 1);
    assert!(report.overpaid_managers().is_empty());
}

/// SCENARIO: Same file, two runs, same answer
#[test]
fn scenario_repeated_runs_agree() {
    let env = TestEnv::new();
    let path = env.write_project_file("org.csv", REFERENCE_ORG);
    let repository = CsvEmployeeRepository::new();

    let first = repository.load_all(&path).unwrap();
    let second = repository.load_all(&path).unwrap();
    let policy = AnalysisPolicy::default();

    assert_eq!(
        orgcheck::analyze_records(&first, policy).unwrap(),
        orgcheck::analyze_records(&second, policy).unwrap()
    );
}
