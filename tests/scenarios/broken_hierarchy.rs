//! Scenario: Broken Hierarchy
//!
//! Journey: An export with structural defects is rejected with a clear
//! diagnosis before any analysis runs.
//!
//! Success Criteria:
//! - Two roots, cycles and dangling manager ids are each named
//! - The error kind is structural
//! - The CLI exits with status 1

use std::path::Path;

use orgcheck::{AnalysisPolicy, CsvEmployeeRepository, ErrorKind, OrgError};

use crate::common::*;

fn analyze_csv(content: &str) -> Result<orgcheck::AnalysisReport, OrgError> {
    let records = CsvEmployeeRepository::new().read_from(content.as_bytes(), Path::new("org.csv"))?;
    orgcheck::analyze_records(&records, AnalysisPolicy::default())
}

/// SCENARIO: Two people without a manager
#[test]
fn scenario_two_roots() {
    let err = analyze_csv(TWO_ROOTS_ORG).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(matches!(err, OrgError::MultipleRoots { ref ids } if ids == &["1", "2"]));
}

/// SCENARIO: Two managers reporting to each other
#[test]
fn scenario_mutual_managers() {
    let err = analyze_csv(CYCLE_ORG).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(err.to_string().contains("circular reference"));
}

/// SCENARIO: A manager id that does not exist
#[test]
fn scenario_dangling_manager() {
    let csv = format!("{}\n1,Ada,Root,100,\n2,Ben,Lead,80,42\n", HEADER);
    let err = analyze_csv(&csv).unwrap_err();
    assert!(matches!(
        err,
        OrgError::UnknownManager { ref employee, ref manager } if employee == "2" && manager == "42"
    ));
}

/// SCENARIO: The CLI refuses all of them
#[test]
fn scenario_cli_rejects_broken_files() {
    let env = TestEnv::new();
    for (name, content) in [("roots.csv", TWO_ROOTS_ORG), ("cycle.csv", CYCLE_ORG)] {
        env.write_project_file(name, content);
        let result = env.run(&["analyze", name]);
        assert_eq!(result.exit_code, 1, "{} should fail: {}", name, result.stdout);
        assert!(result.stderr.starts_with("Error: "));
    }
}
