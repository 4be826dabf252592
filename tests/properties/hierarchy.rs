//! Property tests for hierarchy validation and analysis.

use proptest::prelude::*;

use orgcheck::domain::services::{average_salary, reporting_levels};
use orgcheck::{AnalysisPolicy, Employee, HierarchyValidator, OrganizationAnalyzer};

/// A random tree: record `i` (i > 0) reports to some record before it.
fn org_strategy() -> impl Strategy<Value = Vec<Employee>> {
    (1usize..40)
        .prop_flat_map(|n| {
            let parents: Vec<BoxedStrategy<usize>> =
                (1..n).map(|i| (0..i).boxed()).collect();
            let salaries = proptest::collection::vec(0u32..500_000, n);
            (Just(n), parents, salaries)
        })
        .prop_map(|(n, parents, salaries)| {
            (0..n)
                .map(|i| {
                    let manager = if i == 0 {
                        None
                    } else {
                        Some(parents[i - 1].to_string())
                    };
                    Employee::new(i.to_string(), "P", format!("N{}", i), salaries[i] as f64, manager)
                        .unwrap()
                })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every generated tree validates, and each direct report of
    /// the root is exactly one level deep.
    #[test]
    fn property_direct_reports_of_root_have_depth_one(org in org_strategy()) {
        let index = HierarchyValidator::new().validate_and_index(&org).unwrap();
        let root = index.root();
        prop_assert_eq!(reporting_levels(root, &index), 0);

        for report in index.direct_subordinates(root.id()) {
            prop_assert_eq!(reporting_levels(report, &index), 1);
        }
    }

    /// PROPERTY: Depth is one more than the manager's depth.
    #[test]
    fn property_depth_follows_manager(org in org_strategy()) {
        let index = HierarchyValidator::new().validate_and_index(&org).unwrap();
        for employee in &org {
            if let Some(manager_id) = employee.manager_id() {
                let manager = index.employee(manager_id).unwrap();
                prop_assert_eq!(
                    reporting_levels(employee, &index),
                    reporting_levels(manager, &index) + 1
                );
            }
        }
    }

    /// PROPERTY: The subordinate average lies between the lowest and highest
    /// subordinate salary.
    #[test]
    fn property_average_within_subordinate_range(org in org_strategy()) {
        let index = HierarchyValidator::new().validate_and_index(&org).unwrap();
        for employee in &org {
            let subs = index.direct_subordinates(employee.id());
            if let Some(avg) = average_salary(subs) {
                let min = subs.iter().map(|e| e.salary()).fold(f64::INFINITY, f64::min);
                let max = subs.iter().map(|e| e.salary()).fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(avg >= min - 1e-6 && avg <= max + 1e-6);
            }
        }
    }

    /// PROPERTY: Analyzing the same records twice yields equal reports.
    #[test]
    fn property_analysis_is_idempotent(org in org_strategy()) {
        let policy = AnalysisPolicy::default();
        prop_assert_eq!(
            orgcheck::analyze_records(&org, policy).unwrap(),
            orgcheck::analyze_records(&org, policy).unwrap()
        );
    }

    /// PROPERTY: A manager is never both underpaid and overpaid, and every
    /// flagged employee exceeds the limit by the reported amount.
    #[test]
    fn property_issues_are_consistent(org in org_strategy(), max_levels in 0usize..6) {
        let policy = AnalysisPolicy::default().with_max_reporting_levels(max_levels);
        let index = HierarchyValidator::new().validate_and_index(&org).unwrap();
        let report = OrganizationAnalyzer::new(policy).analyze(&org, &index);

        for under in report.underpaid_managers() {
            prop_assert!(under.difference > 0.0);
            prop_assert!(report
                .overpaid_managers()
                .iter()
                .all(|over| over.manager.id() != under.manager.id()));
        }
        for line in report.long_reporting_lines() {
            prop_assert_eq!(line.reporting_levels, max_levels + line.excess_levels);
            prop_assert!(line.excess_levels > 0);
        }

        let expected = org
            .iter()
            .filter(|e| reporting_levels(e, &index) > max_levels)
            .count();
        prop_assert_eq!(report.long_reporting_lines().len(), expected);
    }

    /// PROPERTY: Re-pointing the root at any employee always fails validation.
    #[test]
    fn property_rerooting_breaks_the_tree(org in org_strategy(), pick in any::<prop::sample::Index>()) {
        let mut records = org;
        let target = records[pick.index(records.len())].id().to_string();
        let root = &records[0];
        let rerooted = Employee::new(
            root.id(),
            root.first_name(),
            root.last_name(),
            root.salary(),
            Some(target),
        )
        .unwrap();
        records[0] = rerooted;

        prop_assert!(HierarchyValidator::new().validate_and_index(&records).is_err());
    }
}
