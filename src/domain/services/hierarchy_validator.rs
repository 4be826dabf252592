//! Hierarchy validator
//!
//! Proves that a flat list of employee records forms a single tree and
//! builds the lookup structures the analyzer walks.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. non-empty input
//! 2. unique identifiers (first duplicate in input order)
//! 3. exactly one root
//! 4. every manager reference resolves
//! 5. no manager chain revisits an employee

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::entities::Employee;
use crate::error::{OrgError, OrgResult};

/// Lookup structures over a validated record set.
///
/// Borrows from the records it was built from; nothing is cloned.
#[derive(Debug, Clone)]
pub struct OrgIndex<'a> {
    root: &'a Employee,
    employee_by_id: HashMap<&'a str, &'a Employee>,
    direct_subordinates: HashMap<&'a str, Vec<&'a Employee>>,
}

impl<'a> OrgIndex<'a> {
    /// The single employee without a manager
    pub fn root(&self) -> &'a Employee {
        self.root
    }

    pub fn employee(&self, id: &str) -> Option<&'a Employee> {
        self.employee_by_id.get(id).copied()
    }

    /// Direct reports of `manager_id`, in input order. Empty for individual contributors.
    pub fn direct_subordinates(&self, manager_id: &str) -> &[&'a Employee] {
        self.direct_subordinates
            .get(manager_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of employees with at least one direct report
    pub fn manager_count(&self) -> usize {
        self.direct_subordinates.len()
    }

    pub fn len(&self) -> usize {
        self.employee_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employee_by_id.is_empty()
    }
}

/// Validates hierarchy shape and produces an [`OrgIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyValidator;

impl HierarchyValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_and_index<'a>(&self, records: &'a [Employee]) -> OrgResult<OrgIndex<'a>> {
        if records.is_empty() {
            return Err(OrgError::EmptyInput);
        }

        let employee_by_id = index_by_id(records)?;
        let root = find_single_root(records)?;
        check_manager_references(records, &employee_by_id)?;
        detect_circular_references(records, &employee_by_id)?;

        let mut direct_subordinates: HashMap<&str, Vec<&Employee>> = HashMap::new();
        for employee in records {
            if let Some(manager_id) = employee.manager_id() {
                direct_subordinates
                    .entry(manager_id)
                    .or_default()
                    .push(employee);
            }
        }

        debug!(
            employees = records.len(),
            managers = direct_subordinates.len(),
            root = root.id(),
            "hierarchy validated"
        );

        Ok(OrgIndex {
            root,
            employee_by_id,
            direct_subordinates,
        })
    }
}

fn index_by_id(records: &[Employee]) -> OrgResult<HashMap<&str, &Employee>> {
    let mut by_id = HashMap::with_capacity(records.len());
    for employee in records {
        if by_id.insert(employee.id(), employee).is_some() {
            return Err(OrgError::DuplicateId {
                id: employee.id().to_string(),
            });
        }
    }
    Ok(by_id)
}

fn find_single_root(records: &[Employee]) -> OrgResult<&Employee> {
    let roots: Vec<&Employee> = records.iter().filter(|e| e.is_root()).collect();
    match roots.as_slice() {
        [] => Err(OrgError::NoRoot),
        [root] => Ok(*root),
        many => Err(OrgError::MultipleRoots {
            ids: many.iter().map(|e| e.id().to_string()).collect(),
        }),
    }
}

fn check_manager_references(
    records: &[Employee],
    by_id: &HashMap<&str, &Employee>,
) -> OrgResult<()> {
    for employee in records {
        if let Some(manager_id) = employee.manager_id() {
            if !by_id.contains_key(manager_id) {
                return Err(OrgError::UnknownManager {
                    employee: employee.id().to_string(),
                    manager: manager_id.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Walk each manager chain with its own visited set. O(n·h) for depth h.
fn detect_circular_references(
    records: &[Employee],
    by_id: &HashMap<&str, &Employee>,
) -> OrgResult<()> {
    for start in records {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = start;

        while let Some(manager_id) = current.manager_id() {
            if !visited.insert(current.id()) {
                return Err(OrgError::CircularReference {
                    employee: start.id().to_string(),
                });
            }
            current = by_id
                .get(manager_id)
                .copied()
                .ok_or_else(|| OrgError::UnknownManager {
                    employee: current.id().to_string(),
                    manager: manager_id.to_string(),
                })?;
        }
    }
    Ok(())
}
