//! EmployeeRepository port - abstraction for loading employee records
//!
//! Lets the application layer load records without knowing the source
//! format.

use crate::domain::entities::Employee;
use crate::error::OrgResult;
use std::path::Path;

/// Abstract repository for loading employee records
///
/// Implementations return records in source order with per-record value
/// rules already enforced. Hierarchy shape is not checked here.
pub trait EmployeeRepository {
    /// Load all records from a source
    fn load_all(&self, source: &Path) -> OrgResult<Vec<Employee>>;
}
