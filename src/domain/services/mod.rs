//! Domain Services
//!
//! Pure business logic over employee records. No I/O; every call builds its
//! own index and report.

mod hierarchy_validator;
mod organization_analyzer;

pub use hierarchy_validator::{HierarchyValidator, OrgIndex};
pub use organization_analyzer::{average_salary, reporting_levels, OrganizationAnalyzer};
