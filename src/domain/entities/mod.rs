//! Domain Entities
//!
//! - `Employee` - One record of the organization
//! - `AnalysisReport` - Issues found by one analysis run

mod employee;
mod report;

pub use employee::Employee;
pub use report::{AnalysisReport, ReportingLineIssue, SalaryIssue};
