//! orgcheck - organization hierarchy validator and analyzer
//!
//! orgcheck reads a flat list of employee records, proves they form a single
//! well-formed reporting tree, then flags managers paid outside the expected
//! band relative to their direct reports and employees whose reporting line
//! to the top is too long.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{analyze_records, AnalyzeOptions, AnalyzeResult, AnalyzeUseCase};
pub use config::Config;
pub use domain::entities::{AnalysisReport, Employee, ReportingLineIssue, SalaryIssue};
pub use domain::policies::AnalysisPolicy;
pub use domain::services::{HierarchyValidator, OrgIndex, OrganizationAnalyzer};
pub use error::{ErrorKind, OrgError, OrgResult};
pub use infrastructure::CsvEmployeeRepository;
