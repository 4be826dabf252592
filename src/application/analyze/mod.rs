//! Analyze Module
//!
//! Orchestrates the analysis flow for orgcheck.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`AnalyzeOptions`)
//! - `result` - Result types (`AnalyzeResult`, `ValidateResult`)
//! - `use_case` - Core use case logic (`AnalyzeUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use orgcheck::application::analyze::{AnalyzeOptions, AnalyzeUseCase};
//!
//! let use_case = AnalyzeUseCase::new(CsvEmployeeRepository::new());
//! let result = use_case.execute(&AnalyzeOptions::new("employees.csv"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::AnalyzeOptions;
pub use result::{AnalyzeResult, ValidateResult};
pub use use_case::{analyze_records, AnalyzeUseCase};
