//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::AnalyzeUseCase;
use crate::config::InputConfig;
use crate::infrastructure::CsvEmployeeRepository;

/// Type alias for the concrete AnalyzeUseCase with all dependencies
pub type ConcreteAnalyzeUseCase = AnalyzeUseCase<CsvEmployeeRepository>;

/// Create an analyze use case reading comma-separated files
pub fn create_analyze_use_case() -> ConcreteAnalyzeUseCase {
    AnalyzeUseCase::new(CsvEmployeeRepository::new())
}

/// Create an analyze use case honoring the configured input format
///
/// Falls back to `,` when the delimiter is not a single ASCII character;
/// `Config::validate` reports that case before we get here.
pub fn create_analyze_use_case_for(input: &InputConfig) -> ConcreteAnalyzeUseCase {
    let repository = match input.delimiter_byte() {
        Some(delimiter) => CsvEmployeeRepository::new().with_delimiter(delimiter),
        None => CsvEmployeeRepository::new(),
    };
    AnalyzeUseCase::new(repository)
}
