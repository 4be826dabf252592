//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AnalyzeUseCase` - Load records, validate the hierarchy, analyze it

pub mod analyze;

pub use analyze::{analyze_records, AnalyzeOptions, AnalyzeResult, AnalyzeUseCase, ValidateResult};
