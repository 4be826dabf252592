//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (CSV)

pub mod repositories;

// Re-export for convenience
pub use repositories::CsvEmployeeRepository;
