//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod csv_employee;

pub use csv_employee::{CsvEmployeeRepository, EXPECTED_COLUMNS};
