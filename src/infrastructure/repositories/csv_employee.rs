//! CSV Employee Repository
//!
//! Loads employee records from delimited text:
//!
//! ```text
//! Id,firstName,lastName,salary,managerId
//! 123,Joe,Doe,60000,
//! 124,Martin,Chekov,45000,123
//! ```
//!
//! The first line is a header. Blank lines are skipped. Fields are trimmed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use crate::domain::entities::Employee;
use crate::domain::ports::EmployeeRepository;
use crate::error::{OrgError, OrgResult};

/// Number of columns in every data row
pub const EXPECTED_COLUMNS: usize = 5;

/// Employee repository backed by CSV files
#[derive(Debug, Clone)]
pub struct CsvEmployeeRepository {
    delimiter: u8,
}

impl CsvEmployeeRepository {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse records from any reader. `source` is only used in diagnostics.
    pub fn read_from<R: Read>(&self, reader: R, source: &Path) -> OrgResult<Vec<Employee>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut employees = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if is_blank(&record) {
                trace!(line, "skipping blank line");
                continue;
            }

            employees.push(parse_record(&record, line)?);
        }

        if employees.is_empty() {
            return Err(OrgError::NoData {
                path: source.to_path_buf(),
            });
        }

        debug!(count = employees.len(), source = %source.display(), "loaded employee records");
        Ok(employees)
    }
}

impl Default for CsvEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository for CsvEmployeeRepository {
    fn load_all(&self, source: &Path) -> OrgResult<Vec<Employee>> {
        if !source.exists() {
            return Err(OrgError::FileNotFound {
                path: source.to_path_buf(),
            });
        }
        let file = File::open(source)?;
        self.read_from(file, source)
    }
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

fn parse_record(record: &csv::StringRecord, line: u64) -> OrgResult<Employee> {
    if record.len() != EXPECTED_COLUMNS {
        return Err(OrgError::ColumnCount {
            line,
            expected: EXPECTED_COLUMNS,
            found: record.len(),
        });
    }

    let raw_salary = &record[3];
    let salary: f64 = raw_salary.parse().map_err(|_| OrgError::InvalidSalary {
        line,
        raw: raw_salary.to_string(),
    })?;

    let manager_id = Some(&record[4])
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    Employee::new(&record[0], &record[1], &record[2], salary, manager_id).map_err(|e| e.at_line(line))
}
