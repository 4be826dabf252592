//! Error types for orgcheck
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for orgcheck operations
pub type OrgResult<T> = Result<T, OrgError>;

/// Broad classification of an [`OrgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The record set itself is malformed (empty, duplicated ids, bad row shape).
    InputShape,
    /// The manager relation does not form a single tree.
    Structural,
    /// A single field holds an unacceptable value.
    Value,
    /// The source could not be read or the config could not be parsed.
    Io,
}

/// Main error type for orgcheck operations
#[derive(Error, Debug)]
pub enum OrgError {
    /// No records were supplied to the validator
    #[error("empty input: employee list cannot be empty")]
    EmptyInput,

    /// The same identifier appears on more than one record
    #[error("duplicate identifier {id}")]
    DuplicateId { id: String },

    /// A CSV row does not have the expected number of columns
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A source file had a header but no data rows
    #[error("no employee data found in {path}")]
    NoData { path: PathBuf },

    /// No record without a manager
    #[error("no root found (employee with no manager)")]
    NoRoot,

    /// More than one record without a manager
    #[error("multiple roots found (employees with no manager): {ids:?}")]
    MultipleRoots { ids: Vec<String> },

    /// A manager id does not resolve to any record
    #[error("unknown manager reference: employee {employee} references non-existent manager {manager}")]
    UnknownManager { employee: String, manager: String },

    /// The manager chain starting at `employee` loops back on itself
    #[error("circular reference detected in reporting structure involving employee {employee}")]
    CircularReference { employee: String },

    /// A record field holds an invalid value
    #[error("{context}invalid {field}: {message}")]
    InvalidValue {
        context: String,
        field: &'static str,
        message: String,
    },

    /// Salary column could not be parsed as a number
    #[error("line {line}: invalid salary value: {raw}")]
    InvalidSalary { line: u64, raw: String },

    /// Input file is missing
    #[error("file does not exist: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed or holds inconsistent values
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl OrgError {
    /// Classify this error into the input-shape / structural / value taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrgError::EmptyInput
            | OrgError::DuplicateId { .. }
            | OrgError::ColumnCount { .. }
            | OrgError::NoData { .. } => ErrorKind::InputShape,
            OrgError::NoRoot
            | OrgError::MultipleRoots { .. }
            | OrgError::UnknownManager { .. }
            | OrgError::CircularReference { .. } => ErrorKind::Structural,
            OrgError::InvalidValue { .. } | OrgError::InvalidSalary { .. } => ErrorKind::Value,
            OrgError::FileNotFound { .. }
            | OrgError::Io(_)
            | OrgError::Csv(_)
            | OrgError::Config { .. } => ErrorKind::Io,
        }
    }

    /// Prefix a value error with a source line, leaving other errors untouched.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            OrgError::InvalidValue { field, message, .. } => OrgError::InvalidValue {
                context: format!("line {line}: "),
                field,
                message,
            },
            other => other,
        }
    }
}
