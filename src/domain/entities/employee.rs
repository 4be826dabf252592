//! Employee entity - one record of the organization
//!
//! Employees are identified by `id` alone. The manager link is a plain
//! identifier, never an owning reference; the hierarchy is rebuilt from
//! these back-pointers by the validator.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::{OrgError, OrgResult};

/// A single employee record
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    id: String,
    first_name: String,
    last_name: String,
    salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    manager_id: Option<String>,
}

impl Employee {
    /// Create a new Employee, enforcing the per-record value rules.
    ///
    /// Text fields are trimmed. An empty manager id is treated as "no manager".
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        manager_id: Option<String>,
    ) -> OrgResult<Self> {
        let id = required_text("id", id.into())?;
        let first_name = required_text("first name", first_name.into())?;
        let last_name = required_text("last name", last_name.into())?;

        if !salary.is_finite() {
            return Err(invalid("salary", "must be a finite number"));
        }
        if salary < 0.0 {
            return Err(invalid("salary", "cannot be negative"));
        }

        let manager_id = manager_id
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        Ok(Self {
            id,
            first_name,
            last_name,
            salary,
            manager_id,
        })
    }

    /// Get the identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Get the manager identifier (None for the root)
    pub fn manager_id(&self) -> Option<&str> {
        self.manager_id.as_deref()
    }

    /// True for the record at the top of the hierarchy
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn required_text(field: &'static str, value: String) -> OrgResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn invalid(field: &'static str, message: &str) -> OrgError {
    OrgError::InvalidValue {
        context: String::new(),
        field,
        message: message.to_string(),
    }
}
