//! Employee record types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EmployeeId;

/// The four business fields of an employee, already validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    /// Display name, trimmed.
    pub name: String,
    /// Contact address, unique across records.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Salary, never negative.
    pub salary: f64,
}

/// Create/update payload as received over the wire.
///
/// Every field is optional so that a missing or `null` field can be told
/// apart from an invalid one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Display name.
    pub name: Option<String>,
    /// Contact address.
    pub email: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Salary.
    pub salary: Option<f64>,
}

impl EmployeeInput {
    /// Returns `true` if every field is present and no text field is empty.
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.name) && filled(&self.email) && filled(&self.position) && self.salary.is_some()
    }
}

impl From<EmployeeFields> for EmployeeInput {
    fn from(fields: EmployeeFields) -> Self {
        Self {
            name: Some(fields.name),
            email: Some(fields.email),
            position: Some(fields.position),
            salary: Some(fields.salary),
        }
    }
}

impl From<&Employee> for EmployeeInput {
    fn from(employee: &Employee) -> Self {
        Self::from(employee.fields())
    }
}

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Salary.
    pub salary: f64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the business fields were last written.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Builds a new record with a fresh id and both timestamps set to now.
    pub fn new(fields: EmployeeFields) -> Self {
        let now = Utc::now();
        Self {
            id: EmployeeId::new(),
            name: fields.name,
            email: fields.email,
            position: fields.position,
            salary: fields.salary,
            created_at: now,
            updated_at: now,
        }
    }

    /// The record's business fields.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            salary: self.salary,
        }
    }

    /// Overwrite all four business fields and refresh `updated_at`.
    ///
    /// `updated_at` always moves forward, even if the clock reads the same
    /// instant as the previous write.
    pub fn replace(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.position = fields.position;
        self.salary = fields.salary;

        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields() -> EmployeeFields {
        EmployeeFields {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            position: "Eng".to_string(),
            salary: 1000.0,
        }
    }

    #[test]
    fn test_new_sets_matching_timestamps() {
        let employee = Employee::new(fields());
        assert_eq!(employee.created_at, employee.updated_at);
        assert_eq!(employee.fields(), fields());
    }

    #[test]
    fn test_replace_with_identical_fields_advances_updated_at() {
        let mut employee = Employee::new(fields());
        let before = employee.updated_at;
        employee.replace(fields());
        assert_eq!(employee.fields(), fields());
        assert!(employee.updated_at > before);
        assert!(employee.created_at < employee.updated_at);
    }

    #[test]
    fn test_serializes_camel_case_timestamps() {
        let employee = Employee::new(fields());
        let value = serde_json::to_value(&employee).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["id"], employee.id.to_string());
        assert_eq!(value["salary"].as_f64(), Some(1000.0));
    }

    #[test]
    fn test_input_missing_and_null_fields_deserialize_as_none() {
        let input: EmployeeInput =
            serde_json::from_str(r#"{"name":"Ann","email":null,"salary":0}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Ann"));
        assert_eq!(input.email, None);
        assert_eq!(input.position, None);
        assert_eq!(input.salary, Some(0.0));
    }

    #[test]
    fn test_input_is_complete() {
        assert!(EmployeeInput::from(fields()).is_complete());
        assert!(!EmployeeInput::default().is_complete());

        let mut input = EmployeeInput::from(fields());
        input.email = Some(String::new());
        assert!(!input.is_complete());

        let mut input = EmployeeInput::from(fields());
        input.salary = Some(0.0);
        assert!(input.is_complete());
    }
}
