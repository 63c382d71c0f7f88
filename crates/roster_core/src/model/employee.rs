//! Employee domain model.
//!
//! # Responsibility
//! - Define the persisted employee record and its mutable field set.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes.
//! - `name` is required; emptiness is not validated.
//! - `age` carries no range validation.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier (`employees.id`).
pub type EmployeeId = i64;

/// One persisted employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: Option<i64>,
    pub occupation: Option<String>,
}

/// Mutable fields written by insert and update.
///
/// Update uses full replacement: every field here overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub age: Option<i64>,
    pub occupation: Option<String>,
}

impl EmployeeDraft {
    pub fn new(name: impl Into<String>, age: Option<i64>, occupation: Option<String>) -> Self {
        Self {
            name: name.into(),
            age,
            occupation,
        }
    }
}

impl Employee {
    /// Returns the mutable fields of this record.
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            age: self.age,
            occupation: self.occupation.clone(),
        }
    }

    /// Returns whether this record carries exactly the given field values.
    pub fn matches(&self, draft: &EmployeeDraft) -> bool {
        self.name == draft.name && self.age == draft.age && self.occupation == draft.occupation
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeDraft};

    #[test]
    fn draft_copies_mutable_fields() {
        let employee = Employee {
            id: 7,
            name: "Alice".to_string(),
            age: Some(30),
            occupation: Some("Engineer".to_string()),
        };
        let draft = employee.draft();
        assert!(employee.matches(&draft));
        assert_eq!(draft, EmployeeDraft::new("Alice", Some(30), Some("Engineer".to_string())));
    }

    #[test]
    fn serializes_with_nullable_optional_fields() {
        let employee = Employee {
            id: 2,
            name: "Bob".to_string(),
            age: None,
            occupation: Some("Clerk".to_string()),
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 2, "name": "Bob", "age": null, "occupation": "Clerk"})
        );
    }
}
