//! Input field group shared by add/update/select flows.
//!
//! Fields hold raw text exactly as typed; coercion happens at submit time.

use crate::model::employee::Employee;
use std::num::ParseIntError;

/// One editable input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Occupation,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Occupation => "occupation",
        }
    }
}

/// Field-group state derived from field contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    Populated,
}

/// Raw text of the three input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFields {
    pub name: String,
    pub age: String,
    pub occupation: String,
}

impl InputFields {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            occupation: occupation.into(),
        }
    }

    /// Renders a stored record into field text, overwriting nothing else.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age.map(|age| age.to_string()).unwrap_or_default(),
            occupation: employee.occupation.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Occupation => &self.occupation,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Age => self.age = value,
            Field::Occupation => self.occupation = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.occupation.clear();
    }

    pub fn state(&self) -> FieldState {
        if self.name.is_empty() && self.age.is_empty() && self.occupation.is_empty() {
            FieldState::Empty
        } else {
            FieldState::Populated
        }
    }
}

/// Coerces age input text to an integer.
///
/// Surrounding whitespace is ignored; blank input is rejected like any other
/// non-integer text.
pub fn parse_age(raw: &str) -> Result<i64, ParseIntError> {
    raw.trim().parse::<i64>()
}

#[cfg(test)]
mod tests {
    use super::{parse_age, Field, FieldState, InputFields};
    use crate::model::employee::Employee;

    #[test]
    fn parse_age_accepts_signed_integers() {
        assert_eq!(parse_age(" 30 ").unwrap(), 30);
        assert_eq!(parse_age("+5").unwrap(), 5);
        assert_eq!(parse_age("-1").unwrap(), -1);
    }

    #[test]
    fn parse_age_rejects_blank_input() {
        assert!(parse_age("").is_err());
        assert!(parse_age("   ").is_err());
    }

    #[test]
    fn parse_age_rejects_non_numeric_text() {
        assert!(parse_age("thirty").is_err());
        assert!(parse_age("3.5").is_err());
        assert!(parse_age("99999999999999999999").is_err());
    }

    #[test]
    fn state_follows_field_contents() {
        let mut fields = InputFields::default();
        assert_eq!(fields.state(), FieldState::Empty);

        fields.set(Field::Occupation, "Clerk");
        assert_eq!(fields.state(), FieldState::Populated);
        assert_eq!(fields.get(Field::Occupation), "Clerk");

        fields.clear();
        assert_eq!(fields.state(), FieldState::Empty);
    }

    #[test]
    fn from_employee_renders_missing_values_as_empty_text() {
        let employee = Employee {
            id: 3,
            name: "Dana".to_string(),
            age: None,
            occupation: None,
        };
        assert_eq!(
            InputFields::from_employee(&employee),
            InputFields::new("Dana", "", "")
        );
    }
}
