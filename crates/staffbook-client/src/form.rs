//! The add/edit form.
//!
//! The form holds raw text exactly as typed. [`EmployeeForm::validate`]
//! applies the shared field rules from `staffbook-core` and either produces
//! a complete payload or one helper text per offending field.

use std::fmt;

use staffbook_core::validation::parse_salary;
use staffbook_core::{Employee, EmployeeInput, Field, validate_input};

use crate::state::FormMode;

/// Helper text shown under a field that failed validation.
pub fn helper_text(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Email => "Valid email is required",
        Field::Position => "Position is required",
        Field::Salary => "Valid salary is required",
    }
}

/// Fields that blocked submission, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<Field>);

impl FieldErrors {
    fn insert(&mut self, field: Field) {
        if !self.0.contains(&field) {
            self.0.push(field);
            self.0
                .sort_by_key(|f| Field::ALL.iter().position(|a| a == f));
        }
    }

    /// Helper text for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.contains(&field).then(|| helper_text(field))
    }

    /// Failed fields with their helper texts.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|&f| (f, helper_text(f)))
    }

    /// Returns `true` if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.iter().map(|(_, text)| text).collect();
        f.write_str(&texts.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// Draft of the four business fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeForm {
    /// Add or edit.
    pub mode: FormMode,
    /// Name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Position as typed.
    pub position: String,
    /// Salary as typed.
    pub salary: String,
}

impl EmployeeForm {
    /// An empty add form.
    pub fn blank() -> Self {
        Self::default()
    }

    /// An edit form pre-filled from `employee`, so an update always
    /// submits all four fields.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit,
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            salary: employee.salary.to_string(),
        }
    }

    /// Replace the text of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Position => self.position = value,
            Field::Salary => self.salary = value,
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Current text of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Position => &self.position,
            Field::Salary => &self.salary,
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Employee",
            FormMode::Edit => "Edit Employee",
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add",
            FormMode::Edit => "Update",
        }
    }

    /// Check every field and build the request payload.
    pub fn validate(&self) -> Result<EmployeeInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let salary = match parse_salary(&self.salary) {
            Ok(value) => Some(value),
            Err(_) => {
                errors.insert(Field::Salary);
                None
            }
        };

        let input = EmployeeInput {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            position: Some(self.position.clone()),
            salary,
        };

        if let Err(violations) = validate_input(&input) {
            for violation in violations.iter() {
                errors.insert(violation.field);
            }
        }

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(errors)
        }
    }

    /// Text rendering: title, each field with its helper text, and the
    /// submit label.
    pub fn render(&self, errors: Option<&FieldErrors>) -> String {
        let mut out = format!("{}\n", self.title());
        for field in Field::ALL {
            out.push_str(&format!("  {}: {}\n", field.label(), self.get(field)));
            if let Some(text) = errors.and_then(|e| e.get(field)) {
                out.push_str(&format!("    ! {text}\n"));
            }
        }
        out.push_str(&format!("  [{}]\n", self.submit_label()));
        out
    }
}
