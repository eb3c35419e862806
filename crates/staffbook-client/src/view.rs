//! Read-only details dialog.

use std::fmt;

use staffbook_core::{Employee, Field};

use crate::table::format_salary;

/// Dialog title.
pub const VIEW_TITLE: &str = "Employee Details";

/// Shows the four business fields of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeViewDialog {
    employee: Employee,
}

impl EmployeeViewDialog {
    /// Dialog for `employee`.
    pub fn new(employee: Employee) -> Self {
        Self { employee }
    }

    /// The record shown.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Title followed by one `Label: value` line per field.
    pub fn render(&self) -> String {
        let mut out = format!("{VIEW_TITLE}\n");
        for field in Field::ALL {
            let value = match field {
                Field::Name => self.employee.name.clone(),
                Field::Email => self.employee.email.clone(),
                Field::Position => self.employee.position.clone(),
                Field::Salary => format_salary(self.employee.salary),
            };
            out.push_str(&format!("  {}: {value}\n", field.label()));
        }
        out
    }
}

impl fmt::Display for EmployeeViewDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
