//! Field rules for employee records.
//!
//! These rules are the single definition used by the store, the HTTP
//! handlers, and the client form. The server reports violations with the
//! wording of [`ViolationKind::message`]; the client maps the same
//! [`ViolationKind`] values onto its own helper texts.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{EmployeeFields, EmployeeInput};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex")
});

// ============================================================================
// Field
// ============================================================================

/// One of the four business fields of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Display name.
    Name,
    /// Contact address, unique across records.
    Email,
    /// Job title.
    Position,
    /// Non-negative salary.
    Salary,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Position, Field::Salary];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Position => "position",
            Field::Salary => "salary",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Position => "Position",
            Field::Salary => "Salary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "position" => Ok(Field::Position),
            "salary" => Ok(Field::Salary),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

// ============================================================================
// Violations
// ============================================================================

/// What is wrong with a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The field was absent or null.
    Missing,
    /// The field was present but empty (for the name, empty after trimming).
    Blank,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
    /// The salary is below zero.
    Negative,
    /// The salary is not a finite number.
    NotANumber,
}

impl ViolationKind {
    /// Server-side message for a violation on `field`.
    pub fn message(&self, field: Field) -> String {
        match self {
            ViolationKind::Missing | ViolationKind::Blank => {
                format!("Path `{field}` is required.")
            }
            ViolationKind::InvalidEmail => "Please use a valid email address.".to_string(),
            ViolationKind::Negative => "Salary must be positive.".to_string(),
            ViolationKind::NotANumber => format!("Path `{field}` must be a number."),
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The offending field.
    pub field: Field,
    /// The rule it broke.
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a violation.
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind.message(self.field))
    }
}

/// Every rule a payload broke, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Returns `true` if nothing was violated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// The violation recorded for `field`, if any.
    pub fn for_field(&self, field: Field) -> Option<&Violation> {
        self.0.iter().find(|v| v.field == field)
    }

    fn push(&mut self, field: Field, kind: ViolationKind) {
        self.0.push(Violation::new(field, kind));
    }

    fn into_result<T>(self, value: T) -> Result<T, Violations> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Employee validation failed: ")?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

// ============================================================================
// Rules
// ============================================================================

/// Returns `true` if `email` matches the basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Parse salary text typed into a form.
///
/// Empty input is [`ViolationKind::Missing`]; zero is accepted.
pub fn parse_salary(text: &str) -> Result<f64, ViolationKind> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ViolationKind::Missing);
    }
    let value: f64 = text.parse().map_err(|_| ViolationKind::NotANumber)?;
    check_salary(value)
}

fn check_salary(value: f64) -> Result<f64, ViolationKind> {
    if !value.is_finite() {
        Err(ViolationKind::NotANumber)
    } else if value < 0.0 {
        Err(ViolationKind::Negative)
    } else {
        Ok(value)
    }
}

/// Required text check. Only the name is trimmed before the emptiness
/// test; email and position are blank only when empty.
fn check_text(
    violations: &mut Violations,
    field: Field,
    value: Option<&str>,
) -> Option<String> {
    let blank = |v: &str| match field {
        Field::Name => v.trim().is_empty(),
        _ => v.is_empty(),
    };
    match value {
        None => {
            violations.push(field, ViolationKind::Missing);
            None
        }
        Some(v) if blank(v) => {
            violations.push(field, ViolationKind::Blank);
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// Validate a create/update payload and produce the fields to persist.
///
/// All four fields are checked and every violation is reported. The name
/// is stored trimmed; email and position are stored as given.
pub fn validate_input(input: &EmployeeInput) -> Result<EmployeeFields, Violations> {
    let mut violations = Violations::default();

    let name = check_text(&mut violations, Field::Name, input.name.as_deref())
        .map(|n| n.trim().to_string());

    let email = check_text(&mut violations, Field::Email, input.email.as_deref()).and_then(|e| {
        if is_valid_email(&e) {
            Some(e)
        } else {
            violations.push(Field::Email, ViolationKind::InvalidEmail);
            None
        }
    });

    let position = check_text(&mut violations, Field::Position, input.position.as_deref());

    let salary = match input.salary {
        None => {
            violations.push(Field::Salary, ViolationKind::Missing);
            None
        }
        Some(value) => match check_salary(value) {
            Ok(v) => Some(v),
            Err(kind) => {
                violations.push(Field::Salary, kind);
                None
            }
        },
    };

    match (name, email, position, salary) {
        (Some(name), Some(email), Some(position), Some(salary)) => violations.into_result(
            EmployeeFields {
                name,
                email,
                position,
                salary,
            },
        ),
        _ => Err(violations),
    }
}

/// Re-check fields that were built outside [`validate_input`].
pub fn validate_fields(fields: EmployeeFields) -> Result<EmployeeFields, Violations> {
    validate_input(&EmployeeInput::from(fields))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, position: &str, salary: f64) -> EmployeeInput {
        EmployeeInput {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            position: Some(position.to_string()),
            salary: Some(salary),
        }
    }

    #[test]
    fn test_valid_input_passes_and_trims_name() {
        let fields = validate_input(&input("  Ann  ", "ann@x.com", "Eng", 1000.0)).unwrap();
        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.email, "ann@x.com");
        assert_eq!(fields.position, "Eng");
        assert_eq!(fields.salary, 1000.0);
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        assert!(validate_input(&input("Ann", "ann@x.com", "Eng", 0.0)).is_ok());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let err = validate_input(&input("Ann", "ann@x.com", "Eng", -1.0)).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err.for_field(Field::Salary).unwrap().kind,
            ViolationKind::Negative
        );
    }

    #[test]
    fn test_non_finite_salary_is_rejected() {
        let err = validate_input(&input("Ann", "ann@x.com", "Eng", f64::NAN)).unwrap_err();
        assert_eq!(
            err.for_field(Field::Salary).unwrap().kind,
            ViolationKind::NotANumber
        );
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = validate_input(&EmployeeInput::default()).unwrap_err();
        assert_eq!(err.len(), 4);
        for field in Field::ALL {
            assert_eq!(err.for_field(field).unwrap().kind, ViolationKind::Missing);
        }
    }

    #[test]
    fn test_blank_strings_are_rejected() {
        let err = validate_input(&input("   ", "ann@x.com", "", 1.0)).unwrap_err();
        assert_eq!(err.for_field(Field::Name).unwrap().kind, ViolationKind::Blank);
        assert_eq!(
            err.for_field(Field::Position).unwrap().kind,
            ViolationKind::Blank
        );
        assert!(err.for_field(Field::Email).is_none());
    }

    #[test]
    fn test_whitespace_position_is_kept_as_given() {
        let fields = validate_input(&input(" Ann ", "ann@x.com", "   ", 1.0)).unwrap();
        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.position, "   ");
    }

    #[test]
    fn test_whitespace_email_fails_pattern_not_presence() {
        let err = validate_input(&input("Ann", "   ", "Eng", 1.0)).unwrap_err();
        assert_eq!(
            err.for_field(Field::Email).unwrap().kind,
            ViolationKind::InvalidEmail
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("ann@x"));
        assert!(!is_valid_email("ann.x.com"));
        assert!(!is_valid_email("ann @x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_invalid_email_message() {
        let err = validate_input(&input("Ann", "not-an-email", "Eng", 1.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Employee validation failed: email: Please use a valid email address."
        );
    }

    #[test]
    fn test_violations_display_joins_all() {
        let err = validate_input(&input("", "bad", "Eng", -5.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Employee validation failed: name: Path `name` is required., \
             email: Please use a valid email address., salary: Salary must be positive."
        );
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("1000"), Ok(1000.0));
        assert_eq!(parse_salary(" 0 "), Ok(0.0));
        assert_eq!(parse_salary("12.5"), Ok(12.5));
        assert_eq!(parse_salary(""), Err(ViolationKind::Missing));
        assert_eq!(parse_salary("abc"), Err(ViolationKind::NotANumber));
        assert_eq!(parse_salary("inf"), Err(ViolationKind::NotANumber));
        assert_eq!(parse_salary("-1"), Err(ViolationKind::Negative));
    }

    #[test]
    fn test_validate_fields_rechecks() {
        let fields = EmployeeFields {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            position: "Eng".to_string(),
            salary: -3.0,
        };
        assert!(validate_fields(fields).is_err());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("Salary".parse::<Field>().unwrap(), Field::Salary);
        assert!("age".parse::<Field>().is_err());
    }
}
