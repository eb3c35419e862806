//! Property-based tests for ids and validation.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::validation::{Field, ViolationKind, is_valid_email, parse_salary};
    use crate::{EmployeeId, EmployeeInput, validate_input};
    use proptest::prelude::*;
    use uuid::Uuid;

    proptest! {
        #[test]
        fn test_employee_id_display_parse_roundtrip(uuid in any::<u128>()) {
            let id = EmployeeId::from_uuid(Uuid::from_u128(uuid));
            let parsed: EmployeeId = id.to_string().parse().unwrap();
            prop_assert_eq!(id, parsed);
        }

        #[test]
        fn test_non_negative_salary_accepted(
            name in "[A-Za-z]{1,12}",
            position in "[A-Za-z ]{0,8}[A-Za-z]",
            salary in 0.0f64..1.0e9,
        ) {
            let input = EmployeeInput {
                name: Some(name.clone()),
                email: Some(format!("{}@example.com", name.to_lowercase())),
                position: Some(position),
                salary: Some(salary),
            };
            let fields = validate_input(&input).unwrap();
            prop_assert_eq!(fields.salary, salary);
            prop_assert_eq!(fields.name, name);
        }

        #[test]
        fn test_negative_salary_rejected(salary in -1.0e9f64..-1.0e-9) {
            let input = EmployeeInput {
                name: Some("Ann".to_string()),
                email: Some("ann@x.com".to_string()),
                position: Some("Eng".to_string()),
                salary: Some(salary),
            };
            let violations = validate_input(&input).unwrap_err();
            prop_assert_eq!(
                violations.for_field(Field::Salary).map(|v| v.kind),
                Some(ViolationKind::Negative)
            );
        }

        #[test]
        fn test_email_with_whitespace_never_valid(
            local in "[a-z]{1,6}",
            domain in "[a-z]{1,6}",
            gap in "[ \t]",
        ) {
            let email = format!("{local}{gap}@{domain}.com");
            prop_assert!(!is_valid_email(&email));
        }

        #[test]
        fn test_salary_text_agrees_with_numeric_rule(salary in -1.0e6f64..1.0e6) {
            let parsed = parse_salary(&salary.to_string());
            if salary < 0.0 {
                prop_assert_eq!(parsed, Err(ViolationKind::Negative));
            } else {
                prop_assert_eq!(parsed, Ok(salary));
            }
        }
    }
}
