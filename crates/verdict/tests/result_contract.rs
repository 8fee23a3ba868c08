//! The read surface presentation adapters rely on.

use pretty_assertions::assert_eq;
use serde_json::json;
use verdict::prelude::*;

#[test]
fn test_zero_rule_validator_is_valid_for_any_input() {
    for input in ["", " ", "anything", "ünïcödé"] {
        let result = Validator::<str>::new().validate(input);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }
}

#[test]
fn test_failed_rule_count_matches_entries() {
    let validator = Validator::<str>::for_field("Password")
        .must(min_length(12), "At least 12 characters")
        .must(
            |s: &str| s.chars().any(char::is_uppercase),
            "An uppercase letter",
        )
        .must(|s: &str| s.chars().any(|c| c.is_ascii_digit()), "A digit");

    let result = validator.validate("short");
    assert_eq!(result.field_errors_for("Password").len(), 3);
    assert_eq!(result.len(), 3);

    let result = validator.validate("longer-but-lowercase");
    assert_eq!(
        result.field_errors_for("Password"),
        ["An uppercase letter", "A digit"]
    );
}

#[test]
fn test_adapter_accessors() {
    let mut result = ValidationResult::new();
    result.add_field_error("Email", "x");
    result.add_field_error("Email", "y");
    result.add_error("   ");

    assert!(!result.is_valid());
    assert_eq!(result.errors(), ["Email: x", "Email: y"]);
    assert_eq!(result.field_errors_for("Email"), ["x", "y"]);
    assert_eq!(result.first_field_error("Email"), Some("x"));
    assert!(result.field_errors_for("Unknown").is_empty());

    let dictionary = result.to_error_dictionary();
    assert_eq!(dictionary.keys().collect::<Vec<_>>(), ["Email"]);
    assert_eq!(dictionary["Email"].len(), 2);
}

#[test]
fn test_json_payload_for_rpc_errors() {
    let mut result = ValidationResult::new();
    result.add_error("Form is stale");
    result.add_field_error("Name", "Required");

    let payload = serde_json::to_value(&result).unwrap();
    assert_eq!(
        payload,
        json!({
            "is_valid": false,
            "errors": ["Form is stale", "Name: Required"],
            "field_errors": { "Name": ["Required"] },
        })
    );
}

#[test]
fn test_issues_expose_raw_messages() {
    let result = Validator::<i32>::for_field("Count")
        .must(in_range(1, 3), "Out of range")
        .validate(&9);

    let issue = &result.issues()[0];
    assert_eq!(issue.field(), Some("Count"));
    assert_eq!(issue.message(), "Out of range");
    assert_eq!(issue.to_string(), "Count: Out of range");
}
