//! Property-based tests for the merge algebra and rule chains.

use proptest::prelude::*;
use verdict::prelude::*;

fn issue() -> impl Strategy<Value = ValidationIssue> {
    (
        prop::option::of(prop::sample::select(vec!["A", "B", "C", "D"])),
        "[a-z]{1,8}",
    )
        .prop_map(|(field, message)| match field {
            Some(field) => ValidationIssue::scoped(field, message),
            None => ValidationIssue::unscoped(message),
        })
}

fn result() -> impl Strategy<Value = ValidationResult> {
    prop::collection::vec(issue(), 0..6)
        .prop_map(|issues| issues.into_iter().collect::<ValidationResult>())
}

// ============================================================================
// MERGE LAWS
// ============================================================================

proptest! {
    #[test]
    fn merge_validity_is_and(a in result(), b in result()) {
        prop_assert_eq!(merge(&a, &b).is_valid(), a.is_valid() && b.is_valid());
    }

    #[test]
    fn merge_concatenates_errors(a in result(), b in result()) {
        let merged = merge(&a, &b);
        let expected: Vec<String> = a.errors().iter().chain(b.errors()).cloned().collect();
        prop_assert_eq!(merged.errors(), expected.as_slice());
    }

    #[test]
    fn merge_appends_field_messages(a in result(), b in result()) {
        let merged = merge(&a, &b);
        for field in ["A", "B", "C", "D"] {
            let expected: Vec<String> = a
                .field_errors_for(field)
                .iter()
                .chain(b.field_errors_for(field))
                .cloned()
                .collect();
            prop_assert_eq!(merged.field_errors_for(field), expected.as_slice());
        }
    }

    #[test]
    fn merge_keeps_left_keys_first(a in result(), b in result()) {
        let merged = merge(&a, &b);
        let keys: Vec<&str> = merged.fields().collect();
        let left: Vec<&str> = a.fields().collect();
        prop_assert_eq!(&keys[..left.len()], left.as_slice());
    }

    #[test]
    fn merge_is_associative(a in result(), b in result(), c in result()) {
        prop_assert_eq!(merge(&merge(&a, &b), &c), merge(&a, &merge(&b, &c)));
    }

    #[test]
    fn empty_is_identity(a in result()) {
        let empty = ValidationResult::new();
        prop_assert_eq!(merge(&empty, &a), merge(&a, &empty));
        prop_assert_eq!(merge(&a, &empty), a);
    }

    #[test]
    fn merge_all_is_left_fold(results in prop::collection::vec(result(), 0..5)) {
        let folded = results
            .iter()
            .fold(ValidationResult::new(), |acc, r| merge(&acc, r));
        prop_assert_eq!(merge_all(&results), folded);
    }
}

// ============================================================================
// RULE CHAINS: one entry per failed rule
// ============================================================================

proptest! {
    #[test]
    fn failed_rules_match_entries(n in any::<i32>()) {
        let validator = Validator::<i32>::for_field("N")
            .must(|n: &i32| *n >= 0, "negative")
            .must(|n: &i32| n % 2 == 0, "odd")
            .must(|n: &i32| n.unsigned_abs() < 1000, "large");

        let failed = validator.rules().iter().filter(|r| !r.check(&n)).count();
        let result = validator.validate(&n);

        prop_assert_eq!(result.len(), failed);
        prop_assert_eq!(result.field_errors_for("N").len(), failed);
        prop_assert_eq!(result.is_valid(), failed == 0);
    }

    #[test]
    fn blank_messages_are_ignored(s in "[ \t\n]*") {
        let mut result = ValidationResult::new();
        result.add_error(s);
        prop_assert!(result.is_empty());
    }
}
