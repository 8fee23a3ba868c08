//! Rescoping - attributing a result's errors to a field
//!
//! A sub-validator that was not given a field name reports its failures
//! unscoped. When such a result is composed under a property, its messages
//! are rewritten as field errors for that property. [`ScopePolicy`] decides
//! what happens to results that are already field-scoped.

use crate::foundation::{ValidationIssue, ValidationResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// SCOPE POLICY
// ============================================================================

/// How a builder attributes a property's result to the property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePolicy {
    /// Rescope only results that have errors but no field errors.
    ///
    /// Results that already carry field errors keep their own keys, even when
    /// those differ from the property name.
    #[default]
    PreserveInner,

    /// Attribute every issue to the property name, with its raw message.
    ///
    /// Keys chosen by the sub-validator are discarded.
    ForceKey,
}

impl ScopePolicy {
    /// Applies the policy to a property result.
    ///
    /// Returns `None` when the result should be merged unchanged.
    pub fn apply(self, field: &str, result: &ValidationResult) -> Option<ValidationResult> {
        match self {
            ScopePolicy::PreserveInner => {
                if result.is_empty() || result.has_field_errors() {
                    None
                } else {
                    Some(result.rescoped(field))
                }
            }
            ScopePolicy::ForceKey => {
                if result.is_empty() {
                    None
                } else {
                    Some(result.force_rescoped(field))
                }
            }
        }
    }
}

// ============================================================================
// RESCOPING
// ============================================================================

impl ValidationResult {
    /// Returns a copy with every unscoped issue attributed to `field`.
    ///
    /// Issues that already name a field are kept as they are, in place.
    #[must_use]
    pub fn rescoped(&self, field: &str) -> ValidationResult {
        self.issues()
            .iter()
            .map(|issue| match issue.field() {
                Some(_) => issue.clone(),
                None => ValidationIssue::scoped(field, issue.message()),
            })
            .collect()
    }

    /// Returns a copy with every issue attributed to `field`, whatever field
    /// it named before.
    #[must_use]
    pub fn force_rescoped(&self, field: &str) -> ValidationResult {
        self.issues()
            .iter()
            .map(|issue| ValidationIssue::scoped(field, issue.message()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unscoped(messages: &[&str]) -> ValidationResult {
        let mut result = ValidationResult::new();
        for message in messages {
            result.add_error(*message);
        }
        result
    }

    #[test]
    fn test_rescoped_moves_unscoped_messages() {
        let result = unscoped(&["too young", "not a number"]).rescoped("Age");

        assert!(!result.is_valid());
        assert_eq!(
            result.field_errors_for("Age"),
            ["too young", "not a number"]
        );
        assert_eq!(result.errors(), ["Age: too young", "Age: not a number"]);
    }

    #[test]
    fn test_rescoped_keeps_existing_fields() {
        let mut result = ValidationResult::new();
        result.add_field_error("Inner", "a");
        result.add_error("b");

        let rescoped = result.rescoped("Outer");
        assert_eq!(rescoped.errors(), ["Inner: a", "Outer: b"]);
    }

    #[test]
    fn test_force_rescoped_replaces_fields() {
        let mut result = ValidationResult::new();
        result.add_field_error("Inner", "a");
        result.add_error("b");

        let forced = result.force_rescoped("Outer");
        assert_eq!(forced.fields().collect::<Vec<_>>(), ["Outer"]);
        assert_eq!(forced.field_errors_for("Outer"), ["a", "b"]);
    }

    #[test]
    fn test_preserve_inner_policy() {
        let policy = ScopePolicy::PreserveInner;

        assert_eq!(policy.apply("Age", &ValidationResult::new()), None);
        assert_eq!(
            policy.apply("Age", &ValidationResult::with_field_error("Years", "x")),
            None
        );

        let rescoped = policy.apply("Age", &unscoped(&["x"])).unwrap();
        assert_eq!(rescoped.field_errors_for("Age"), ["x"]);
    }

    #[test]
    fn test_force_key_policy() {
        let policy = ScopePolicy::ForceKey;
        let rescoped = policy
            .apply("Age", &ValidationResult::with_field_error("Years", "x"))
            .unwrap();

        assert!(rescoped.field_errors_for("Years").is_empty());
        assert_eq!(rescoped.field_errors_for("Age"), ["x"]);
    }

    #[test]
    fn test_policy_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScopePolicy::ForceKey).unwrap(),
            r#""force_key""#
        );
        let policy: ScopePolicy = serde_json::from_str(r#""preserve_inner""#).unwrap();
        assert_eq!(policy, ScopePolicy::PreserveInner);
    }
}
