//! Per-value rule chains
//!
//! A [`Validator`] is an ordered list of [`Rule`]s, each a predicate paired
//! with the message reported when the predicate does not hold. Every rule is
//! evaluated on every call; there is no short-circuit on first failure.
//!
//! Because every rule runs, each predicate must accept any value of its type,
//! including empty ones. The convention is that substantive checks pass on an
//! empty value and a separate required-ness rule reports the absence.

use crate::foundation::{Validate, ValidationIssue, ValidationResult};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

// ============================================================================
// RULE
// ============================================================================

/// A predicate plus the message reported when it returns `false`.
pub struct Rule<T: ?Sized> {
    predicate: Predicate<T>,
    message: Cow<'static, str>,
}

impl<T: ?Sized> Rule<T> {
    /// Creates a rule that passes when `predicate` returns true.
    pub fn new<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if `value` satisfies the rule.
    #[inline]
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

// Clone impl - manual because T might not be Clone
impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("predicate", &"<function>")
            .finish()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// An ordered rule chain for one value, optionally scoped to a field.
///
/// With a field name, each failing rule is recorded as a field error under
/// that name. Without one, failures are recorded unscoped.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::{Validator, predicates};
///
/// let username = Validator::<str>::for_field("Username")
///     .must(predicates::required(), "Username is required")
///     .must(predicates::min_length(3), "Username is too short")
///     .must(|s: &str| s.chars().all(char::is_alphanumeric), "Letters and digits only");
///
/// let result = username.validate("a!");
/// assert_eq!(
///     result.field_errors_for("Username"),
///     ["Username is too short", "Letters and digits only"]
/// );
///
/// assert!(username.validate("alice").is_valid());
/// ```
pub struct Validator<T: ?Sized> {
    rules: Vec<Rule<T>>,
    field_name: Option<String>,
}

impl<T: ?Sized> Validator<T> {
    /// Creates an unscoped validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            field_name: None,
        }
    }

    /// Creates a validator whose failures are attributed to `field_name`.
    pub fn for_field(field_name: impl Into<String>) -> Self {
        Self::new().with_field_name(field_name)
    }

    /// Sets the field name failures are attributed to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    /// Appends a rule that fails when `predicate` returns false.
    #[must_use = "builder methods must be chained or built"]
    pub fn must<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rule(Rule::new(predicate, message))
    }

    /// Appends a rule that fails when `predicate` returns true.
    #[must_use = "builder methods must be chained or built"]
    pub fn must_not<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rule(Rule::new(move |value: &T| !predicate(value), message))
    }

    /// Appends a prepared rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the field name, if any.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the chain has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates every rule against `value`, in order.
    pub fn validate(&self, value: &T) -> ValidationResult {
        let mut result = ValidationResult::new();

        for rule in &self.rules {
            if rule.check(value) {
                continue;
            }
            let issue = match &self.field_name {
                Some(field) => ValidationIssue::scoped(field.clone(), rule.message()),
                None => ValidationIssue::unscoped(rule.message()),
            };
            result.record(issue);
        }

        tracing::trace!(
            field = self.field_name.as_deref(),
            failed = result.len(),
            rules = self.rules.len(),
            "rule chain evaluated"
        );

        result
    }
}

impl<T: ?Sized> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            field_name: self.field_name.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("field_name", &self.field_name)
            .field("rules", &self.rules)
            .finish()
    }
}

impl<T: ?Sized> Validate for Validator<T> {
    type Input = T;

    fn validate(&self, input: &T) -> ValidationResult {
        Validator::validate(self, input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_validator_passes() {
        let validator = Validator::<i32>::new();
        let result = validator.validate(&-7);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_unscoped_failures() {
        let validator = Validator::<i32>::new()
            .must(|n: &i32| *n > 0, "Must be positive")
            .must(|n: &i32| n % 2 == 0, "Must be even");

        let result = validator.validate(&-3);
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Must be positive", "Must be even"]);
        assert!(result.field_errors().is_empty());
    }

    #[test]
    fn test_scoped_failures_do_not_short_circuit() {
        let validator = Validator::<str>::for_field("Code")
            .must(|s: &str| s.len() == 4, "one")
            .must(|s: &str| s.starts_with('X'), "two")
            .must(|s: &str| s.ends_with('9'), "three");

        let result = validator.validate("abc");
        assert_eq!(result.field_errors_for("Code"), ["one", "two", "three"]);
        assert_eq!(result.errors(), ["Code: one", "Code: two", "Code: three"]);
    }

    #[test]
    fn test_every_rule_is_evaluated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut validator = Validator::<u8>::new();
        for _ in 0..4 {
            let calls = Arc::clone(&calls);
            validator = validator.must(
                move |_: &u8| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    false
                },
                "fail",
            );
        }

        let result = validator.validate(&0);
        assert_eq!(result.len(), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_blank_rule_message_still_fails() {
        let validator = Validator::<i32>::new().must(|n: &i32| *n > 0, " ");

        let result = validator.validate(&0);
        assert!(!result.is_valid());
        assert_eq!(result.errors(), [" "]);
    }

    #[test]
    fn test_must_not() {
        let validator = Validator::<str>::new().must_not(|s: &str| s.contains(' '), "No spaces");
        assert!(validator.validate("ab").is_valid());
        assert_eq!(validator.validate("a b").errors(), ["No spaces"]);
    }

    #[test]
    fn test_clone_shares_rules() {
        let base = Validator::<i32>::new().must(|n: &i32| *n < 10, "too big");
        let scoped = base.clone().with_field_name("Count");

        assert_eq!(base.field_name(), None);
        assert_eq!(scoped.field_name(), Some("Count"));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped.validate(&11).field_errors_for("Count"), ["too big"]);
    }

    #[test]
    #[should_panic(expected = "predicate bug")]
    fn test_panicking_predicate_propagates() {
        let validator = Validator::<i32>::new().must(|_: &i32| panic!("predicate bug"), "never");
        let _ = validator.validate(&1);
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator<str>>();
        assert_send_sync::<Validator<Vec<u8>>>();
    }
}
