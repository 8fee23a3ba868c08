//! Core traits for the validation system
//!
//! This module defines the seam shared by every result producer: rule chains,
//! object builders, and plain closures.

use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// Anything that evaluates an input into a [`ValidationResult`].
///
/// Implementations must not fail: a rule that does not hold is reported in
/// the returned result. A panic inside an implementation is a bug in that
/// implementation and is left to propagate.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use verdict::foundation::{Validate, ValidationResult};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> ValidationResult {
///         let mut result = ValidationResult::new();
///         if input.trim().is_empty() {
///             result.add_error("Value is required");
///         }
///         result
///     }
/// }
///
/// assert!(NotBlank.validate("alice").is_valid());
/// assert!(!NotBlank.validate("  ").is_valid());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Evaluates `input` and returns a fresh report.
    fn validate(&self, input: &Self::Input) -> ValidationResult;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for std::sync::Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
