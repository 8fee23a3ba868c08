//! MERGE - order-preserving combination of results
//!
//! Merging never mutates its inputs:
//!
//! - validity is the AND of both inputs;
//! - errors are the left input's followed by the right input's;
//! - field errors start from the left input's map; each right-hand field is
//!   appended to an existing key or inserted after all left-hand keys.
//!
//! Merge is associative, and the empty result is its identity.

use crate::foundation::{Result, ValidationResult, VerdictError};

/// Combines two results into a new one.
///
/// # Examples
///
/// ```rust
/// use verdict::combinators::merge;
/// use verdict::foundation::ValidationResult;
///
/// let a = ValidationResult::with_field_error("Name", "Required");
/// let b = ValidationResult::with_field_error("Name", "Too short");
///
/// let merged = merge(&a, &b);
/// assert_eq!(merged.field_errors_for("Name"), ["Required", "Too short"]);
/// assert_eq!(a.len(), 1);
/// ```
#[must_use]
pub fn merge(a: &ValidationResult, b: &ValidationResult) -> ValidationResult {
    let mut merged = a.clone();
    merged.absorb(b);
    merged
}

/// Left-folds [`merge`] over `results`, starting from an empty valid result.
///
/// An empty sequence yields an empty valid result.
pub fn merge_all<I>(results: I) -> ValidationResult
where
    I: IntoIterator,
    I::Item: AsRef<ValidationResult>,
{
    results
        .into_iter()
        .fold(ValidationResult::new(), |mut acc, result| {
            acc.absorb(result.as_ref());
            acc
        })
}

/// Like [`merge_all`], but treats an absent sequence as a contract violation.
///
/// # Errors
///
/// Returns [`VerdictError::InvalidArgument`] when `results` is `None`.
pub fn try_merge_all<I>(results: Option<I>) -> Result<ValidationResult>
where
    I: IntoIterator,
    I::Item: AsRef<ValidationResult>,
{
    let absent = || VerdictError::invalid_argument("results", "sequence is absent");
    results.map(merge_all).ok_or_else(absent)
}

impl AsRef<ValidationResult> for ValidationResult {
    fn as_ref(&self) -> &ValidationResult {
        self
    }
}

impl ValidationResult {
    /// Returns `self` merged with `other`; see [`merge`].
    #[must_use]
    pub fn merge(&self, other: &ValidationResult) -> ValidationResult {
        merge(self, other)
    }

    /// Folds `other` into `self` in place.
    ///
    /// Equivalent to `*self = merge(self, &other)`.
    pub fn merge_with(&mut self, other: &ValidationResult) {
        self.absorb(other);
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        merge_all(iter)
    }
}

impl Extend<ValidationResult> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationResult>>(&mut self, iter: I) {
        for result in iter {
            self.absorb(&result);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
