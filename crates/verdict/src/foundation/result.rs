//! The structured outcome of a validation run
//!
//! A [`ValidationResult`] records every failed rule as a [`ValidationIssue`].
//! Issues attributed to a field are also indexed under that field name, in
//! insertion order, so presentation layers can look them up directly.
//!
//! Validity is derived from the recorded issues: a result is valid exactly
//! when it holds no errors.

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// VALIDATION ISSUE
// ============================================================================

/// A single failure message, optionally attributed to a field.
///
/// # Examples
///
/// ```rust
/// use verdict::foundation::ValidationIssue;
///
/// let issue = ValidationIssue::scoped("Email", "Invalid format");
/// assert_eq!(issue.to_string(), "Email: Invalid format");
///
/// let issue = ValidationIssue::unscoped("Too short");
/// assert_eq!(issue.to_string(), "Too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    field: Option<String>,
    message: String,
}

impl ValidationIssue {
    /// Creates an issue that is not attributed to any field.
    pub fn unscoped(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Creates an issue attributed to `field`.
    pub fn scoped(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns the field this issue is attributed to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the raw message, without any field prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the issue is attributed to a field.
    #[must_use]
    pub fn is_scoped(&self) -> bool {
        self.field.is_some()
    }

    /// Consumes the issue and returns its raw message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The report produced by validators and builders.
///
/// Holds three append-only views of the same failures:
///
/// - `issues`: every failure with its optional field, in evaluation order;
/// - `errors`: the rendered form of each issue (`"<field>: <message>"` for
///   field-scoped failures);
/// - `field_errors`: field name to that field's raw messages, with fields in
///   first-seen order.
///
/// # Examples
///
/// ```rust
/// use verdict::foundation::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid());
///
/// result.add_field_error("Email", "x");
/// result.add_field_error("Email", "y");
///
/// assert!(!result.is_valid());
/// assert_eq!(result.field_errors_for("Email"), ["x", "y"]);
/// assert_eq!(result.errors(), ["Email: x", "Email: y"]);
/// assert!(result.field_errors_for("Unknown").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
    errors: Vec<String>,
    field_errors: IndexMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Creates an empty, valid result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result holding a single unscoped error.
    ///
    /// Blank messages are dropped, as with [`add_error`](Self::add_error).
    pub fn with_error(message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.add_error(message);
        result
    }

    /// Creates a result holding a single field-scoped error.
    pub fn with_field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.add_field_error(field, message);
        result
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Appends an unscoped error.
    ///
    /// A message that is empty after trimming whitespace is ignored.
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.trim().is_empty() {
            return;
        }
        self.errors.push(message.clone());
        self.issues.push(ValidationIssue::unscoped(message));
    }

    /// Appends an error attributed to `field`.
    ///
    /// The raw message lands in `field_errors[field]`; the flat error list
    /// receives `"<field>: <message>"`. A field seen for the first time is
    /// placed after every existing field.
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.record(ValidationIssue::scoped(field, message));
    }

    /// Appends an already-built issue, routing it by its field.
    ///
    /// Unscoped issues go through [`add_error`](Self::add_error), so a blank
    /// unscoped message is ignored.
    pub fn push_issue(&mut self, issue: ValidationIssue) {
        if issue.is_scoped() {
            self.record(issue);
        } else {
            self.add_error(issue.into_message());
        }
    }

    // Appends `issue` as-is, blank message or not. A failed rule is always
    // recorded.
    pub(crate) fn record(&mut self, issue: ValidationIssue) {
        self.errors.push(issue.to_string());
        if let Some(field) = &issue.field {
            self.field_errors
                .entry(field.clone())
                .or_default()
                .push(issue.message.clone());
        }
        self.issues.push(issue);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns every failure message in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns every failure with its field attribution.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns the ordered mapping of field name to messages.
    #[must_use]
    pub fn field_errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.field_errors
    }

    /// Returns the messages recorded for `field`, or an empty slice.
    #[must_use]
    pub fn field_errors_for(&self, field: &str) -> &[String] {
        self.field_errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Returns the first message recorded for `field`.
    #[must_use]
    pub fn first_field_error(&self, field: &str) -> Option<&str> {
        self.field_errors_for(field).first().map(String::as_str)
    }

    /// Returns true if any failure is attributed to a field.
    #[must_use]
    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    /// Iterates over the names of fields that have errors, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_errors.keys().map(String::as_str)
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Snapshots the field errors as fixed-size message arrays.
    ///
    /// The returned map is detached from this result; later mutations are
    /// not reflected in it.
    #[must_use]
    pub fn to_error_dictionary(&self) -> IndexMap<String, Box<[String]>> {
        self.field_errors
            .iter()
            .map(|(field, errors)| (field.clone(), errors.as_slice().into()))
            .collect()
    }

    /// Converts into `Ok(())` when valid.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when at least one error is recorded.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// Consumes the result and returns its issues.
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    // Appends `other` wholesale. Keys new to `self` land after existing keys
    // in `other`'s order; existing keys get `other`'s messages appended.
    pub(crate) fn absorb(&mut self, other: &ValidationResult) {
        self.issues.extend(other.issues.iter().cloned());
        self.errors.extend(other.errors.iter().cloned());
        for (field, messages) in &other.field_errors {
            self.field_errors
                .entry(field.clone())
                .or_default()
                .extend(messages.iter().cloned());
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("Validation passed");
        }
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("field_errors", &self.field_errors)?;
        state.end()
    }
}

impl FromIterator<ValidationIssue> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        let mut result = Self::new();
        for issue in iter {
            result.push_issue(issue);
        }
        result
    }
}

// ============================================================================
// TESTS
// ============================================================================
