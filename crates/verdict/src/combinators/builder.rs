//! BUILDER - composes per-property validations into one report
//!
//! A [`ValidationBuilder`] keeps an insertion-ordered map of property name to
//! a function producing that property's [`ValidationResult`]. Validating an
//! entity runs every function in order, rescopes each result under its
//! property name according to the configured [`ScopePolicy`], and merges
//! them.

use crate::combinators::scope::ScopePolicy;
use crate::foundation::{Result, Validate, ValidationResult, VerdictError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

type Check<T> = Arc<dyn Fn(&T) -> ValidationResult + Send + Sync>;

// ============================================================================
// OPTIONS
// ============================================================================

/// Builder configuration.
///
/// Deserializable so it can live alongside other application settings:
///
/// ```rust
/// use verdict::combinators::{BuilderOptions, ScopePolicy};
///
/// let options: BuilderOptions = serde_json::from_str(r#"{"scope_policy":"force_key"}"#).unwrap();
/// assert_eq!(options.scope_policy, ScopePolicy::ForceKey);
///
/// let defaults: BuilderOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, BuilderOptions::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// How property results are attributed to the property name.
    pub scope_policy: ScopePolicy,
}

// ============================================================================
// VALIDATION BUILDER
// ============================================================================

/// Validates an object property by property.
///
/// # Examples
///
/// ```rust
/// use verdict::combinators::ValidationBuilder;
/// use verdict::validators::{Validator, predicates};
///
/// struct Signup {
///     name: String,
///     age: u32,
/// }
///
/// let name = Validator::<str>::new().must(predicates::required(), "Name is required");
/// let age = Validator::<u32>::new().must(predicates::at_least(18u32), "Must be an adult");
///
/// let builder = ValidationBuilder::<Signup>::new()
///     .field("Name", |s: &Signup| s.name.as_str(), name)
///     .field("Age", |s: &Signup| &s.age, age);
///
/// let result = builder.validate(&Signup { name: String::new(), age: 12 });
/// assert_eq!(result.fields().collect::<Vec<_>>(), ["Name", "Age"]);
/// assert_eq!(result.first_field_error("Age"), Some("Must be an adult"));
/// ```
pub struct ValidationBuilder<T: ?Sized> {
    entries: IndexMap<String, Check<T>>,
    options: BuilderOptions,
}

impl<T: ?Sized> ValidationBuilder<T> {
    /// Creates an empty builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    /// Creates an empty builder with the given options.
    #[must_use]
    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            entries: IndexMap::new(),
            options,
        }
    }

    /// Sets the scope policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_scope_policy(mut self, scope_policy: ScopePolicy) -> Self {
        self.options.scope_policy = scope_policy;
        self
    }

    /// Returns the current options.
    #[must_use]
    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Registers `check` under `property`.
    ///
    /// Registering an existing property replaces its function but keeps its
    /// position.
    #[must_use = "builder methods must be chained or built"]
    pub fn add<F>(mut self, property: impl Into<String>, check: F) -> Self
    where
        F: Fn(&T) -> ValidationResult + Send + Sync + 'static,
    {
        let property = property.into();
        if self.contains(&property) {
            tracing::warn!(property = %property, "replacing existing property validation");
        }
        self.entries.insert(property, Arc::new(check));
        self
    }

    /// Registers `check` under `property`, rejecting blank and duplicate names.
    ///
    /// # Errors
    ///
    /// - [`VerdictError::InvalidArgument`] if `property` is blank.
    /// - [`VerdictError::DuplicateProperty`] if `property` is already registered.
    pub fn try_add<F>(self, property: impl Into<String>, check: F) -> Result<Self>
    where
        F: Fn(&T) -> ValidationResult + Send + Sync + 'static,
    {
        let property = property.into();
        if property.trim().is_empty() {
            return Err(VerdictError::invalid_argument(
                "property",
                "property name is blank",
            ));
        }
        if self.contains(&property) {
            return Err(VerdictError::duplicate_property(property));
        }
        Ok(self.add(property, check))
    }

    /// Registers `validator`, applied to the value `accessor` projects out of
    /// the entity.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<U, A, V>(self, property: impl Into<String>, accessor: A, validator: V) -> Self
    where
        U: ?Sized,
        A: Fn(&T) -> &U + Send + Sync + 'static,
        V: Validate<Input = U> + Send + Sync + 'static,
    {
        self.add(property, move |entity: &T| {
            validator.validate(accessor(entity))
        })
    }

    /// Iterates over registered property names in insertion order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns true if `property` is registered.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    /// Returns the number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no property is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every property validation against `entity` and merges the results.
    pub fn validate(&self, entity: &T) -> ValidationResult {
        let policy = self.options.scope_policy;
        let mut aggregate = ValidationResult::new();

        for (property, check) in &self.entries {
            let result = check(entity);
            let rescoped = policy.apply(property, &result);

            tracing::trace!(
                property = %property,
                valid = result.is_valid(),
                rescoped = rescoped.is_some(),
                "property validated"
            );

            aggregate.merge_with(rescoped.as_ref().unwrap_or(&result));
        }

        tracing::debug!(
            properties = self.entries.len(),
            errors = aggregate.len(),
            valid = aggregate.is_valid(),
            "entity validated"
        );

        aggregate
    }
}

impl<T: ?Sized> Default for ValidationBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for ValidationBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            options: self.options,
        }
    }
}

impl<T: ?Sized> fmt::Debug for ValidationBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationBuilder")
            .field("properties", &self.entries.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: ?Sized> Validate for ValidationBuilder<T> {
    type Input = T;

    fn validate(&self, input: &T) -> ValidationResult {
        ValidationBuilder::validate(self, input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
