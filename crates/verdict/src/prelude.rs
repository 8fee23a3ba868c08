//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict::prelude::*;` import that brings in the
//! result type, the rule chain, the builder, the merge functions, and the
//! generic predicates.

// ============================================================================
// FOUNDATION: Results, traits, errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationIssue, ValidationResult, VerdictError};

// ============================================================================
// VALIDATORS: Rule chains and predicates
// ============================================================================

pub use crate::validators::predicates::{
    at_least, at_most, in_range, length_between, matches, max_length, min_length, one_of, pattern,
    present, required,
};
pub use crate::validators::{Rule, Validator};

// ============================================================================
// COMBINATORS: Merge algebra and object composition
// ============================================================================

pub use crate::combinators::{
    BuilderOptions, ScopePolicy, ValidationBuilder, merge, merge_all, try_merge_all,
};
