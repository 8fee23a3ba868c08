//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Results**: `ValidationResult`, `ValidationIssue`
//! - **Traits**: `Validate`
//! - **Errors**: `VerdictError` for contract violations
//!
//! # Architecture
//!
//! ## 1. Failures are data
//!
//! A rule that does not hold never raises an error. It becomes an entry in
//! the returned [`ValidationResult`], scoped to a field or not:
//!
//! ```rust
//! use verdict::foundation::ValidationResult;
//!
//! let mut result = ValidationResult::new();
//! result.add_field_error("username", "Must be at least 3 characters");
//! assert!(!result.is_valid());
//! ```
//!
//! ## 2. Misuse is an error
//!
//! Calling the engine against its contract returns a [`VerdictError`]:
//!
//! ```rust
//! use verdict::combinators::try_merge_all;
//! use verdict::foundation::{ValidationResult, VerdictError};
//!
//! let err = try_merge_all(None::<Vec<ValidationResult>>).unwrap_err();
//! assert!(matches!(err, VerdictError::InvalidArgument { .. }));
//! ```

pub mod error;
pub mod result;
pub mod traits;

pub use error::{Result, VerdictError};
pub use result::{ValidationIssue, ValidationResult};
pub use traits::Validate;
