//! Contract-violation errors
//!
//! A failed rule is never an error: it is an entry in a
//! [`ValidationResult`](crate::foundation::ValidationResult). The types in
//! this module describe misuse of the engine itself, such as folding an
//! absent sequence of results or registering the same property twice.

use std::borrow::Cow;

// ============================================================================
// VERDICT ERROR
// ============================================================================

/// Error raised when the engine is used against its contract.
///
/// These indicate a bug in the calling code, never bad input data, and are
/// not converted into validation messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VerdictError {
    /// An argument was absent or malformed.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What was wrong with it.
        reason: Cow<'static, str>,
    },

    /// A builder already has an entry under this property name.
    #[error("property `{property}` is already registered")]
    DuplicateProperty {
        /// The property name that was registered twice.
        property: String,
    },
}

impl VerdictError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Creates a [`DuplicateProperty`](Self::DuplicateProperty) error.
    pub fn duplicate_property(property: impl Into<String>) -> Self {
        Self::DuplicateProperty {
            property: property.into(),
        }
    }

    /// Returns true if this is an `InvalidArgument` error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result alias for fallible engine operations.
pub type Result<T, E = VerdictError> = std::result::Result<T, E>;
