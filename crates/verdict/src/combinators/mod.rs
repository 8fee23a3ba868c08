//! Combinators for composing validation results
//!
//! - [`merge`] / [`merge_all`] / [`try_merge_all`]: the merge algebra
//! - [`ScopePolicy`]: how property results are attributed to property names
//! - [`ValidationBuilder`]: per-property composition over an object
//!
//! # Examples
//!
//! ```rust
//! use verdict::combinators::merge_all;
//! use verdict::validators::{Validator, predicates};
//!
//! let name = Validator::<str>::for_field("Name").must(predicates::required(), "Required");
//! let city = Validator::<str>::for_field("City").must(predicates::max_length(5), "Too long");
//!
//! let result = merge_all([name.validate(""), city.validate("Amsterdam")]);
//! assert_eq!(result.errors(), ["Name: Required", "City: Too long"]);
//! ```

pub mod builder;
pub mod merge;
pub mod scope;

pub use builder::{BuilderOptions, ValidationBuilder};
pub use merge::{merge, merge_all, try_merge_all};
pub use scope::ScopePolicy;
