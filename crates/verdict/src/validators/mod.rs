//! Rule chains and the predicates they are built from
//!
//! - [`Validator`] / [`Rule`]: an ordered chain of predicate + message pairs
//! - [`predicates`]: generic predicates (presence, length, pattern, range)
//!
//! Field-type catalogs (email, phone, postal code, ...) are expected to be
//! factories returning a configured [`Validator`]:
//!
//! ```rust
//! use verdict::validators::{Validator, predicates};
//!
//! fn zip_code() -> Validator<str> {
//!     let five_digits = predicates::pattern(r"^\d{5}$").expect("static pattern");
//!     Validator::for_field("Zip")
//!         .must(predicates::required(), "Zip code is required")
//!         .must(five_digits, "Zip code must be 5 digits")
//! }
//!
//! assert!(zip_code().validate("90210").is_valid());
//! assert_eq!(zip_code().validate("").len(), 1);
//! ```

pub mod chain;
pub mod predicates;

pub use chain::{Rule, Validator};
