//! # verdict
//!
//! A rule-chain validation engine producing field-scoped, mergeable reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! struct Booking {
//!     email: String,
//!     guests: u32,
//! }
//!
//! let email_format = pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
//! let email = Validator::<str>::new()
//!     .must(required(), "Email is required")
//!     .must(email_format, "Email is invalid");
//! let guests = Validator::<u32>::new().must(in_range(1u32, 10), "Between 1 and 10 guests");
//!
//! let booking = ValidationBuilder::<Booking>::new()
//!     .field("Email", |b: &Booking| b.email.as_str(), email)
//!     .field("Guests", |b: &Booking| &b.guests, guests);
//!
//! let result = booking.validate(&Booking { email: "not-an-email".into(), guests: 12 });
//! assert!(!result.is_valid());
//! assert_eq!(result.first_field_error("Email"), Some("Email is invalid"));
//! assert_eq!(result.first_field_error("Guests"), Some("Between 1 and 10 guests"));
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: [`ValidationResult`](foundation::ValidationResult), the
//!   [`Validate`](foundation::Validate) trait, [`VerdictError`](foundation::VerdictError)
//! - [`validators`]: the [`Validator`](validators::Validator) rule chain and
//!   generic [`predicates`](validators::predicates)
//! - [`combinators`]: the merge algebra and [`ValidationBuilder`](combinators::ValidationBuilder)
//!
//! Every rule in a chain is evaluated and every property in a builder is
//! visited; a report always lists all failures at once.

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
