//! # Norwegian Input Validator
//!
//! Immutable, chainable validation of single form field values with
//! Norwegian error messages.
//!
//! ## Example
//!
//! ```rust
//! use norwegian_input_validator::prelude::*;
//!
//! let org = Validator::new().required().org_number();
//!
//! assert!(org.validate("980 872 041").is_valid().unwrap());
//!
//! let result = org.validate("123456789");
//! assert!(!result.is_valid().unwrap());
//! assert_eq!(result.error_message(), Some("Ugyldig organisasjonsnummer"));
//! ```
//!
//! ## Rules
//!
//! - `phone_number` - Norwegian phone number
//! - `email_address` - E-mail address
//! - `max_length(max)` - At most `max` characters
//! - `postal_number` - Four digit postal number
//! - `number` - Digits only
//! - `boolean` - A boolean value
//! - `url` - URL-like text
//! - `at_least_two_words` / `at_least_three_words` - Word count
//! - `org_number` - Norwegian organization number
//! - `pattern(regex)` - Custom regex
//! - `allow(value)` - A single allowed value
//!
//! Each has a `*_with` variant taking a custom message, either fixed text or
//! a function of the rejected value.
//!
//! ## Evaluation
//!
//! An empty value (null or whitespace-only text) fails with "Må fylles ut" if
//! the field is `required`, and passes otherwise; no rule sees it. Any other
//! value is checked against the rules in order and the first failure is
//! reported.

#[macro_use]
mod tracing_macros;

mod config;
mod error;
mod message;
pub mod messages;
pub mod rules;
mod validator;
mod value;


pub use config::{FieldConfig, RuleConfig};
pub use error::{Error, Result};
pub use message::Message;
pub use rules::Rule;
pub use validator::{Outcome, Validator};
pub use value::Value;

/// Prelude module for validation
pub mod prelude {
    pub use crate::config::{FieldConfig, RuleConfig};
    pub use crate::error::Error;
    pub use crate::message::Message;
    pub use crate::rules::Rule;
    pub use crate::validator::{Outcome, Validator};
    pub use crate::value::Value;
}
