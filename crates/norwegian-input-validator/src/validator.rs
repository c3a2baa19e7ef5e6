//! The chainable validator.

use crate::error::{Error, Result};
use crate::message::{resolve_or, Message};
use crate::messages;
use crate::rules::{self, Rule};
use crate::value::Value;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Whether the field is required, and what to say when it is left empty.
#[derive(Debug, Clone, Default)]
struct Options {
    required: bool,
    required_message: Option<Message>,
}

/// Result of evaluating a value against a [`Validator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    valid: bool,
    error_message: Option<String>,
}

impl Outcome {
    fn valid() -> Self {
        Self {
            valid: true,
            error_message: None,
        }
    }

    fn invalid(error_message: Option<String>) -> Self {
        Self {
            valid: false,
            error_message,
        }
    }

    /// Whether the value passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Message of the check that failed, `None` when valid.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// An immutable, chainable validator for one form field.
///
/// Every builder method returns a new validator; the receiver is left as it
/// was. Rules are checked in the order they were added and the first failing
/// rule decides the message. [`required`](Self::required) is checked before
/// any rule regardless of where it appears in the chain.
///
/// ## Example
///
/// ```rust
/// use norwegian_input_validator::Validator;
///
/// let phone = Validator::new().required().phone_number();
///
/// let result = phone.validate("12345");
/// assert!(!result.is_valid().unwrap());
/// assert_eq!(result.error_message(), Some("Ugyldig telefonnummer"));
///
/// let result = phone.validate("");
/// assert_eq!(result.error_message(), Some("Må fylles ut"));
///
/// assert!(phone.validate("+47 934 17 480").is_valid().unwrap());
/// ```
#[derive(Clone)]
pub struct Validator {
    rules: Arc<[Rule]>,
    options: Options,
    outcome: Option<Outcome>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rules: Arc::from(Vec::new()),
            options: Options::default(),
            outcome: None,
        }
    }
}

macro_rules! named_rules {
    ($( $(#[$doc:meta])* $name:ident / $with:ident => $ctor:path; )*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(&self) -> Self {
                self.with_rule($ctor(None))
            }

            #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with a custom error message.")]
            #[must_use]
            pub fn $with(&self, message: impl Into<Message>) -> Self {
                self.with_rule($ctor(Some(message.into())))
            }
        )*
    };
}

impl Validator {
    /// Create a validator with no rules that does not require a value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new validator with `rule` appended and the options copied.
    fn with_rule(&self, rule: Rule) -> Self {
        let mut rules = Vec::with_capacity(self.rules.len() + 1);
        rules.extend(self.rules.iter().cloned());
        rules.push(rule);

        Self {
            rules: rules.into(),
            options: self.options.clone(),
            outcome: None,
        }
    }

    fn with_options(&self, options: Options) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            options,
            outcome: None,
        }
    }

    /// Append a custom rule.
    ///
    /// ```rust
    /// use norwegian_input_validator::{Rule, Validator, Value};
    ///
    /// let even = Validator::new().rule(Rule::new(
    ///     "even_length",
    ///     |value: &Value| value.as_text().trim().len() % 2 == 0,
    ///     "Må ha et partall tegn",
    /// ));
    ///
    /// assert!(even.validate("ab").is_valid().unwrap());
    /// ```
    #[must_use]
    pub fn rule(&self, rule: Rule) -> Self {
        self.with_rule(rule)
    }

    /// Make an empty value a failure, reported as "Må fylles ut".
    ///
    /// The rule sequence is kept as is.
    #[must_use]
    pub fn required(&self) -> Self {
        self.with_options(Options {
            required: true,
            required_message: None,
        })
    }

    /// [`required`](Self::required) with a custom error message.
    #[must_use]
    pub fn required_with(&self, message: impl Into<Message>) -> Self {
        self.with_options(Options {
            required: true,
            required_message: Some(message.into()),
        })
    }

    named_rules! {
        /// Norwegian phone number, e.g. `934 17 480` or `+47 934 17 480`.
        phone_number / phone_number_with => rules::phone_number;
        /// E-mail address.
        email_address / email_address_with => rules::email_address;
        /// Four digit postal number.
        postal_number / postal_number_with => rules::postal_number;
        /// Digits only.
        number / number_with => rules::number;
        /// A boolean value.
        boolean / boolean_with => rules::boolean;
        /// Something that looks like a URL.
        url / url_with => rules::url;
        /// At least two words of three or more letters.
        at_least_two_words / at_least_two_words_with => rules::at_least_two_words;
        /// At least three words of three or more letters.
        at_least_three_words / at_least_three_words_with => rules::at_least_three_words;
        /// Norwegian organization number, e.g. `980 872 041`.
        org_number / org_number_with => rules::org_number;
    }

    /// At most `max` characters, surrounding whitespace not counted.
    #[must_use]
    pub fn max_length(&self, max: usize) -> Self {
        self.with_rule(rules::max_length(max, None))
    }

    /// [`max_length`](Self::max_length) with a custom error message.
    #[must_use]
    pub fn max_length_with(&self, max: usize, message: impl Into<Message>) -> Self {
        self.with_rule(rules::max_length(max, Some(message.into())))
    }

    /// The trimmed text must match `regex`.
    ///
    /// Without a custom message a failure carries no error message.
    #[must_use]
    pub fn pattern(&self, regex: Regex) -> Self {
        self.with_rule(rules::pattern(regex, None))
    }

    /// [`pattern`](Self::pattern) with a custom error message.
    #[must_use]
    pub fn pattern_with(&self, regex: Regex, message: impl Into<Message>) -> Self {
        self.with_rule(rules::pattern(regex, Some(message.into())))
    }

    /// Only `allowed` passes, compared as a raw value.
    #[must_use]
    pub fn allow(&self, allowed: impl Into<Value>) -> Self {
        self.with_rule(rules::allow(allowed.into(), None))
    }

    /// [`allow`](Self::allow) with a custom error message.
    #[must_use]
    pub fn allow_with(&self, allowed: impl Into<Value>, message: impl Into<Message>) -> Self {
        self.with_rule(rules::allow(allowed.into(), Some(message.into())))
    }

    /// Evaluate `value` without recording anything.
    pub fn evaluate(&self, value: &Value) -> Outcome {
        if value.is_empty() {
            if self.options.required {
                trace_debug!(kind = value.kind(), "required value is missing");
                let message = resolve_or(
                    self.options.required_message.as_ref(),
                    value,
                    messages::REQUIRED,
                );
                return Outcome::invalid(Some(message));
            }
            return Outcome::valid();
        }

        match self.rules.iter().find(|rule| !rule.test(value)) {
            Some(rule) => {
                trace_debug!(rule = rule.code(), kind = value.kind(), "validation rule failed");
                Outcome::invalid(rule.error_message(value))
            }
            None => {
                trace_trace!(rules = self.rules.len(), "value passed all rules");
                Outcome::valid()
            }
        }
    }

    /// Validate `value`, returning a validator that carries the outcome.
    ///
    /// The receiver is untouched. Validating the returned validator again
    /// replaces the recorded outcome.
    #[must_use]
    pub fn validate(&self, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            rules: Arc::clone(&self.rules),
            options: self.options.clone(),
            outcome: Some(self.evaluate(&value)),
        }
    }

    /// Whether the last validated value passed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotValidated`] if [`validate`](Self::validate) has
    /// not produced this instance.
    pub fn is_valid(&self) -> Result<bool> {
        self.outcome
            .as_ref()
            .map(Outcome::is_valid)
            .ok_or(Error::NotValidated)
    }

    /// Message of the failed check. `None` when valid or not validated yet.
    pub fn error_message(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(Outcome::error_message)
    }

    /// The recorded outcome, if validated.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Whether an empty value is a failure.
    pub fn is_required(&self) -> bool {
        self.options.required
    }

    /// Declared rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of declared rules. `required` is not counted.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field(
                "rules",
                &self.rules.iter().map(Rule::code).collect::<Vec<_>>(),
            )
            .field("required", &self.options.required)
            .field("outcome", &self.outcome)
            .finish()
    }
}
