//! Declarative field configuration.
//!
//! A [`FieldConfig`] describes the same chain the builder methods produce,
//! as data that can be loaded from JSON (or any serde format).
//!
//! ```rust
//! use norwegian_input_validator::FieldConfig;
//!
//! let config: FieldConfig = serde_json::from_str(r#"{
//!     "required": true,
//!     "rules": [
//!         { "type": "postal_number" },
//!         { "type": "max_length", "max": 4, "message": "For langt" }
//!     ]
//! }"#).unwrap();
//!
//! let validator = config.build().unwrap();
//! assert_eq!(validator.validate("").error_message(), Some("Må fylles ut"));
//! assert!(validator.validate("0877").is_valid().unwrap());
//! ```

use crate::error::{Error, Result};
use crate::message::Message;
use crate::rules::{self, Rule};
use crate::validator::Validator;
use crate::value::Value;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One rule, as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Norwegian phone number
    PhoneNumber {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// E-mail address
    EmailAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Maximum trimmed length
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Four digit postal number
    PostalNumber {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Digits only
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Boolean value
    Boolean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// URL-like text
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Two or more words
    AtLeastTwoWords {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Three or more words
    AtLeastThreeWords {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Norwegian organization number
    OrgNumber {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Regex pattern, compiled when the rule is built
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Single allowed value
    Allow {
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleConfig {
    /// Build the rule this entry describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a `pattern` entry does not compile.
    pub fn to_rule(&self) -> Result<Rule> {
        let rule = match self {
            RuleConfig::PhoneNumber { message } => rules::phone_number(custom(message)),
            RuleConfig::EmailAddress { message } => rules::email_address(custom(message)),
            RuleConfig::MaxLength { max, message } => rules::max_length(*max, custom(message)),
            RuleConfig::PostalNumber { message } => rules::postal_number(custom(message)),
            RuleConfig::Number { message } => rules::number(custom(message)),
            RuleConfig::Boolean { message } => rules::boolean(custom(message)),
            RuleConfig::Url { message } => rules::url(custom(message)),
            RuleConfig::AtLeastTwoWords { message } => rules::at_least_two_words(custom(message)),
            RuleConfig::AtLeastThreeWords { message } => {
                rules::at_least_three_words(custom(message))
            }
            RuleConfig::OrgNumber { message } => rules::org_number(custom(message)),
            RuleConfig::Pattern { pattern, message } => {
                let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                rules::pattern(regex, custom(message))
            }
            RuleConfig::Allow { value, message } => rules::allow(value.clone(), custom(message)),
        };
        Ok(rule)
    }
}

fn custom(message: &Option<String>) -> Option<Message> {
    message.clone().map(Message::from)
}

/// A whole field: required flag plus rules in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Whether an empty value fails
    #[serde(default)]
    pub required: bool,
    /// Replaces "Må fylles ut"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
    /// Rules in evaluation order
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl FieldConfig {
    /// Build the validator this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a `pattern` rule does not compile.
    pub fn build(&self) -> Result<Validator> {
        let validator = self
            .rules
            .iter()
            .try_fold(Validator::new(), |validator, rule| {
                Ok::<_, Error>(validator.rule(rule.to_rule()?))
            })?;

        Ok(match (self.required, &self.required_message) {
            (true, Some(message)) => validator.required_with(message.clone()),
            (true, None) => validator.required(),
            (false, _) => validator,
        })
    }
}

impl TryFrom<FieldConfig> for Validator {
    type Error = Error;

    fn try_from(config: FieldConfig) -> Result<Self> {
        config.build()
    }
}

impl TryFrom<&FieldConfig> for Validator {
    type Error = Error;

    fn try_from(config: &FieldConfig) -> Result<Self> {
        config.build()
    }
}
