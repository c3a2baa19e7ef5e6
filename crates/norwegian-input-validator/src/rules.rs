//! The rule catalog.
//!
//! Each function builds one [`Rule`]: a side-effect free predicate plus the
//! message reported when it fails. Text rules look at the trimmed string form
//! of the value; [`boolean`] and [`allow`] look at the raw value.

use crate::message::Message;
use crate::messages;
use crate::value::Value;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Type alias for rule predicates.
type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

// Pre-compiled regex patterns
static PHONE_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();
static POSTAL_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static TWO_WORDS_REGEX: OnceLock<Regex> = OnceLock::new();
static THREE_WORDS_REGEX: OnceLock<Regex> = OnceLock::new();
static ORG_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in rule pattern must compile"))
}

fn phone_number_regex() -> &'static Regex {
    // Eight digits with an optional 00/+ country code, or a five digit
    // number starting with 0. Whitespace between digits is ignored.
    compiled(
        &PHONE_NUMBER_REGEX,
        r"^(?:(?:00|\+)\s*(?:[0-9]\s*){2})?(?:[0-9]\s*){8}$|^0[0-9]{4}$",
    )
}

fn email_address_regex() -> &'static Regex {
    compiled(
        &EMAIL_ADDRESS_REGEX,
        r"^[a-zA-Z0-9._%&\-][a-zA-Z0-9._%&+\-]*@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,6}$",
    )
}

fn postal_number_regex() -> &'static Regex {
    compiled(&POSTAL_NUMBER_REGEX, r"^[0-9]{4}$")
}

fn number_regex() -> &'static Regex {
    compiled(&NUMBER_REGEX, r"^[0-9]*$")
}

fn url_regex() -> &'static Regex {
    compiled(&URL_REGEX, r"^[^ ]+\.[^ ]+$")
}

// A "word" is three or more letters, Norwegian letters included.
fn two_words_regex() -> &'static Regex {
    compiled(
        &TWO_WORDS_REGEX,
        r"[a-zA-ZæøåÆØÅ]{3,}.*\s[a-zA-ZæøåÆØÅ]{3,}",
    )
}

fn three_words_regex() -> &'static Regex {
    compiled(
        &THREE_WORDS_REGEX,
        r"[a-zA-ZæøåÆØÅ]{3,}.*\s[a-zA-ZæøåÆØÅ]{3,}.*\s[a-zA-ZæøåÆØÅ]{3,}",
    )
}

fn org_number_regex() -> &'static Regex {
    compiled(
        &ORG_NUMBER_REGEX,
        r"^[89][0-9]{2}\s?[0-9]{3}\s?[0-9]{3}$",
    )
}

/// One predicate over a candidate value and the message to report if it fails.
#[derive(Clone)]
pub struct Rule {
    code: &'static str,
    predicate: PredicateFn,
    message: Option<Message>,
}

impl Rule {
    /// Create a rule from a predicate and a failure message.
    ///
    /// `code` names the rule in diagnostics (e.g. `"phone_number"`).
    pub fn new<F>(code: &'static str, predicate: F, message: impl Into<Message>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            code,
            predicate: Arc::new(predicate),
            message: Some(message.into()),
        }
    }

    fn with_default<F>(
        code: &'static str,
        predicate: F,
        message: Option<Message>,
        default: &'static str,
    ) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(code, predicate, message.unwrap_or_else(|| Message::from(default)))
    }

    /// Rule name used in diagnostics.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Run the predicate.
    pub fn test(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// The failure message, if this rule has one.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Resolve the failure message for `value`.
    pub fn error_message(&self, value: &Value) -> Option<String> {
        self.message.as_ref().map(|m| m.resolve(value))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn matches_trimmed(regex: fn() -> &'static Regex) -> impl Fn(&Value) -> bool + Send + Sync {
    move |value: &Value| regex().is_match(value.as_text().trim())
}

/// Norwegian phone number: eight digits, optionally prefixed by `+47`/`0047`,
/// or a five digit number starting with `0`.
pub fn phone_number(message: Option<Message>) -> Rule {
    Rule::with_default(
        "phone_number",
        matches_trimmed(phone_number_regex),
        message,
        messages::PHONE_NUMBER,
    )
}

/// E-mail address.
pub fn email_address(message: Option<Message>) -> Rule {
    Rule::with_default(
        "email_address",
        matches_trimmed(email_address_regex),
        message,
        messages::EMAIL_ADDRESS,
    )
}

/// At most `max` characters after trimming.
pub fn max_length(max: usize, message: Option<Message>) -> Rule {
    Rule::with_default(
        "max_length",
        move |value: &Value| value.as_text().trim().chars().count() <= max,
        message,
        messages::MAX_LENGTH,
    )
}

/// Four digit postal number.
pub fn postal_number(message: Option<Message>) -> Rule {
    Rule::with_default(
        "postal_number",
        matches_trimmed(postal_number_regex),
        message,
        messages::POSTAL_NUMBER,
    )
}

/// Digits only.
pub fn number(message: Option<Message>) -> Rule {
    Rule::with_default(
        "number",
        matches_trimmed(number_regex),
        message,
        messages::NUMBER,
    )
}

/// The raw value is a boolean. Text such as `"true"` does not pass.
pub fn boolean(message: Option<Message>) -> Rule {
    Rule::with_default(
        "boolean",
        |value: &Value| matches!(value, Value::Bool(_)),
        message,
        messages::BOOLEAN,
    )
}

/// Something dot something, without spaces.
pub fn url(message: Option<Message>) -> Rule {
    Rule::with_default("url", matches_trimmed(url_regex), message, messages::URL)
}

/// At least two words of three or more letters.
pub fn at_least_two_words(message: Option<Message>) -> Rule {
    Rule::with_default(
        "at_least_two_words",
        matches_trimmed(two_words_regex),
        message,
        messages::AT_LEAST_TWO_WORDS,
    )
}

/// At least three words of three or more letters.
pub fn at_least_three_words(message: Option<Message>) -> Rule {
    Rule::with_default(
        "at_least_three_words",
        matches_trimmed(three_words_regex),
        message,
        messages::AT_LEAST_THREE_WORDS,
    )
}

/// Norwegian organization number: nine digits starting with 8 or 9,
/// optionally grouped 3-3-3.
pub fn org_number(message: Option<Message>) -> Rule {
    Rule::with_default(
        "org_number",
        matches_trimmed(org_number_regex),
        message,
        messages::ORG_NUMBER,
    )
}

/// Caller supplied pattern, matched against the trimmed text.
///
/// There is no default message: without a custom one the failure is
/// reported with no message.
pub fn pattern(regex: Regex, message: Option<Message>) -> Rule {
    Rule {
        code: "pattern",
        predicate: Arc::new(move |value: &Value| regex.is_match(value.as_text().trim())),
        message,
    }
}

/// The raw value equals `allowed`.
pub fn allow(allowed: Value, message: Option<Message>) -> Rule {
    Rule::with_default(
        "allow",
        move |value: &Value| *value == allowed,
        message,
        messages::ALLOW,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(rule: &Rule, value: impl Into<Value>) -> bool {
        rule.test(&value.into())
    }

    #[test]
    fn phone_number_valid() {
        let rule = phone_number(None);
        for input in [
            "12345678",
            "69 14 26 96",
            "6   9 14 26 9  6 ",
            "934 17 480",
            "0047 934 17 480",
            "+47 934 17 480",
            " +47 934 17 480",
            "01234",
        ] {
            assert!(passes(&rule, input), "{input:?} should pass");
        }
    }

    #[test]
    fn phone_number_invalid() {
        let rule = phone_number(None);
        for input in [
            "6914269",
            "69-14-26-96",
            "691426963",
            "+0047 78978978",
            "12345",
        ] {
            assert!(!passes(&rule, input), "{input:?} should fail");
        }
    }

    #[test]
    fn email_address_rule() {
        let rule = email_address(None);
        assert!(passes(&rule, "name@internet.org"));
        assert!(passes(&rule, " ola.nordmann+test@firma.no "));
        assert!(!passes(&rule, "@internet.org"));
        assert!(!passes(&rule, "name@internet"));
        assert!(!passes(&rule, "name@"));
    }

    #[test]
    fn max_length_counts_trimmed_chars() {
        let rule = max_length(3, None);
        assert!(passes(&rule, "Ok!"));
        assert!(passes(&rule, "  Ok!  "));
        assert!(passes(&rule, "æøå"));
        assert!(!passes(&rule, "Too long"));
    }

    #[test]
    fn postal_number_rule() {
        let rule = postal_number(None);
        assert!(passes(&rule, "0877"));
        assert!(!passes(&rule, "12345"));
        assert!(!passes(&rule, "08a7"));
    }

    #[test]
    fn number_rule() {
        let rule = number(None);
        assert!(passes(&rule, "1234"));
        assert!(passes(&rule, 1234));
        assert!(!passes(&rule, "1234a"));
        assert!(!passes(&rule, 1.5));
    }

    #[test]
    fn boolean_rule() {
        let rule = boolean(None);
        assert!(passes(&rule, true));
        assert!(passes(&rule, false));
        assert!(!passes(&rule, "true"));
        assert!(!passes(&rule, "Some text"));
    }

    #[test]
    fn url_rule() {
        let rule = url(None);
        assert!(passes(&rule, "http://finn.no"));
        assert!(passes(&rule, "finn.no"));
        assert!(!passes(&rule, "finnno"));
        assert!(!passes(&rule, "finn .no"));
    }

    #[test]
    fn word_count_rules() {
        let two = at_least_two_words(None);
        assert!(passes(&two, "one two"));
        assert!(passes(&two, "blå bær"));
        assert!(!passes(&two, "one"));
        assert!(!passes(&two, "a b"));

        let three = at_least_three_words(None);
        assert!(passes(&three, "one two three"));
        assert!(!passes(&three, "one two"));
    }

    #[test]
    fn org_number_rule() {
        let rule = org_number(None);
        assert!(passes(&rule, "980872041"));
        assert!(passes(&rule, "980 872 041"));
        assert!(!passes(&rule, "123456789"));
        assert!(!passes(&rule, "98087204"));
    }

    #[test]
    fn pattern_rule_has_no_default_message() {
        let rule = pattern(Regex::new(r"\d+").unwrap(), None);
        assert!(passes(&rule, "123"));
        assert!(passes(&rule, "abc1"));
        assert!(!passes(&rule, "hello"));
        assert!(rule.error_message(&Value::from("hello")).is_none());
    }

    #[test]
    fn allow_compares_raw_values() {
        let rule = allow(Value::from(true), None);
        assert!(passes(&rule, true));
        assert!(!passes(&rule, false));
        assert!(!passes(&rule, "true"));

        let rule = allow(Value::from("abc"), None);
        assert!(passes(&rule, "abc"));
        assert!(!passes(&rule, "ABC"));
    }

    #[test]
    fn default_and_custom_messages() {
        let value = Value::from("x");
        assert_eq!(
            phone_number(None).error_message(&value).as_deref(),
            Some("Ugyldig telefonnummer")
        );
        assert_eq!(
            phone_number(Some(Message::from("custom message")))
                .error_message(&value)
                .as_deref(),
            Some("custom message")
        );
    }

    #[test]
    fn rule_codes() {
        assert_eq!(org_number(None).code(), "org_number");
        assert_eq!(max_length(1, None).code(), "max_length");
        assert_eq!(
            Rule::new("custom", |_: &Value| true, "feil").code(),
            "custom"
        );
    }
}
