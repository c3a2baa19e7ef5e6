//! Error messages: fixed text or computed from the rejected value.

use crate::value::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Type alias for message producer functions.
type MessageFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// The message reported when a rule (or the required check) fails.
///
/// ## Example
///
/// ```rust
/// use norwegian_input_validator::{Message, Value};
///
/// let fixed = Message::from("Ugyldig");
/// let computed = Message::from(|value: &Value| format!("{} er ikke lov", value.as_text()));
///
/// assert_eq!(fixed.resolve(&Value::from("x")), "Ugyldig");
/// assert_eq!(computed.resolve(&Value::from("x")), "x er ikke lov");
/// ```
#[derive(Clone)]
pub enum Message {
    /// A fixed message
    Literal(Cow<'static, str>),
    /// A message computed from the value that failed
    Computed(MessageFn),
}

impl Message {
    /// Create a message computed from the failing value.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        Message::Computed(Arc::new(f))
    }

    /// Resolve the message text for `value`.
    ///
    /// Both the required check and ordinary rules go through here.
    pub fn resolve(&self, value: &Value) -> String {
        match self {
            Message::Literal(text) => text.to_string(),
            Message::Computed(f) => f(value),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Message::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Message::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Literal(Cow::Owned(text))
    }
}

impl<F> From<F> for Message
where
    F: Fn(&Value) -> String + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Message::computed(f)
    }
}

/// Resolve an optional custom message, falling back to `default`.
pub(crate) fn resolve_or(message: Option<&Message>, value: &Value, default: &str) -> String {
    message.map_or_else(|| default.to_string(), |m| m.resolve(value))
}
