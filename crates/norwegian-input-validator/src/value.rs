//! Scalar input values.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single form field value.
///
/// Deserializes untagged, so JSON `null`, booleans, numbers and strings map
/// straight onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// No value at all
    #[default]
    Null,
    /// A boolean, e.g. from a checkbox
    Bool(bool),
    /// A number
    Number(f64),
    /// Free text
    Text(String),
}

impl Value {
    /// Whether the value counts as "not filled in".
    ///
    /// Null and whitespace-only text are empty. Numbers and booleans never are.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.trim().is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// String form of the value, as seen by the text-oriented rules.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Number(number) => Cow::Owned(format_number(*number)),
            Value::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }
}

// Integral numbers print without a fractional part ("12", not "12.0").
fn format_number(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or(Error::UnsupportedValue("number")),
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Array(_) => Err(Error::UnsupportedValue("array")),
            serde_json::Value::Object(_) => Err(Error::UnsupportedValue("object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values() {
        assert!(Value::Null.is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::from("  \t ").is_empty());
        assert!(Value::from(None::<&str>).is_empty());
    }

    #[test]
    fn non_empty_values() {
        assert!(!Value::from("a").is_empty());
        assert!(!Value::from(0).is_empty());
        assert!(!Value::from(false).is_empty());
    }

    #[test]
    fn text_form() {
        assert_eq!(Value::from(" abc ").as_text(), " abc ");
        assert_eq!(Value::from(1234).as_text(), "1234");
        assert_eq!(Value::from(1.5).as_text(), "1.5");
        assert_eq!(Value::from(true).as_text(), "true");
        assert_eq!(Value::Null.as_text(), "");
    }

    #[test]
    fn deserializes_json_scalars() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, true, 42, "tekst"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Number(42.0),
                Value::Text("tekst".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_structured_json() {
        let err = Value::try_from(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue("array")));

        let err = Value::try_from(serde_json::json!({"a": 1})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue("object")));
    }
}
