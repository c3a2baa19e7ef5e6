//! Error types for the validator.
//!
//! A value failing its rules is not an error: it is reported through
//! [`Outcome`](crate::Outcome). The variants here cover misuse of the API and
//! malformed configuration.

/// Result type alias for validator operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the validator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An outcome was queried before `validate` ran on this instance.
    #[error("Not validated")]
    NotValidated,

    /// A configured pattern string failed to compile.
    #[error("Invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation error from the regex engine
        #[source]
        source: regex::Error,
    },

    /// Input was not a scalar (JSON arrays and objects).
    #[error("Unsupported value: expected a scalar, got {0}")]
    UnsupportedValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_validated_display() {
        assert_eq!(Error::NotValidated.to_string(), "Not validated");
    }

    #[test]
    fn invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = Error::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };

        assert!(error.to_string().starts_with("Invalid regex pattern `(`"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn unsupported_value_display() {
        let error = Error::UnsupportedValue("array");
        assert_eq!(
            error.to_string(),
            "Unsupported value: expected a scalar, got array"
        );
    }
}
