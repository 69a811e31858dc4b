use thiserror::Error;

/// Error returned when parsing an enumerated solver option from a string.
///
/// Unknown names are always rejected; no option silently falls back to a
/// default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {option} `{value}`, expected one of: {expected}")]
pub struct ParseOptionError {
    option: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseOptionError {
    pub(crate) fn new(option: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            option,
            value: value.to_owned(),
            expected,
        }
    }

    /// Returns the kind of option that failed to parse.
    #[must_use]
    pub fn option(&self) -> &'static str {
        self.option
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
