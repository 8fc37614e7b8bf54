//! Indian mobile phone numbers.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ten digits, first digit 6-9 (TRAI mobile numbering).
static MOBILE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r"^[6-9][0-9]{9}$").unwrap()
});

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input is empty after trimming.
    #[error("phone number cannot be empty")]
    Empty,
    /// The digits do not form a ten digit mobile number.
    #[error("phone number must be a 10 digit mobile number starting with 6-9")]
    Invalid,
}

/// A ten digit Indian mobile number, stored without country code.
///
/// Spaces and hyphens are ignored, and an optional `+91` prefix is accepted.
///
/// ```
/// use shutterhive_core::Phone;
///
/// let phone = Phone::parse("+91 98765-43210").unwrap();
/// assert_eq!(phone.as_str(), "9876543210");
/// assert!(Phone::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number from user input.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::Empty`] for blank input and
    /// [`PhoneError::Invalid`] when the digits are not a mobile number.
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits = compact.strip_prefix("+91").unwrap_or(&compact);
        if !MOBILE_NUMBER.is_match(digits) {
            return Err(PhoneError::Invalid);
        }

        Ok(Self(digits.to_owned()))
    }

    /// The ten digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Formats as `+91 98765 43210`.
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.0.split_at(self.0.len().min(5));
        write!(f, "+91 {head} {tail}")
    }
}
