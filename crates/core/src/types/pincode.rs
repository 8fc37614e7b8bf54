//! Indian postal index numbers.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Six digits; the leading digit is a postal zone and never zero.
static PIN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r"^[1-9][0-9]{5}$").unwrap()
});

/// Errors that can occur when parsing a [`Pincode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PincodeError {
    /// The input is empty after trimming.
    #[error("pincode cannot be empty")]
    Empty,
    /// The input is not a six digit PIN.
    #[error("pincode must be 6 digits and cannot start with 0")]
    Invalid,
}

/// A six digit PIN code, e.g. `560001`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    /// Parse a pincode, allowing one space between the third and fourth digit
    /// (`560 001`).
    ///
    /// # Errors
    ///
    /// Returns a [`PincodeError`] if the input is blank or malformed.
    pub fn parse(input: &str) -> Result<Self, PincodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PincodeError::Empty);
        }

        let compact = match trimmed.split_once(' ') {
            Some((zone, office)) if zone.len() == 3 => format!("{zone}{office}"),
            Some(_) => return Err(PincodeError::Invalid),
            None => trimmed.to_owned(),
        };

        if !PIN_FORMAT.is_match(&compact) {
            return Err(PincodeError::Invalid);
        }

        Ok(Self(compact))
    }

    /// The six digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
