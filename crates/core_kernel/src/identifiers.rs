//! Strongly-typed identifiers for domain entities
//!
//! Policy numbers are issued by upstream administration systems as opaque
//! strings. The newtype wrapper prevents accidental mixing with other
//! string-valued fields; matching is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A policy number, e.g. `POL123`
///
/// Equality is exact byte equality of the underlying string. No
/// normalization is applied: `pol123` and `POL123` are distinct numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyNumber(String);

impl PolicyNumber {
    /// Creates a policy number from the given string
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the policy number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PolicyNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

impl From<String> for PolicyNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl AsRef<str> for PolicyNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
