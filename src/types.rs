//! The validated cipher text value type and its conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::crypto::{is_valid, is_valid_symbol};
use crate::errors::ScramblerError;

/// An immutable string of symbols drawn from the upper case letters `'A'-'Z'`
/// and the digits `'0'-'9'`.
///
/// The same type plays three roles: key, plaintext and ciphertext. Every value
/// is validated once when it is built and never changes afterwards.
///
/// Serializes as a plain string. Deserializing runs the same validation as
/// [`CipherText::from_string`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CipherText {
    // Only ASCII alphabet symbols, so byte and char indices coincide.
    validated: String,
}

impl CipherText {
    /// Build a `CipherText` from `text`, if every character is in `0-9A-Z`.
    ///
    /// The check is case-sensitive; callers wanting case-insensitive input
    /// must upper-case it first. The empty string is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ScramblerError::Validation`] carrying `text` if any character
    /// is outside the alphabet.
    pub fn from_string(text: &str) -> Result<Self, ScramblerError> {
        Self::try_from(text.to_string())
    }

    /// Wrap text that is already known to be valid.
    pub(crate) fn from_validated(validated: String) -> Self {
        debug_assert!(is_valid(&validated));
        Self { validated }
    }

    /// The symbols as a string slice.
    pub fn as_str(&self) -> &str {
        &self.validated
    }

    /// The symbols as ASCII bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.validated.as_bytes()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.validated.len()
    }

    /// Whether there are no symbols.
    pub fn is_empty(&self) -> bool {
        self.validated.is_empty()
    }
}

impl TryFrom<String> for CipherText {
    type Error = ScramblerError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        if let Some(pos) = text.chars().position(|c| !is_valid_symbol(c)) {
            tracing::debug!(pos, len = text.chars().count(), "rejected cipher text");
            return Err(ScramblerError::Validation(text));
        }
        Ok(Self { validated: text })
    }
}

impl TryFrom<&str> for CipherText {
    type Error = ScramblerError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_string(text)
    }
}

impl FromStr for CipherText {
    type Err = ScramblerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<CipherText> for String {
    fn from(ct: CipherText) -> Self {
        ct.validated
    }
}

impl AsRef<str> for CipherText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.validated)
    }
}
