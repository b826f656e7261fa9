//! Error types for scrambler operations.

use thiserror::Error;

/// Errors that can occur while building a [`CipherText`](crate::CipherText).
///
/// Encryption and decryption never fail, so validation is the only error kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScramblerError {
    /// The text contains a character outside `0-9A-Z`. Carries the rejected input.
    #[error("invalid cipher text: {0:?}")]
    Validation(String),
}
