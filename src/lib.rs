//! # scrambler
//!
//! A Vigenère-style substitution cipher over the 36-symbol alphabet `0-9A-Z`.
//!
//! ## Algorithm
//!
//! - **Alphabet:** `'0'-'9'` map to `0..=9`, `'A'-'Z'` map to `10..=35`
//! - **Encrypt:** each plaintext symbol is shifted forward by the key symbol at
//!   the same position, modulo 36
//! - **Decrypt:** each ciphertext symbol is shifted back by the key symbol
//! - **Truncation:** only the first `min(key.len(), text.len())` symbols are
//!   processed; the rest of the longer operand is dropped
//!
//! ## Example
//!
//! ```rust
//! use scrambler::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let key = CipherText::from_string("A9Z0M5")?;
//! let plaintext = CipherText::from_string("Z0A9N4")?;
//!
//! let ciphertext = key.encrypt(&plaintext);
//! assert_eq!(key.decrypt(&ciphertext), plaintext);
//!
//! // Lower case is rejected; normalize first.
//! assert!(CipherText::from_string("abc123").is_err());
//! let normalized = CipherText::from_string(&"abc123".to_uppercase())?;
//! assert_eq!(normalized.to_string(), "ABC123");
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Considerations
//!
//! This cipher offers no cryptographic security. It falls to frequency and
//! key-length analysis like any other Vigenère cipher.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

mod errors;
mod types;
mod crypto;

pub use errors::ScramblerError;
pub use types::*;
pub use crypto::{is_valid, is_valid_symbol, ALPHABET, MODULUS};
