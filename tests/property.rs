#![allow(clippy::unwrap_used)] // unwrap() is idiomatic in property tests

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use scrambler::*;

fn hash_of(v: &CipherText) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

// ============================================================================
// Property: Construction accepts exactly the alphabet
// ============================================================================

proptest! {
    #[test]
    fn prop_valid_text_renders_verbatim(text in "[0-9A-Z]{0,64}") {
        let cs = CipherText::from_string(&text)?;
        prop_assert_eq!(cs.to_string(), text.clone());
        prop_assert_eq!(cs.len(), text.len());
    }
}

proptest! {
    #[test]
    fn prop_is_valid_matches_from_string(text in ".{0,32}") {
        prop_assert_eq!(is_valid(&text), CipherText::from_string(&text).is_ok());
    }
}

proptest! {
    #[test]
    fn prop_lowercase_letter_rejected(
        prefix in "[0-9A-Z]{0,10}",
        bad in "[a-z]",
        suffix in "[0-9A-Z]{0,10}",
    ) {
        let text = format!("{prefix}{bad}{suffix}");
        prop_assert!(CipherText::from_string(&text).is_err());
    }
}

// ============================================================================
// Property: Round-trip when the key covers the plaintext
// ============================================================================

proptest! {
    #[test]
    fn prop_encrypt_decrypt_roundtrip(
        key in "[0-9A-Z]{1,64}",
        extra in 0usize..64,
    ) {
        let key = CipherText::from_string(&key)?;
        let len = key.len().saturating_sub(extra);
        let pt = CipherText::from_string(&"Q".repeat(len))?;

        prop_assert_eq!(key.decrypt(&key.encrypt(&pt)), pt);
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_arbitrary_pairs(
        key in "[0-9A-Z]{0,40}",
        pt in "[0-9A-Z]{0,40}",
    ) {
        let key = CipherText::from_string(&key)?;
        let pt = CipherText::from_string(&pt)?;
        let n = key.len().min(pt.len());

        let back = key.decrypt(&key.encrypt(&pt));
        prop_assert_eq!(back.as_str(), &pt.as_str()[..n]);
    }
}

// ============================================================================
// Property: Output length is the shorter operand
// ============================================================================

proptest! {
    #[test]
    fn prop_encrypt_truncates_to_key(
        key in "[0-9A-Z]{0,20}",
        pt in "[0-9A-Z]{21,60}",
    ) {
        let key = CipherText::from_string(&key)?;
        let pt = CipherText::from_string(&pt)?;
        prop_assert!(pt.len() > key.len());
        prop_assert_eq!(key.encrypt(&pt).len(), key.len());
        prop_assert_eq!(key.decrypt(&pt).len(), key.len());
    }
}

// ============================================================================
// Property: Equality and hashing agree
// ============================================================================

proptest! {
    #[test]
    fn prop_equal_values_equal_hashes(text in "[0-9A-Z]{0,32}") {
        let a = CipherText::from_string(&text)?;
        let b = CipherText::from_string(&text.to_lowercase().to_uppercase())?;
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
}

proptest! {
    #[test]
    fn prop_zero_key_is_identity(pt in "[0-9A-Z]{0,32}") {
        let pt = CipherText::from_string(&pt)?;
        let key = CipherText::from_string(&"0".repeat(pt.len()))?;
        prop_assert_eq!(key.encrypt(&pt), pt.clone());
        prop_assert_eq!(key.decrypt(&pt), pt);
    }
}
