use crate::types::CipherText;

/// Size of the symbol alphabet, and the modulus of the shift.
pub const MODULUS: u8 = 36;

/// Every symbol, indexed by its integer value.
pub const ALPHABET: &[u8; MODULUS as usize] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/* ---------------- Validation ---------------- */

/// Whether `c` is allowed in a [`CipherText`]: `'0'-'9'` or `'A'-'Z'`.
///
/// Case-sensitive, and only ASCII digits count (`'٣'` is rejected).
pub fn is_valid_symbol(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Whether every character of `text` is allowed in a [`CipherText`].
pub fn is_valid(text: &str) -> bool {
    text.chars().all(is_valid_symbol)
}

/* ---------------- Symbol <-> Z/36 ---------------- */

/// Interpret a valid symbol as an integer in `0..36`.
///
/// Panics on a symbol outside the alphabet; `CipherText` never holds one.
fn symbol_to_int(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => 10 + (c - b'A'),
        _ => unreachable!("symbol {:?} outside the cipher alphabet", c as char),
    }
}

/// Inverse of [`symbol_to_int`]. Panics if `i >= 36`.
fn int_to_symbol(i: u8) -> u8 {
    ALPHABET[usize::from(i)]
}

/// True modulo 36: negative inputs land in `0..36` too.
fn mod36(i: i16) -> u8 {
    // rem_euclid of a positive modulus is in 0..36
    i.rem_euclid(i16::from(MODULUS)) as u8
}

/// Combine `key` and `text` symbol by symbol with `op`, up to the shorter length.
fn shift(key: &CipherText, text: &CipherText, op: impl Fn(i16, i16) -> i16) -> CipherText {
    let out: String = key
        .as_bytes()
        .iter()
        .zip(text.as_bytes())
        .map(|(&k, &t)| {
            let v = op(i16::from(symbol_to_int(t)), i16::from(symbol_to_int(k)));
            char::from(int_to_symbol(mod36(v)))
        })
        .collect();
    CipherText::from_validated(out)
}

/* ---------------- Encrypt / Decrypt ---------------- */

impl CipherText {
    /// Encrypt `plaintext` using `self` as the key.
    ///
    /// Each symbol of the plaintext is shifted forward by the key symbol at the
    /// same position, modulo 36. Only positions covered by both operands are
    /// processed: the result has `min(self.len(), plaintext.len())` symbols and
    /// any plaintext beyond the key's length is dropped.
    ///
    /// ```
    /// use scrambler::CipherText;
    ///
    /// let key = CipherText::from_string("1")?;
    /// let pt = CipherText::from_string("Z")?;
    /// assert_eq!(key.encrypt(&pt).as_str(), "0");
    /// # Ok::<(), scrambler::ScramblerError>(())
    /// ```
    pub fn encrypt(&self, plaintext: &CipherText) -> CipherText {
        tracing::trace!(key_len = self.len(), text_len = plaintext.len(), "encrypt");
        shift(self, plaintext, |t, k| t + k)
    }

    /// Decrypt `ciphertext` using `self` as the key.
    ///
    /// Inverse of [`encrypt`](Self::encrypt) under the same truncation rule, so
    /// `key.decrypt(&key.encrypt(&p)) == p` only when `p.len() <= key.len()`.
    pub fn decrypt(&self, ciphertext: &CipherText) -> CipherText {
        tracing::trace!(key_len = self.len(), text_len = ciphertext.len(), "decrypt");
        shift(self, ciphertext, |t, k| t - k)
    }
}
