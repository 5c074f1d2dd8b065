//! Key normalization.
//!
//! A raw pass-phrase is reduced to its ASCII letters, upper-cased, in their
//! original order. Repeated letters are kept here; the table builder ignores
//! every occurrence after the first.

use std::fmt;

use crate::constants::ALPHABET_SIZE;
use crate::error::CipherError;

/// Uppercase letters of a raw key, plus the raw key's length in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalKey {
    raw_len: usize,
    letters: Vec<u8>,
}

impl CanonicalKey {
    /// Normalizes `raw`, rejecting keys with no letters at all.
    pub fn parse(raw: &str) -> Result<Self, CipherError> {
        let letters = normalize(raw);
        if letters.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        Ok(CanonicalKey {
            raw_len: raw.len(),
            letters,
        })
    }

    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Slot that receives the first key letter.
    ///
    /// Derived from the length of the key as typed, punctuation and spaces
    /// included, so `"i came, i saw"` starts at slot 12 rather than 8.
    pub fn offset(&self) -> usize {
        (self.raw_len - 1) % ALPHABET_SIZE
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Keeps the ASCII letters of `raw`, upper-cased. Never longer than `raw`.
pub fn normalize(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect()
}
