//! Keyed cipher tables.
//!
//! The encode table is filled in two passes over a running slot index that
//! starts at [`CanonicalKey::offset`]:
//!
//! ```text
//! key pass   first occurrence of each key letter, in key order
//! fill pass  remaining letters, scanning cyclically from the letter after
//!            the last one placed
//! ```
//!
//! Every placement takes the next slot, so the 26 placements cover all 26
//! slots exactly once and the table is a permutation.

use std::fmt;

use tracing::{debug, trace};

use crate::algos::key::CanonicalKey;
use crate::constants::{ALPHABET_SIZE, FIRST_LETTER};
use crate::error::CipherError;
use crate::traits::{lookup, map_text, Decryptor, Encryptor, Substitution};
use crate::utils::{letter_at, letter_index, next_letter, next_slot};

/// Plaintext letter to cipher letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherTable {
    encode: [u8; ALPHABET_SIZE],
}

/// Cipher letter to plaintext letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeTable {
    decode: [u8; ALPHABET_SIZE],
}

struct Placement {
    encode: [u8; ALPHABET_SIZE],
    used: [bool; ALPHABET_SIZE],
    index: usize,
}

impl Placement {
    fn new(offset: usize) -> Self {
        Placement {
            encode: [0; ALPHABET_SIZE],
            used: [false; ALPHABET_SIZE],
            index: offset % ALPHABET_SIZE,
        }
    }

    /// Writes `letter` into the current slot unless it already owns one.
    /// Only a successful placement moves to the next slot.
    fn place(&mut self, letter: u8) -> bool {
        let cipher = letter_index(letter);
        if self.used[cipher] {
            return false;
        }

        trace!(slot = self.index, letter = %(letter as char), "placed");
        self.encode[self.index] = letter;
        self.used[cipher] = true;
        self.index = next_slot(self.index);
        true
    }
}

impl CipherTable {
    pub fn build(key: &str) -> Result<Self, CipherError> {
        let key = CanonicalKey::parse(key)?;
        Ok(Self::from_key(&key))
    }

    pub fn from_key(key: &CanonicalKey) -> Self {
        let mut placement = Placement::new(key.offset());
        debug!(key = %key, offset = key.offset(), "placing key letters");

        let mut last = None;
        for &letter in key.letters() {
            if placement.place(letter) {
                last = Some(letter);
            }
        }

        // A canonical key always places its first letter.
        let mut letter = next_letter(last.unwrap_or(FIRST_LETTER));
        debug!(from = %(letter as char), "filling remaining letters");
        for _ in 0..ALPHABET_SIZE {
            placement.place(letter);
            letter = next_letter(letter);
        }

        debug_assert!(placement.used.iter().all(|&used| used));
        let table = CipherTable {
            encode: placement.encode,
        };
        debug!(table = %table, "cipher table built");
        table
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_SIZE] {
        &self.encode
    }

    pub fn inverse(&self) -> DecodeTable {
        let mut decode = [0; ALPHABET_SIZE];
        for (plain, &cipher) in self.encode.iter().enumerate() {
            decode[letter_index(cipher)] = letter_at(plain);
        }
        DecodeTable { decode }
    }

    /// Operator-facing summary, e.g. `key: HJKL... - 26`.
    pub fn diagnostic(&self) -> String {
        format!("key: {} - {}", self, self.encode.len())
    }
}

impl DecodeTable {
    pub fn as_bytes(&self) -> &[u8; ALPHABET_SIZE] {
        &self.decode
    }
}

impl Substitution for CipherTable {
    fn substitute(&self, letter: u8) -> u8 {
        lookup(&self.encode, letter)
    }
}

impl Substitution for DecodeTable {
    fn substitute(&self, letter: u8) -> u8 {
        lookup(&self.decode, letter)
    }
}

impl Encryptor for CipherTable {
    fn encrypt(&self, message: &str) -> String {
        map_text(self, message)
    }
}

impl Decryptor for CipherTable {
    fn decrypt(&self, message: &str) -> String {
        map_text(&self.inverse(), message)
    }
}

impl fmt::Display for CipherTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_letters(f, &self.encode)
    }
}

impl fmt::Display for DecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_letters(f, &self.decode)
    }
}

fn write_letters(f: &mut fmt::Formatter<'_>, letters: &[u8]) -> fmt::Result {
    for &letter in letters {
        write!(f, "{}", letter as char)?;
    }
    Ok(())
}
