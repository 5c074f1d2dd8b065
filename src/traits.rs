use crate::constants::ALPHABET_SIZE;
use crate::utils::letter_index;

/// A fixed mapping over the 26 uppercase letters.
pub trait Substitution: Send + Sync {
    /// Looks up the substitute for an uppercase ASCII letter. Any other
    /// byte is returned unchanged.
    fn substitute(&self, letter: u8) -> u8;

    /// Maps one input byte. Letters are upper-cased before lookup; anything
    /// else comes back unchanged.
    fn transliterate(&self, byte: u8) -> u8 {
        if byte.is_ascii_alphabetic() {
            self.substitute(byte.to_ascii_uppercase())
        } else {
            byte
        }
    }
}

impl<T: Substitution + ?Sized> Substitution for &T {
    fn substitute(&self, letter: u8) -> u8 {
        (**self).substitute(letter)
    }
}

pub trait Encryptor: Send + Sync {
    fn encrypt(&self, message: &str) -> String;
}

pub trait Decryptor: Send + Sync {
    fn decrypt(&self, message: &str) -> String;
}

pub(crate) fn lookup(table: &[u8; ALPHABET_SIZE], letter: u8) -> u8 {
    if !letter.is_ascii_uppercase() {
        return letter;
    }
    table[letter_index(letter)]
}

/// Applies `table` to every ASCII character of `text`; other characters are
/// kept, which keeps the output valid UTF-8.
pub(crate) fn map_text<S: Substitution + ?Sized>(table: &S, text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                table.transliterate(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}
