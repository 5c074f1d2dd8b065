use crate::constants::{ALPHABET_SIZE, FIRST_LETTER};

/// Offset of an uppercase ASCII letter from `'A'`.
pub fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase(), "not an uppercase letter: {letter}");
    (letter - FIRST_LETTER) as usize
}

/// Letter at `index`, wrapping past `'Z'`.
pub fn letter_at(index: usize) -> u8 {
    FIRST_LETTER + (index % ALPHABET_SIZE) as u8
}

pub fn next_letter(letter: u8) -> u8 {
    letter_at(letter_index(letter) + 1)
}

pub fn next_slot(index: usize) -> usize {
    (index + 1) % ALPHABET_SIZE
}
