pub const ALPHABET_SIZE: usize = 26;
pub const FIRST_LETTER: u8 = b'A';
