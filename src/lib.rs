//! Keyed substitution cipher.
//!
//! A pass-phrase is reduced to its letters and spread over a 26-slot table,
//! the rest of the alphabet filling the gaps, giving a permutation of
//! `A..=Z`. Text is then transliterated one byte at a time through that
//! table; non-letters pass through untouched.
//!
//! ```
//! use keyed_cipher::{CipherTable, Decryptor, Encryptor};
//!
//! let table = CipherTable::build("i came, i saw").unwrap();
//! assert_eq!(table.to_string(), "HJKLNOPQRTUVICAMESWXYZBDFG");
//!
//! let secret = table.encrypt("Attack at dawn!");
//! assert_eq!(table.decrypt(&secret), "ATTACK AT DAWN!");
//! ```

pub mod algos;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod stream;
pub mod traits;
pub mod utils;

pub use algos::key::CanonicalKey;
pub use algos::table::{CipherTable, DecodeTable};
pub use error::CipherError;
pub use traits::{Decryptor, Encryptor, Substitution};
