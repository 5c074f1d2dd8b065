//! Errors produced while building tables or moving bytes through them.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The key contained no ASCII letters after normalization.
    #[error("key must contain at least one letter")]
    EmptyKey,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
