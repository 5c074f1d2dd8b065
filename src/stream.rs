//! Byte-at-a-time transliteration of streams.
//!
//! Input is never buffered whole: [`Transliterate`] pulls one byte from its
//! source per output byte, and the pipes only hold their reader and writer
//! buffers.

use std::io::{self, BufReader, BufWriter, Read, Write};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::error::CipherError;
use crate::traits::Substitution;

/// Lazy iterator adaptor mapping each byte of `bytes` through `table`.
pub struct Transliterate<I, S> {
    bytes: I,
    table: S,
}

impl<I, S> Transliterate<I, S>
where
    I: Iterator<Item = io::Result<u8>>,
    S: Substitution,
{
    pub fn new(bytes: I, table: S) -> Self {
        Transliterate { bytes, table }
    }
}

impl<I, S> Iterator for Transliterate<I, S>
where
    I: Iterator<Item = io::Result<u8>>,
    S: Substitution,
{
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.bytes.next()?;
        Some(byte.map(|b| self.table.transliterate(b)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

pub fn transliterate<R: Read, S: Substitution>(
    reader: R,
    table: S,
) -> Transliterate<io::Bytes<R>, S> {
    Transliterate::new(reader.bytes(), table)
}

/// Copies `reader` to `writer` through `table`, returning the byte count.
pub fn pipe<R, W, S>(reader: R, writer: W, table: S) -> Result<u64, CipherError>
where
    R: Read,
    W: Write,
    S: Substitution,
{
    let mut writer = BufWriter::new(writer);
    let mut count = 0;

    for byte in transliterate(BufReader::new(reader), table) {
        writer.write_all(&[byte?])?;
        count += 1;
    }

    writer.flush()?;
    info!(bytes = count, "transliteration finished");
    Ok(count)
}

pub async fn pipe_async<R, W, S>(reader: R, writer: W, table: S) -> Result<u64, CipherError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Substitution,
{
    let mut reader = tokio::io::BufReader::new(reader);
    let mut writer = tokio::io::BufWriter::new(writer);
    let mut count = 0;

    loop {
        let byte = match reader.read_u8().await {
            Ok(byte) => byte,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };

        writer.write_u8(table.transliterate(byte)).await?;
        count += 1;
    }

    writer.flush().await?;
    info!(bytes = count, "transliteration finished");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::table::CipherTable;

    #[test]
    fn iterator_is_lazy() {
        let table = CipherTable::build("KEY").unwrap();
        let source = (0..).map(|i| Ok(b'A' + (i % 26) as u8));
        let out: Vec<u8> = Transliterate::new(source, &table)
            .take(3)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(out, b"WXK");
    }

    #[test]
    fn read_errors_surface() {
        let table = CipherTable::build("KEY").unwrap();
        let source = vec![Ok(b'a'), Err(io::Error::other("boom"))].into_iter();
        let mut iter = Transliterate::new(source, &table);
        assert_eq!(iter.next().unwrap().unwrap(), b'W');
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn pipe_counts_bytes() {
        let table = CipherTable::build("KEY").unwrap();
        let mut out = Vec::new();
        let count = pipe(&b"abc\n"[..], &mut out, &table).unwrap();
        assert_eq!(count, 4);
        assert_eq!(out, b"WXK\n");
    }

    #[test]
    fn pipe_empty_input() {
        let table = CipherTable::build("KEY").unwrap();
        let mut out = Vec::new();
        assert_eq!(pipe(io::empty(), &mut out, &table).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn async_pipe_matches_sync() {
        let table = CipherTable::build("i came, i saw").unwrap();
        let input = b"Veni, vidi, vici.\n".to_vec();

        let mut expected = Vec::new();
        pipe(&input[..], &mut expected, &table).unwrap();

        let mut actual = Vec::new();
        let count = pipe_async(&input[..], &mut actual, &table).await.unwrap();
        assert_eq!(count, input.len() as u64);
        assert_eq!(actual, expected);
    }
}
