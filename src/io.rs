//! Input and output collaborators for the chained string table.
//!
//! The table never touches files directly while mutating: it pulls tokens from a
//! [`TokenSource`] and writes listings to any [`std::io::Write`].

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;

use crate::error::{Error, Result};

/// A source of whitespace-delimited tokens.
pub trait TokenSource {
    /// Returns the next token, or `Ok(None)` once the source is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Bytes that separate tokens: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Splits a buffered reader into tokens on ASCII whitespace, across line boundaries.
///
/// Input is read as raw bytes. Bytes that are not valid UTF-8 become U+FFFD in the token
/// instead of failing the read.
#[derive(Debug)]
pub struct WhitespaceTokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> WhitespaceTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Gives back the underlying reader. Tokens already buffered are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> TokenSource for WhitespaceTokens<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                self.line
                    .split(|&b| is_separator(b))
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }
}

/// Adapts any iterator of strings into a [`TokenSource`]. It never fails.
#[derive(Debug, Clone)]
pub struct IterTokens<I> {
    iter: I,
}

impl<I> IterTokens<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, S> TokenSource for IterTokens<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.iter.next().map(Into::into))
    }
}

/// Opens `path` for token reading.
pub fn open_tokens(path: impl AsRef<Path>) -> Result<WhitespaceTokens<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::source_unavailable(path, e))?;
    Ok(WhitespaceTokens::new(BufReader::new(file)))
}

/// Creates (or truncates) `path` for writing a listing.
pub fn create_output(path: impl AsRef<Path>) -> Result<BufWriter<File>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::destination_unavailable(path, e))?;
    Ok(BufWriter::new(file))
}
