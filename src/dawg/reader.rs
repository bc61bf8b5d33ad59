use std::io::BufRead;
use std::ops::Range;

use smallvec::SmallVec;

use super::error::DawgError;

/// Tokens shorter than this are skipped without comment.
const MIN_WORD_LEN: usize = 2;

/// Yields successive words from a whitespace-separated stream together with
/// the length of each word's common prefix with its predecessor.
///
/// Sort order is enforced: a token that is not strictly greater than the
/// previous one (equal, lexicographically smaller, or a strict prefix of it)
/// fails with [`DawgError::OutOfOrder`]. End of input is signalled by an
/// empty word with prefix length 0.
///
/// The stream is raw bytes, not UTF-8: every byte value is a valid
/// transition label, and only ASCII whitespace separates tokens.
pub(crate) struct WordReader<R> {
    input: R,
    line: Vec<u8>,
    pos: usize,
    current: SmallVec<[u8; 32]>,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(input: R) -> Self {
        WordReader {
            input,
            line: Vec::with_capacity(80),
            pos: 0,
            current: SmallVec::new(),
        }
    }

    /// Returns `(common_prefix_length, word)`; the word slice is empty at
    /// end of input.
    pub fn next_word(&mut self) -> Result<(usize, &[u8]), DawgError> {
        let range = loop {
            match self.scan_token() {
                Some(range) if range.len() >= MIN_WORD_LEN => break Some(range),
                Some(_) => continue,
                None => {
                    // One line at a time, reusing the buffer. The bytes
                    // are taken as they come; no decoding.
                    self.line.clear();
                    self.pos = 0;
                    if self.input.read_until(b'\n', &mut self.line)? == 0 {
                        break None;
                    }
                }
            }
        };

        let Some(range) = range else {
            self.current.clear();
            return Ok((0, &self.current));
        };

        let token = &self.line[range];
        let prefix_len = token
            .iter()
            .zip(self.current.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let descends = prefix_len < self.current.len()
            && prefix_len < token.len()
            && token[prefix_len] < self.current[prefix_len];
        if prefix_len == token.len() || descends {
            return Err(DawgError::OutOfOrder {
                previous: String::from_utf8_lossy(&self.current).into_owned(),
                word: String::from_utf8_lossy(token).into_owned(),
            });
        }

        self.current.clear();
        self.current.extend_from_slice(token);
        Ok((prefix_len, &self.current))
    }

    /// Advances past leading whitespace and returns the byte range of the
    /// next token on the current line, if any.
    fn scan_token(&mut self) -> Option<Range<usize>> {
        let bytes = self.line.as_slice();
        let mut pos = self.pos;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let start = pos;
        while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        self.pos = pos;
        (pos > start).then_some(start..pos)
    }
}
