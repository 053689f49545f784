//! Byte pattern search.
//!
//! A single greedy left-to-right scan produces non-overlapping inclusive
//! match ranges, sorted by construction. Results are recomputed from scratch
//! whenever the search term changes.

use crate::buffer::BufferError;
use crate::codec::{parse_byte, CodecError, NumberBase};

/// Inclusive byte range `[first, last]` of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub first: usize,
    pub last: usize,
}

impl SearchResult {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.first && index <= self.last
    }
}

/// How a search term is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// Whitespace-separated numbers in the active base
    Bytes,
    /// Literal characters, one byte each
    Ascii,
}

/// Why a search term could not be turned into a byte pattern.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Convert a typed search term into the byte pattern to look for.
pub fn pattern_from_term(term: &str, kind: TermKind, base: NumberBase) -> Result<Vec<u8>, TermError> {
    match kind {
        TermKind::Bytes => term
            .split_whitespace()
            .map(|token| parse_byte(token, base).map_err(TermError::from))
            .collect(),
        TermKind::Ascii => term
            .chars()
            .map(|c| {
                let code = c as u32;
                u8::try_from(code).map_err(|_| BufferError::OutOfRange(code).into())
            })
            .collect(),
    }
}

/// Holds the current match set.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    results: Vec<SearchResult>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Scan `haystack` for `pattern`. An empty pattern clears the results.
    pub fn search(&mut self, haystack: &[u8], pattern: &[u8]) -> &[SearchResult] {
        self.results.clear();
        if pattern.is_empty() {
            return &self.results;
        }

        // Leftmost-first: a match is closed as soon as it is complete and
        // scanning resumes right after it.
        let mut start = 0usize;
        while start + pattern.len() <= haystack.len() {
            if haystack[start..].starts_with(pattern) {
                self.results.push(SearchResult {
                    first: start,
                    last: start + pattern.len() - 1,
                });
                start += pattern.len();
            } else {
                start += 1;
            }
        }

        tracing::debug!(
            pattern_len = pattern.len(),
            matches = self.results.len(),
            "search"
        );
        &self.results
    }

    /// The next match after `from` (or before it when `reverse`).
    ///
    /// Forward picks the first result ending past `from`; reverse picks the
    /// last result starting before `from`.
    pub fn next_result(&self, from: usize, reverse: bool) -> Option<SearchResult> {
        if reverse {
            self.results.iter().rev().find(|r| r.first < from).copied()
        } else {
            self.results.iter().find(|r| r.last > from).copied()
        }
    }

    /// The match covering `index`, if any.
    pub fn containing(&self, index: usize) -> Option<SearchResult> {
        // Sorted and disjoint, so binary search on `last` is exact
        let pos = self.results.partition_point(|r| r.last < index);
        self.results.get(pos).filter(|r| r.contains(index)).copied()
    }
}
