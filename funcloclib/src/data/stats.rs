//! Core data structures for per-language statistics.
//!
//! Two accumulators are kept for a run:
//!
//! - [`LineCounts`]: non-blank lines per language, only ever added to
//! - [`FunctionLengths`]: estimated function lengths per language, append-only
//!
//! Both hold one slot per [`Language`] and serialize as a map keyed by the
//! language tag, in report order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

use crate::source::language::Language;

/// Non-blank line totals, one per language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    counts: [u64; Language::ALL.len()],
}

impl LineCounts {
    /// Create counts with every language at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines counted for `language`.
    pub fn get(&self, language: Language) -> u64 {
        self.counts[language.index()]
    }

    /// Add `lines` to the total of `language`.
    pub fn add(&mut self, language: Language, lines: u64) {
        self.counts[language.index()] += lines;
    }

    /// Sum over all languages.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(language, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, u64)> + '_ {
        Language::ALL.into_iter().map(|lang| (lang, self.get(lang)))
    }

    /// The largest single-language total.
    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

impl Serialize for LineCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Language::ALL.len()))?;
        for (lang, count) in self.iter() {
            map.serialize_entry(lang.tag(), &count)?;
        }
        map.end()
    }
}

/// Estimated function lengths, one list per language.
///
/// Lists are appended to in walk order, then in-file discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionLengths {
    lengths: [Vec<u64>; Language::ALL.len()],
}

impl FunctionLengths {
    /// Create empty lists for every language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lengths recorded for `language`.
    pub fn get(&self, language: Language) -> &[u64] {
        &self.lengths[language.index()]
    }

    /// Append lengths to the list of `language`.
    pub fn extend(&mut self, language: Language, lengths: impl IntoIterator<Item = u64>) {
        self.lengths[language.index()].extend(lengths);
    }

    /// Number of functions recorded for `language`.
    pub fn count(&self, language: Language) -> usize {
        self.get(language).len()
    }

    /// Sum of all lengths recorded for `language`.
    pub fn sum(&self, language: Language) -> u64 {
        self.get(language).iter().sum()
    }

    /// Reported average function length for `language`.
    ///
    /// This is `sum / (count + 1)`, one more than the number of functions in
    /// the denominator. It is zero when nothing was found and always below
    /// the arithmetic mean otherwise.
    pub fn average(&self, language: Language) -> f64 {
        self.sum(language) as f64 / (self.count(language) + 1) as f64
    }

    /// `(language, lengths)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &[u64])> + '_ {
        Language::ALL.into_iter().map(|lang| (lang, self.get(lang)))
    }
}

impl Serialize for FunctionLengths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Language::ALL.len()))?;
        for (lang, lengths) in self.iter() {
            map.serialize_entry(lang.tag(), lengths)?;
        }
        map.end()
    }
}

/// What one counted file contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path to the file.
    pub path: PathBuf,
    /// Language the file was classified as.
    pub language: Language,
    /// Non-blank lines in the file.
    pub lines: u64,
    /// Estimated function lengths, in discovery order.
    pub functions: Vec<u64>,
}

impl FileReport {
    /// A report for a file that contributed nothing.
    pub fn empty(path: PathBuf, language: Language) -> Self {
        Self {
            path,
            language,
            lines: 0,
            functions: Vec::new(),
        }
    }
}
