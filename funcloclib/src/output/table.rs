//! Table-ready data structures for per-language output.
//!
//! The data flow is:
//! 1. Raw data (`CountResult`)
//! 2. `LanguageTable` (one row per language, in report order)
//!
//! `LanguageTable` does no filtering or sorting; every language always gets
//! a row, even when nothing was counted for it.

use serde::Serialize;

use crate::data::counter::CountResult;
use crate::source::language::Language;

/// One language's figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRow {
    /// Language the row describes
    pub language: Language,
    /// Non-blank lines
    pub lines: u64,
    /// Number of estimated functions
    pub functions: usize,
    /// Reported average function length (`sum / (count + 1)`)
    pub average_function_length: f64,
}

/// Table-ready per-language data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageTable {
    /// One row per language in report order
    pub rows: Vec<LanguageRow>,
    /// Number of files counted
    pub file_count: usize,
    /// Lines across all languages
    pub total_lines: u64,
    /// Wall-clock seconds spent counting
    pub elapsed_secs: f64,
}

impl LanguageTable {
    /// Build a table from a counting result.
    pub fn from_count_result(result: &CountResult) -> Self {
        let rows = Language::ALL
            .into_iter()
            .map(|language| LanguageRow {
                language,
                lines: result.lines.get(language),
                functions: result.functions.count(language),
                average_function_length: result.functions.average(language),
            })
            .collect();

        LanguageTable {
            rows,
            file_count: result.file_count,
            total_lines: result.lines.total(),
            elapsed_secs: result.elapsed.as_secs_f64(),
        }
    }

    /// The row for `language`.
    pub fn row(&self, language: Language) -> &LanguageRow {
        &self.rows[language.index()]
    }
}
