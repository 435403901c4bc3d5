//! High-level counting API.
//!
//! This module provides the main entry points: counting a single file, and
//! walking a directory to aggregate line counts and function lengths per
//! language.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::source::encoding::{read_source, split_lines};
use crate::source::filter::{discover_files, FilterConfig};
use crate::source::language::SourceFile;
use crate::Result;

use super::estimator::estimate_function_lengths;
use super::stats::{FileReport, FunctionLengths, LineCounts};

/// Options for counting.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Whether to estimate function lengths
    pub functions: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            file_filter: FilterConfig::new(),
            functions: true,
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Enable or disable function-length estimation.
    pub fn functions(mut self, enabled: bool) -> Self {
        self.functions = enabled;
        self
    }
}

/// Result of counting a directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountResult {
    /// Number of files counted
    pub file_count: usize,
    /// Non-blank lines per language
    pub lines: LineCounts,
    /// Estimated function lengths per language
    pub functions: FunctionLengths,
    /// Wall-clock time spent walking and counting
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's contribution into the totals.
    pub fn add_file(&mut self, report: &FileReport) {
        self.file_count += 1;
        self.lines.add(report.language, report.lines);
        self.functions
            .extend(report.language, report.functions.iter().copied());
    }
}

/// Count the non-blank lines of already decoded text.
pub fn count_non_blank(text: &str) -> u64 {
    split_lines(text)
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}

/// Count the non-blank lines of the file at `path`.
///
/// Never fails: an unreadable file is logged and counts as 0.
pub fn count_lines(path: impl AsRef<Path>) -> u64 {
    let path = path.as_ref();
    match read_source(path) {
        Ok(text) => count_non_blank(&text),
        Err(e) => {
            warn!("could not count {}: {}", path.display(), e);
            0
        }
    }
}

/// Count one classified file.
///
/// The file is read and decoded once; the line counter and the estimator
/// share the decoded text. An unreadable file is logged and reported as
/// empty.
pub fn count_file(file: &SourceFile, functions: bool) -> FileReport {
    let text = match read_source(&file.path) {
        Ok(text) => text,
        Err(e) => {
            warn!("could not count {}: {}", file.path.display(), e);
            return FileReport::empty(file.path.clone(), file.language);
        }
    };

    let lines = count_non_blank(&text);
    let functions = if functions {
        estimate_function_lengths(file.language, &text)
    } else {
        Vec::new()
    };

    debug!(
        "{} [{}]: {} lines, {} functions",
        file.path.display(),
        file.language,
        lines,
        functions.len()
    );

    FileReport {
        path: file.path.clone(),
        language: file.language,
        lines,
        functions,
    }
}

/// Count every interesting file under `root`.
///
/// # Example
///
/// ```rust
/// use funcloclib::{count_directory, CountOptions, Language};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(
///     dir.path().join("m.py"),
///     "def f():\n    x = 1\n    return x\n",
/// )
/// .unwrap();
///
/// let result = count_directory(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(result.lines.get(Language::Python), 3);
/// assert_eq!(result.functions.get(Language::Python), &[3]);
/// assert_eq!(result.functions.average(Language::Python), 1.5);
/// ```
pub fn count_directory(root: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    count_directory_with(root, options, |_, _| {})
}

/// Count every interesting file under `root`, calling `observer` after each
/// file with that file's report and the running line totals.
///
/// Only a missing or unreadable root is an error; per-file problems are
/// logged and the file counts as empty.
pub fn count_directory_with<F>(
    root: impl AsRef<Path>,
    options: &CountOptions,
    mut observer: F,
) -> Result<CountResult>
where
    F: FnMut(&FileReport, &LineCounts),
{
    let root = root.as_ref();
    let start = Instant::now();

    info!("counting {}", root.display());
    let files = discover_files(root, &options.file_filter)?;

    let mut result = CountResult::new();
    for file in &files {
        let report = count_file(file, options.functions);
        result.add_file(&report);
        observer(&report, &result.lines);
    }

    result.elapsed = start.elapsed();
    info!(
        "counted {} files in {:.2}s",
        result.file_count,
        result.elapsed.as_secs_f64()
    );

    Ok(result)
}
