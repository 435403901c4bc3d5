//! File filtering and discovery with glob pattern support.
//!
//! Discovery walks a directory tree, keeps the files whose name classifies
//! to a known [`Language`](super::language::Language), and then applies the
//! optional include/exclude glob patterns.

use std::path::Path;

use glob::Pattern;
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::error::FunclocError;
use crate::Result;

use super::language::{classify, SourceFile};

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include every classified file)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes every classified file).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Whether no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Check if a path passes the glob patterns.
    ///
    /// A path matches if it matches at least one include pattern (or there
    /// are none) and no exclude pattern. Language is not considered here.
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| FunclocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Discover source files under `root`.
///
/// Files come back in filesystem traversal order, not sorted. Symlinks are
/// not followed. A root that is a single file yields at most that file.
///
/// Failing to read the root itself is an error; unreadable entries further
/// down are logged and skipped.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<SourceFile>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(FunclocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(FunclocError::Walk {
                    path: root.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file) = classify(entry.path()) else {
            continue;
        };

        if filter.matches(&file.path) {
            files.push(file);
        } else {
            trace!("filtered out {}", file.path.display());
        }
    }

    Ok(files)
}
