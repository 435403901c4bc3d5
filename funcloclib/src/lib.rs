//! # funcloclib
//!
//! A lines-of-code counter library for a small, fixed set of languages that
//! also estimates how long functions are, without parsing anything.
//!
//! ## Overview
//!
//! Files are classified by name suffix into one of six languages:
//!
//! - **py**: Python (`.py`)
//! - **c**: C (`.c`)
//! - **h**: C/C++ headers (`.h`)
//! - **java**: Java (`.java`)
//! - **cpp**: C++ (`.cpp`)
//! - **cs**: C# (`.cs`)
//!
//! For every file the non-blank lines are counted, and a line-pattern
//! heuristic estimates the length of each function: `def`/`class` lines for
//! Python, type/visibility keywords plus brace balancing for the C family.
//! Headers are counted but not scanned for functions.
//!
//! ## Pipeline
//!
//! 1. [`source`]: walk a directory, classify files, detect encodings
//! 2. [`data`]: count lines, estimate function lengths, aggregate
//! 3. [`output`]: shape the aggregate into a per-language table
//!
//! ## Example
//!
//! ```rust
//! use funcloclib::{count_directory, CountOptions, FilterConfig, Language};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.c"), "int main(void)\n{\n    return 0;\n}\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# not counted\n").unwrap();
//!
//! let result = count_directory(dir.path(), &CountOptions::new()).unwrap();
//! assert_eq!(result.lines.get(Language::C), 4);
//! assert_eq!(result.functions.get(Language::C), &[4]);
//!
//! // Count with filtering
//! let filter = FilterConfig::new().exclude("**/vendor/**").unwrap();
//! let result = count_directory(dir.path(), &CountOptions::new().filter(filter)).unwrap();
//! assert_eq!(result.file_count, 1);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    count_directory, count_directory_with, count_file, count_lines, estimate_function_lengths,
    CountOptions, CountResult, FileReport, FunctionLengths, LineCounts,
};
pub use error::FunclocError;
pub use output::{LanguageRow, LanguageTable};
pub use source::{classify, detect_encoding, FilterConfig, FunctionRule, Language, SourceFile};

/// Result type for funcloclib operations
pub type Result<T> = std::result::Result<T, FunclocError>;
