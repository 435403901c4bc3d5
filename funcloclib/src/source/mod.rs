//! Source discovery: find and read the files to analyze.
//!
//! This module handles the first stage of the pipeline:
//!
//! - **Classification**: map file names to a [`Language`]
//! - **Discovery**: walk a directory and apply glob filters
//! - **Decoding**: detect a file's encoding and split it into lines
//!
//! ## Example
//!
//! ```rust,ignore
//! use funcloclib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("**/vendor/**")?;
//! for file in discover_files(".", &filter)? {
//!     println!("{}: {}", file.language, file.path.display());
//! }
//! ```

pub mod encoding;
pub mod filter;
pub mod language;

pub use encoding::{
    decode_lossy, detect_encoding, detect_encoding_from_bytes, read_source, split_lines,
};
pub use filter::{discover_files, FilterConfig};
pub use language::{classify, FunctionRule, Language, SourceFile};
