//! Language classification by file name suffix.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The closed set of languages that get counted.
///
/// Variants are declared in classification priority order, which is also the
/// order used for every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "py")]
    Python,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "h")]
    Header,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "cpp")]
    Cpp,
    #[serde(rename = "cs")]
    CSharp,
}

/// Which heuristic estimates function lengths for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionRule {
    /// `def`/`class` lines open a new function; no brace tracking
    Python,
    /// Type/visibility keyword lines open a function; braces close it
    Brace,
}

impl Language {
    /// All languages in priority order: py, c, h, java, cpp, cs.
    pub const ALL: [Language; 6] = [
        Language::Python,
        Language::C,
        Language::Header,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
    ];

    /// Short tag used in reports.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::C => "c",
            Language::Header => "h",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
        }
    }

    /// File name suffix, including the dot.
    pub fn suffix(self) -> &'static str {
        match self {
            Language::Python => ".py",
            Language::C => ".c",
            Language::Header => ".h",
            Language::Java => ".java",
            Language::Cpp => ".cpp",
            Language::CSharp => ".cs",
        }
    }

    /// The function-length heuristic for this language, if any.
    ///
    /// Headers are counted but never scanned for functions.
    pub fn function_rule(self) -> Option<FunctionRule> {
        match self {
            Language::Python => Some(FunctionRule::Python),
            Language::C | Language::Java | Language::Cpp | Language::CSharp => {
                Some(FunctionRule::Brace)
            }
            Language::Header => None,
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Classify a file name by suffix.
    ///
    /// This is a case-sensitive "ends with" test, checked in priority order,
    /// so `a.cpp` is cpp, `a.CPP` and `a.txt` are not of interest.
    pub fn classify(file_name: &str) -> Option<Language> {
        Language::classify_bytes(file_name.as_bytes())
    }

    /// Classify a file name given as raw bytes.
    ///
    /// Names need not be UTF-8; only the ASCII suffix has to match.
    pub fn classify_bytes(file_name: &[u8]) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| file_name.ends_with(lang.suffix().as_bytes()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A file found during a walk together with its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub language: Language,
}

/// Classify a path by its file name.
///
/// Returns `None` for paths without a file name or with a name that matches
/// no known suffix. The name is compared as raw bytes, so it does not have to
/// be valid UTF-8.
pub fn classify(path: impl AsRef<Path>) -> Option<SourceFile> {
    let path = path.as_ref();
    let name = path.file_name()?.as_encoded_bytes();
    Language::classify_bytes(name).map(|language| SourceFile {
        path: path.to_path_buf(),
        language,
    })
}
