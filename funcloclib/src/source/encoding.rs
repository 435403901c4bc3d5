//! Best-effort text decoding for source files.
//!
//! Source trees collected over the years are rarely all UTF-8. Each file's
//! bytes go through a statistical detector (`chardetng`) and are decoded with
//! `encoding_rs`. Malformed sequences are dropped rather than reported, so a
//! file always decodes to *something*.

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::warn;

use crate::error::FunclocError;
use crate::Result;

/// Guess the encoding of in-memory bytes.
///
/// A byte order mark wins over statistical inference.
pub fn detect_encoding_from_bytes(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Guess the encoding of the file at `path`.
///
/// Never fails: if the file cannot be read the problem is logged and UTF-8
/// is assumed.
pub fn detect_encoding(path: impl AsRef<Path>) -> &'static Encoding {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => detect_encoding_from_bytes(&bytes),
        Err(e) => {
            warn!("could not detect encoding of {}: {}", path.display(), e);
            UTF_8
        }
    }
}

/// Decode `bytes`, dropping anything that is not valid in `encoding`.
pub fn decode_lossy(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        text.chars().filter(|&c| c != char::REPLACEMENT_CHARACTER).collect()
    } else {
        text.into_owned()
    }
}

/// Read a file and decode it with its detected encoding.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FunclocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let encoding = detect_encoding_from_bytes(&bytes);
    Ok(decode_lossy(&bytes, encoding))
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// Line terminators are not included. A trailing terminator does not start
/// an extra empty line.
pub fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, tail) = match rest.find(['\n', '\r']) {
            Some(pos) => {
                let newline = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..pos], &rest[pos + newline..])
            }
            None => (rest, ""),
        };
        rest = tail;
        Some(line)
    })
}
