//! Text and JSON rendering of a [`LanguageTable`].

use std::fmt::Write;
use std::path::Path;

use funcloclib::LanguageTable;

/// Batch report: line totals, then average function lengths.
///
/// ```text
/// code : py: 3
/// ...
/// function : py: 1.5
/// ```
pub fn render_functions(table: &LanguageTable) -> String {
    let mut out = String::new();
    for row in &table.rows {
        let _ = writeln!(out, "code : {}: {}", row.language, row.lines);
    }
    for row in &table.rows {
        let _ = writeln!(
            out,
            "function : {}: {:?}",
            row.language, row.average_function_length
        );
    }
    out
}

/// Summary printed after a count or plot run.
pub fn render_summary(table: &LanguageTable, root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Elapsed {:.2} seconds", table.elapsed_secs);
    let _ = writeln!(out, "Lines of code found in {}:", root.display());
    for row in &table.rows {
        let _ = writeln!(out, "{}: {}", row.language, row.lines);
    }
    out
}

/// Pretty JSON of the whole table.
pub fn render_json(table: &LanguageTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}
