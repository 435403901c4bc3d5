//! Interactive prompts used when no path is given on the command line.
//!
//! The questions are asked in a fixed order: the directory, whether to run
//! the function-length report, and (only if not) whether to plot. A `y`
//! answer selects a mode; anything else declines it.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::RunMode;

/// Answers collected from the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub root: PathBuf,
    pub mode: RunMode,
}

/// Ask one question and return the answer without its line terminator.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Run the prompts against `input`, echoing questions to `output`.
pub fn prompt_answers<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Answers> {
    let root = PathBuf::from(ask(input, output, "dir name: ")?);

    if ask(input, output, "function: ")? == "y" {
        return Ok(Answers {
            root,
            mode: RunMode::Functions,
        });
    }

    let mode = if ask(input, output, "plot: ")? == "y" {
        RunMode::Plot
    } else {
        RunMode::Count
    };

    Ok(Answers { root, mode })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Answers, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let answers = prompt_answers(&mut input, &mut output).unwrap();
        (answers, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_function_mode_skips_plot_question() {
        let (answers, shown) = run("src\ny\n");

        assert_eq!(answers.root, PathBuf::from("src"));
        assert_eq!(answers.mode, RunMode::Functions);
        assert_eq!(shown, "dir name: function: ");
    }

    #[test]
    fn test_plot_mode() {
        let (answers, shown) = run("/tmp/project\nn\ny\n");

        assert_eq!(answers.root, PathBuf::from("/tmp/project"));
        assert_eq!(answers.mode, RunMode::Plot);
        assert_eq!(shown, "dir name: function: plot: ");
    }

    #[test]
    fn test_anything_but_y_declines() {
        let (answers, _) = run("a\nyes\nY\n");
        assert_eq!(answers.mode, RunMode::Count);
    }

    #[test]
    fn test_crlf_answers() {
        let (answers, _) = run("dir\r\ny\r\n");
        assert_eq!(answers.root, PathBuf::from("dir"));
        assert_eq!(answers.mode, RunMode::Functions);
    }

    #[test]
    fn test_exhausted_input_counts() {
        let (answers, _) = run("only-dir\n");
        assert_eq!(answers.root, PathBuf::from("only-dir"));
        assert_eq!(answers.mode, RunMode::Count);
    }
}
