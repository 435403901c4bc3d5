//! Heuristic function-length estimation.
//!
//! There is no parser here. Each file is fed line by line through a small
//! state machine that decides when a "function" starts and ends by looking at
//! the start of each trimmed line:
//!
//! - **Python rule**: a `def ` or `class ` line ends the previous function
//!   and starts a new one. Indentation is ignored, so a function's length is
//!   simply the number of counted lines up to the next `def`/`class`.
//! - **Brace rule** (C, C++, C#, Java): a line starting with a type or
//!   visibility keyword starts a function; `{`/`}` characters on the
//!   following lines are balanced and the function ends when the balance
//!   drops back to zero.
//!
//! Blank lines and single-line comments are skipped entirely by both rules.
//! Keyword lines inside a body, braces inside string literals and block
//! comments all fool the heuristic; that is accepted.

use std::sync::LazyLock;

use regex::Regex;

use crate::source::encoding::split_lines;
use crate::source::language::{FunctionRule, Language};

/// Keywords that open a function under the brace rule, matched as a whole
/// word at the start of the trimmed line.
static BRACE_FUNCTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\b(int|void|char|float|double|public|private|protected)\b")
        .expect("function start pattern is valid")
});

/// Line-by-line function-length state machine for one file.
#[derive(Debug)]
pub struct Estimator {
    rule: FunctionRule,
    in_function: bool,
    function_length: u64,
    brace_count: i64,
    lengths: Vec<u64>,
}

impl Estimator {
    /// Create an estimator in the "outside any function" state.
    pub fn new(rule: FunctionRule) -> Self {
        Self {
            rule,
            in_function: false,
            function_length: 0,
            brace_count: 0,
            lengths: Vec::new(),
        }
    }

    /// Feed one raw line (terminator already removed).
    pub fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        match self.rule {
            FunctionRule::Python => self.feed_python(trimmed),
            FunctionRule::Brace => self.feed_brace(trimmed),
        }
    }

    fn feed_python(&mut self, trimmed: &str) {
        if trimmed.starts_with('#') {
            return;
        }

        if trimmed.starts_with("def ") || trimmed.starts_with("class ") {
            self.start_function();
        } else if self.in_function {
            self.function_length += 1;
        }
    }

    fn feed_brace(&mut self, trimmed: &str) {
        if trimmed.starts_with("//") {
            return;
        }

        if BRACE_FUNCTION_START.is_match(trimmed) {
            self.start_function();
            self.brace_count = 0;
        } else if self.in_function {
            self.function_length += 1;

            // Every brace counts, and balance is checked once per line: a
            // line that closes past zero (`} }` at balance 1) ends nothing.
            let opens = trimmed.matches('{').count() as i64;
            let closes = trimmed.matches('}').count() as i64;
            self.brace_count += opens;
            if closes > 0 {
                self.brace_count -= closes;
                if self.brace_count == 0 {
                    self.flush();
                }
            }
        }
    }

    /// A boundary line closes the current function (if any) and opens a new
    /// one that already counts the boundary line.
    fn start_function(&mut self) {
        if self.in_function {
            self.lengths.push(self.function_length);
        }
        self.in_function = true;
        self.function_length = 1;
    }

    fn flush(&mut self) {
        self.lengths.push(self.function_length);
        self.in_function = false;
        self.function_length = 0;
    }

    /// End of file: an open function is recorded regardless of brace
    /// balance. Returns the lengths in discovery order.
    pub fn finish(mut self) -> Vec<u64> {
        if self.in_function {
            self.flush();
        }
        self.lengths
    }
}

/// Estimate the function lengths in `text` for `language`.
///
/// Languages without a function rule (headers) always yield an empty list.
pub fn estimate_function_lengths(language: Language, text: &str) -> Vec<u64> {
    let Some(rule) = language.function_rule() else {
        return Vec::new();
    };

    let mut estimator = Estimator::new(rule);
    for line in split_lines(text) {
        estimator.feed(line);
    }
    estimator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python(text: &str) -> Vec<u64> {
        estimate_function_lengths(Language::Python, text)
    }

    fn c(text: &str) -> Vec<u64> {
        estimate_function_lengths(Language::C, text)
    }

    #[test]
    fn test_python_single_function() {
        assert_eq!(python("def f():\n    x = 1\n    return x\n"), vec![3]);
    }

    #[test]
    fn test_python_def_plus_n_lines() {
        for n in 0..10 {
            let mut text = String::from("def f(a):\n");
            for i in 0..n {
                text.push_str(&format!("    a += {i}\n"));
            }
            assert_eq!(python(&text), vec![n + 1]);
        }
    }

    #[test]
    fn test_python_skips_blanks_and_comments() {
        let text = "\
def f():
    # comment

    x = 1
        # indented comment
    return x
";
        assert_eq!(python(text), vec![3]);
    }

    #[test]
    fn test_python_lines_before_first_def_are_ignored() {
        let text = "import os\nX = 1\n\ndef f():\n    pass\n";
        assert_eq!(python(text), vec![2]);
    }

    #[test]
    fn test_python_every_def_and_class_is_a_boundary() {
        let text = "\
class A:
    x = 1
    def m(self):
        return 1
    def n(self):
        pass
def top():
    return 2
";
        // Nesting is not understood: each def/class closes the previous one
        assert_eq!(python(text), vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_python_requires_space_after_keyword() {
        // `define_x` and `classify` are not boundaries
        let text = "def f():\n    define_x = 1\n    classify()\n";
        assert_eq!(python(text), vec![3]);
        assert!(python("definitely = True\n").is_empty());
    }

    #[test]
    fn test_python_no_functions() {
        assert!(python("x = 1\nprint(x)\n").is_empty());
        assert!(python("").is_empty());
    }

    #[test]
    fn test_brace_single_line_open_brace() {
        // The boundary line's own brace is not counted, so the closing brace
        // never balances and the function is flushed at end of file
        assert_eq!(c("int foo() {\n  return 1;\n}\n"), vec![3]);
    }

    #[test]
    fn test_brace_closes_on_balance() {
        let text = "\
int foo()
{
    return 1;
}
void bar()
{
    int x = 0;
}
";
        // `int x = 0;` starts a new function inside bar
        assert_eq!(c(text), vec![4, 2, 2]);
    }

    #[test]
    fn test_brace_nested_blocks() {
        let text = "\
static helper = 1;
double area(double r)
{
    if (r > 0) {
        return r * r;
    } else {
        return 0;
    }
}
trailing();
";
        assert_eq!(c(text), vec![8]);
    }

    #[test]
    fn test_brace_counts_every_character() {
        let text = "\
void f()
{ { {
} } }
";
        assert_eq!(c(text), vec![3]);
    }

    #[test]
    fn test_brace_overshooting_close_keeps_function_open() {
        let text = "\
void f()
{
    g();
} }
tail();
";
        // Balance goes 1 -> -1 on the `} }` line, never 0, so the function
        // only ends at end of file
        assert_eq!(c(text), vec![5]);
    }

    #[test]
    fn test_brace_skips_blanks_and_line_comments() {
        let text = "\
void f()
// int not_a_function;
{

    // }
    g();
}
";
        assert_eq!(c(text), vec![4]);
    }

    #[test]
    fn test_brace_keyword_must_be_whole_word() {
        assert!(c("integer x;\nint_t y;\nvoidable z;\n").is_empty());
        assert_eq!(c("public:\n  x();\n"), vec![2]);
        assert_eq!(c("int\n"), vec![1]);
    }

    #[test]
    fn test_brace_keyword_must_start_line() {
        assert!(c("static int f() {\n}\n").is_empty());
        assert!(c("unsigned int g;\n").is_empty());
    }

    #[test]
    fn test_brace_java_class() {
        let text = "\
public class Greeter {
    private String name;
    public String greet() {
        return \"hi \" + name;
    }
}
";
        let lengths = estimate_function_lengths(Language::Java, text);
        // `private` and the second `public` each restart, and the final
        // function never balances, so it runs to end of file
        assert_eq!(lengths, vec![1, 1, 4]);
    }

    #[test]
    fn test_brace_rule_shared_by_family() {
        let text = "void f()\n{\n    g();\n}\n";
        for lang in [Language::C, Language::Cpp, Language::CSharp, Language::Java] {
            assert_eq!(estimate_function_lengths(lang, text), vec![4]);
        }
    }

    #[test]
    fn test_header_has_no_functions() {
        let text = "void f()\n{\n    g();\n}\n";
        assert!(estimate_function_lengths(Language::Header, text).is_empty());
    }

    #[test]
    fn test_lengths_are_positive() {
        let text = "int a;\nint b;\nvoid c()\n{\n}\n";
        let lengths = c(text);
        assert_eq!(lengths, vec![1, 1, 3]);
        assert!(lengths.iter().all(|&n| n > 0));
    }

    #[test]
    fn test_estimator_state_machine_directly() {
        let mut estimator = Estimator::new(FunctionRule::Python);
        estimator.feed("def a():");
        estimator.feed("    pass");
        estimator.feed("def b():");
        assert_eq!(estimator.finish(), vec![2, 1]);
    }
}
