//! Live terminal bar chart of line counts.
//!
//! The chart is redrawn in place after every counted file, then the walk is
//! paused for a short delay so the frame is visible. When stdout is not a
//! terminal nothing is animated and only the final frame is written.

use std::io;
use std::thread;
use std::time::Duration;

use console::{Style, Term};
use funcloclib::{Language, LineCounts};

const TITLE: &str = "statistics";
const X_LABEL: &str = "language";
const Y_LABEL: &str = "code line number";
const LABEL_WIDTH: usize = 6;
const MIN_BAR_WIDTH: usize = 10;

/// Fixed colour per language.
fn bar_style(language: Language) -> Style {
    let style = Style::new();
    match language {
        Language::Python => style.red(),
        Language::C => style.green(),
        Language::Header => style.blue(),
        Language::Java => style.yellow(),
        Language::Cpp => style.magenta(),
        Language::CSharp => style.cyan(),
    }
}

/// Render one frame as lines of text.
///
/// Bars are scaled so the largest count spans `bar_width` cells.
pub fn render_frame(counts: &LineCounts, bar_width: usize) -> Vec<String> {
    let max = counts.max();
    let mut lines = Vec::with_capacity(Language::ALL.len() + 3);

    lines.push(Style::new().bold().apply_to(TITLE).to_string());
    lines.push(X_LABEL.to_string());

    for (language, count) in counts.iter() {
        let cells = if max == 0 {
            0
        } else {
            (count as u128 * bar_width as u128 / max as u128) as usize
        };
        let bar = bar_style(language).apply_to("█".repeat(cells));
        lines.push(format!(
            "{:<width$}│{} {}",
            language.tag(),
            bar,
            count,
            width = LABEL_WIDTH
        ));
    }

    lines.push(format!(
        "{:<width$}└{} {}",
        "",
        "─".repeat(bar_width),
        Y_LABEL,
        width = LABEL_WIDTH
    ));

    lines
}

/// A bar chart drawn on a terminal and updated in place.
pub struct BarChart {
    term: Term,
    delay: Duration,
    live: bool,
    drawn_lines: usize,
}

impl BarChart {
    /// Create a chart on `term`, pausing `delay` after each live frame.
    pub fn new(term: Term, delay: Duration) -> Self {
        let live = term.is_term();
        Self {
            term,
            delay,
            live,
            drawn_lines: 0,
        }
    }

    fn bar_width(&self) -> usize {
        let (_, cols) = self.term.size();
        (cols as usize)
            .saturating_sub(LABEL_WIDTH + Y_LABEL.len() + 4)
            .max(MIN_BAR_WIDTH)
    }

    fn draw(&mut self, counts: &LineCounts) -> io::Result<()> {
        let frame = render_frame(counts, self.bar_width());
        if self.drawn_lines > 0 {
            self.term.clear_last_lines(self.drawn_lines)?;
        }
        for line in &frame {
            self.term.write_line(line)?;
        }
        self.drawn_lines = frame.len();
        Ok(())
    }

    /// Redraw with new totals and pause.
    pub fn update(&mut self, counts: &LineCounts) -> io::Result<()> {
        if !self.live {
            return Ok(());
        }
        self.draw(counts)?;
        thread::sleep(self.delay);
        Ok(())
    }

    /// Make sure the final totals are on screen.
    pub fn finish(&mut self, counts: &LineCounts) -> io::Result<()> {
        if !self.live || self.drawn_lines == 0 {
            self.draw(counts)?;
        }
        Ok(())
    }

    /// Keep the final chart up until the user presses Enter.
    ///
    /// Returns immediately when nobody is attached to the terminal.
    pub fn wait_for_dismissal(&self) -> io::Result<()> {
        if !self.live || !console::user_attended() {
            return Ok(());
        }
        self.term.write_line("Press Enter to close the chart")?;
        self.term.read_line()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn plain(frame: &[String]) -> Vec<String> {
        frame
            .iter()
            .map(|line| strip_ansi_codes(line).to_string())
            .collect()
    }

    fn bar_len(line: &str) -> usize {
        line.chars().filter(|&c| c == '█').count()
    }

    #[test]
    fn test_frame_layout() {
        let frame = plain(&render_frame(&LineCounts::new(), 20));

        assert_eq!(frame.len(), 9);
        assert_eq!(frame[0], TITLE);
        assert_eq!(frame[1], X_LABEL);
        assert!(frame[2].starts_with("py    │"));
        assert!(frame[7].starts_with("cs    │"));
        assert!(frame[8].ends_with(Y_LABEL));
    }

    #[test]
    fn test_empty_counts_draw_no_bars() {
        let frame = plain(&render_frame(&LineCounts::new(), 20));
        for line in &frame[2..8] {
            assert_eq!(bar_len(line), 0);
            assert!(line.ends_with(" 0"));
        }
    }

    #[test]
    fn test_bars_scale_to_largest_count() {
        let mut counts = LineCounts::new();
        counts.add(Language::Python, 100);
        counts.add(Language::C, 50);
        counts.add(Language::CSharp, 1);

        let frame = plain(&render_frame(&counts, 40));

        assert_eq!(bar_len(&frame[2]), 40);
        assert!(frame[2].ends_with(" 100"));
        assert_eq!(bar_len(&frame[3]), 20);
        assert_eq!(bar_len(&frame[4]), 0);
        assert_eq!(bar_len(&frame[7]), 0);
        assert!(frame[7].ends_with(" 1"));
    }

    #[test]
    fn test_every_language_has_a_distinct_colour() {
        let styles: Vec<String> = Language::ALL
            .into_iter()
            .map(|lang| format!("{:?}", bar_style(lang)))
            .collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
