//! Assembly of a diagnostic report into terminal text.

use crate::report::DiagnosticReport;
use crate::style::{style_for_level, Palette};
use quill_config::ReportConfig;
use quill_source::{extract, SourceSnippet};
use std::io;

/// Renders diagnostic reports for a terminal.
///
/// Produces output like:
/// ```text
/// error: --- TypeError ------------------------------------------------ quill
/// in file: default.q (13:5)
///
/// value is an integer while a string was expected
///
///     12|   name = "example";
///     13|   greeting = 42;
///       |     ^
///     14| }
///
/// try quoting the value
/// ```
///
/// The renderer owns the process-wide presentation state: program name,
/// target width, line prefix, and palette. All of it is immutable after
/// construction, so a renderer can be shared freely across threads and
/// every render is independent. Rendering itself never fails; source I/O
/// problems degrade to a report without a snippet.
pub struct TerminalRenderer {
    program_name: Option<String>,
    width: usize,
    prefix: String,
    palette: Palette,
}

impl TerminalRenderer {
    /// Creates a renderer with the default 80-column width and no
    /// program name or prefix.
    pub fn new(color: bool) -> Self {
        Self {
            program_name: None,
            width: 80,
            prefix: String::new(),
            palette: if color { Palette::colored() } else { Palette::plain() },
        }
    }

    /// Creates a renderer from loaded configuration.
    pub fn from_config(config: &ReportConfig) -> Self {
        let report = &config.report;
        Self {
            program_name: report.program_name.clone(),
            width: report.width,
            prefix: String::new(),
            palette: if report.color { Palette::colored() } else { Palette::plain() },
        }
    }

    /// Sets the program name shown at the end of the header divider.
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Sets the target visible width of the header divider.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets a prefix prepended to every emitted line.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Renders the full multi-line report.
    pub fn render(&self, report: &DiagnosticReport) -> String {
        let prefix = self.prefix.as_str();
        let palette = &self.palette;
        let style = style_for_level(report.severity.level(), palette);
        let program = self.program_name.as_deref().unwrap_or("");
        let blue = palette.blue();
        let reset = palette.reset();

        let mut out = String::new();

        // Header divider. The dash run pads the used width up to the target
        // width, and is never shorter than 3 dashes no matter how long the
        // name and program name get. Widths count visible characters only,
        // so the layout is identical with colors stripped.
        let used = visible_width(prefix)
            + visible_width(&style.label)
            + 3
            + visible_width(&report.name)
            + visible_width(program);
        let dash_count = if used > self.width.saturating_sub(3) {
            3
        } else {
            self.width - used
        };
        let dashes = "-".repeat(dash_count);
        let label = style.colored_label();
        if !report.name.is_empty() {
            out.push_str(&format!(
                "{prefix}{label}{blue} --- {} {dashes} {program}{reset}\n",
                report.name
            ));
        } else {
            out.push_str(&format!(
                "{prefix}{label}{blue} -----{dashes} {program}{reset}\n"
            ));
        }

        // Where the problem occurred. Positions into string sources (or
        // with no file at all) came from the command line.
        if let Some(position) = &report.position {
            if position.is_file_backed() {
                out.push_str(&format!(
                    "{prefix}in file: {blue}{} {position}{reset}\n",
                    position.file
                ));
            } else {
                out.push_str(&format!("{prefix}from command line argument\n"));
            }
            out.push_str(&format!("{prefix}\n"));
        }

        if !report.description.is_empty() {
            out.push_str(&format!("{prefix}{}\n{prefix}\n", report.description));
        }

        if let Some(position) = &report.position {
            let snippet = extract(position);
            let lines = render_context(prefix, &snippet, palette);
            if !lines.is_empty() {
                for line in &lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(&format!("{prefix}\n"));
            }

            // The hint line is always emitted when a position was supplied;
            // an absent hint renders as an empty line rather than being a
            // precondition on the caller.
            out.push_str(&format!(
                "{prefix}{}\n{prefix}\n",
                report.hint.as_deref().unwrap_or("")
            ));
        }

        out
    }

    /// Renders the report and writes it to a caller-supplied sink.
    pub fn emit(&self, report: &DiagnosticReport, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(self.render(report).as_bytes())
    }
}

/// Renders a snippet as aligned, line-numbered text with a caret under the
/// error column.
///
/// Emits nothing when the snippet has no error line: the target line is
/// the anchor, and without it there is nothing meaningful to show. Line
/// numbers are right-aligned in a fixed 5-character gutter; the caret
/// line's lead-in matches that gutter exactly so the caret sits under the
/// reported 1-based column of the error line.
pub fn render_context(prefix: &str, snippet: &SourceSnippet, palette: &Palette) -> Vec<String> {
    let Some(error_line) = &snippet.error_line else {
        return Vec::new();
    };
    let line = snippet.position.line;
    let column = snippet.position.column;

    let mut out = Vec::new();
    if let Some(previous) = &snippet.previous_line {
        out.push(format!("{prefix} {:>5}| {previous}", line.saturating_sub(1)));
    }
    out.push(format!("{prefix} {line:>5}| {error_line}"));
    if column > 0 {
        let spaces = " ".repeat(column as usize);
        out.push(format!(
            "{prefix}      |{spaces}{}^{}",
            palette.red(),
            palette.reset()
        ));
    }
    if let Some(next) = &snippet.next_line {
        out.push(format!("{prefix} {:>5}| {next}", line + 1));
    }
    out
}

/// The number of terminal columns a string occupies, ignoring color codes
/// (which are never part of the inputs measured here).
fn visible_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_source::Position;

    fn snippet(line: u32, column: u32) -> SourceSnippet {
        let mut snippet = SourceSnippet::empty(Position::new("main.q", line, column));
        snippet.previous_line = Some("two".to_string());
        snippet.error_line = Some("three".to_string());
        snippet.next_line = Some("four".to_string());
        snippet
    }

    #[test]
    fn context_gutter_is_five_columns() {
        let lines = render_context("", &snippet(3, 4), &Palette::plain());
        assert_eq!(lines[0], "     2| two");
        assert_eq!(lines[1], "     3| three");
        assert_eq!(lines[3], "     4| four");
    }

    #[test]
    fn caret_sits_under_the_column() {
        let lines = render_context("", &snippet(3, 4), &Palette::plain());
        let caret = &lines[2];
        assert_eq!(caret, "      |    ^");
        // The error line's column 4 character and the caret share an offset.
        let text_start = "     3| ".len();
        assert_eq!(caret.find('^').unwrap(), text_start + 4 - 1);
    }

    #[test]
    fn no_caret_without_a_column() {
        let lines = render_context("", &snippet(3, 0), &Palette::plain());
        assert_eq!(lines.len(), 3);
        assert!(!lines.iter().any(|l| l.contains('^')));
    }

    #[test]
    fn no_output_without_error_line() {
        let mut s = snippet(3, 4);
        s.error_line = None;
        assert!(render_context("", &s, &Palette::plain()).is_empty());
    }

    #[test]
    fn wide_line_numbers_stay_aligned() {
        let mut s = snippet(99999, 1);
        s.previous_line = Some("a".to_string());
        let lines = render_context("", &s, &Palette::plain());
        assert_eq!(lines[0], " 99998| a");
        assert_eq!(lines[1], " 99999| three");
    }

    #[test]
    fn prefix_prepends_every_line() {
        let lines = render_context("  ", &snippet(3, 4), &Palette::plain());
        assert!(lines.iter().all(|l| l.starts_with("  ")));
    }
}
