//! Best-effort extraction of source lines surrounding a position.

use crate::position::Position;
use crate::snippet::SourceSnippet;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Reads the lines surrounding `position` from its file, best-effort.
///
/// Returns a snippet holding whichever of the previous, error, and next
/// lines could be read. This never fails: an unknown line, a non-file
/// position (the [`Position::STRING_SOURCE`] sentinel or an empty file
/// name), an unopenable file, or a mid-read failure all degrade to a
/// partial or empty snippet. Open and read failures are reported on
/// standard error so that a broken diagnostic is itself diagnosable, but
/// they are never raised to the caller: failing to show context must not
/// prevent showing the diagnostic itself.
///
/// Reading stops as soon as the line after the error line has been seen,
/// so at most `position.line + 1` lines are ever consumed. The file handle
/// is scoped to this call and closed on every exit path.
pub fn extract(position: &Position) -> SourceSnippet {
    let mut snippet = SourceSnippet::empty(position.clone());
    if !position.has_line() || !position.is_file_backed() {
        return snippet;
    }

    let file = match File::open(&position.file) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error reading source file '{}': {err}", position.file);
            return snippet;
        }
    };

    // Lines are counted from 1; `target` is the line before the error line.
    let target = position.line - 1;
    let mut count: u32 = 0;
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error reading source file '{}': {err}", position.file);
                break;
            }
        };
        count += 1;
        if count == target {
            snippet.previous_line = Some(line);
        } else if count == target + 1 {
            snippet.error_line = Some(line);
        } else if count == target + 2 {
            snippet.next_line = Some(line);
            break;
        }
    }
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_source(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn pos(file: &NamedTempFile, line: u32) -> Position {
        Position::new(file.path().to_string_lossy(), line, 1)
    }

    #[test]
    fn middle_of_file() {
        let file = write_source(&["one", "two", "three", "four", "five"]);
        let snippet = extract(&pos(&file, 3));
        assert_eq!(snippet.previous_line.as_deref(), Some("two"));
        assert_eq!(snippet.error_line.as_deref(), Some("three"));
        assert_eq!(snippet.next_line.as_deref(), Some("four"));
    }

    #[test]
    fn first_line_has_no_previous() {
        let file = write_source(&["one", "two"]);
        let snippet = extract(&pos(&file, 1));
        assert!(snippet.previous_line.is_none());
        assert_eq!(snippet.error_line.as_deref(), Some("one"));
        assert_eq!(snippet.next_line.as_deref(), Some("two"));
    }

    #[test]
    fn last_line_has_no_next() {
        let file = write_source(&["one", "two"]);
        let snippet = extract(&pos(&file, 2));
        assert_eq!(snippet.previous_line.as_deref(), Some("one"));
        assert_eq!(snippet.error_line.as_deref(), Some("two"));
        assert!(snippet.next_line.is_none());
    }

    #[test]
    fn line_past_eof_collects_nothing() {
        let file = write_source(&["one"]);
        let snippet = extract(&pos(&file, 5));
        assert!(!snippet.has_context());
        assert!(snippet.previous_line.is_none());
    }

    #[test]
    fn line_just_past_eof_keeps_previous_only() {
        let file = write_source(&["one", "two"]);
        // Line 3 does not exist, but line 2 is its previous line.
        let snippet = extract(&pos(&file, 3));
        assert_eq!(snippet.previous_line.as_deref(), Some("two"));
        assert!(snippet.error_line.is_none());
        assert!(!snippet.has_context());
    }

    #[test]
    fn missing_file_is_recoverable() {
        let position = Position::new("/nonexistent/path/to/source.q", 3, 1);
        let snippet = extract(&position);
        assert!(!snippet.has_context());
        assert_eq!(snippet.position, position);
    }

    #[test]
    fn string_source_skips_io() {
        let snippet = extract(&Position::in_string(10, 2));
        assert!(!snippet.has_context());
    }

    #[test]
    fn unknown_line_skips_io() {
        let file = write_source(&["one"]);
        let snippet = extract(&pos(&file, 0));
        assert!(!snippet.has_context());
    }
}
