//! Up to three lines of source text surrounding a diagnostic position.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// The lines of source text surrounding a [`Position`], extracted best-effort.
///
/// Fields are populated front-to-back and stop at end of file: the error line
/// may be the first line of the file (no `previous_line`) or the last (no
/// `next_line`). An absent `error_line` means there is no context to show at
/// all, regardless of what else was found. Snippets are derived transiently
/// per render and never cached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceSnippet {
    /// The position this snippet surrounds.
    pub position: Position,
    /// The line before the error line, if any.
    pub previous_line: Option<String>,
    /// The line the position points into, if it could be read.
    pub error_line: Option<String>,
    /// The line after the error line, if any.
    pub next_line: Option<String>,
}

impl SourceSnippet {
    /// Creates a snippet with no context lines.
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            previous_line: None,
            error_line: None,
            next_line: None,
        }
    }

    /// Returns `true` if the snippet has anything to render.
    ///
    /// The error line is the anchor: without it, `previous_line` alone is
    /// meaningless and the snippet renders as nothing.
    pub fn has_context(&self) -> bool {
        self.error_line.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_context() {
        let snippet = SourceSnippet::empty(Position::new("a.q", 3, 1));
        assert!(!snippet.has_context());
        assert!(snippet.previous_line.is_none());
        assert!(snippet.next_line.is_none());
    }

    #[test]
    fn previous_line_alone_is_not_context() {
        let mut snippet = SourceSnippet::empty(Position::new("a.q", 3, 1));
        snippet.previous_line = Some("let x = 1;".to_string());
        assert!(!snippet.has_context());
    }

    #[test]
    fn error_line_is_context() {
        let mut snippet = SourceSnippet::empty(Position::new("a.q", 1, 1));
        snippet.error_line = Some("oops".to_string());
        assert!(snippet.has_context());
    }
}
