//! Source locations with 1-indexed line/column coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in source text: a file name plus 1-indexed line and column.
///
/// A `line` of 0 means the position is unknown; a `column` of 0 means the
/// line is known but the column is not. The file field may name a real file
/// on disk, or it may be the [`STRING_SOURCE`](Position::STRING_SOURCE)
/// sentinel for source text that never existed as a file (e.g. an evaluated
/// string), in which case no filesystem access is ever attempted for it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Position {
    /// The file the position refers to, or a sentinel for non-file sources.
    pub file: String,
    /// The 1-indexed line number, or 0 if unknown.
    pub line: u32,
    /// The 1-indexed column number, or 0 if unknown.
    pub column: u32,
}

impl Position {
    /// Sentinel file value for source text that is not backed by a file.
    pub const STRING_SOURCE: &'static str = "(string)";

    /// Creates a position with both line and column known.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a position into string source text (no backing file).
    pub fn in_string(line: u32, column: u32) -> Self {
        Self::new(Self::STRING_SOURCE, line, column)
    }

    /// Returns `true` if the line number is known.
    pub fn has_line(&self) -> bool {
        self.line > 0
    }

    /// Returns `true` if this position refers to a readable file on disk,
    /// as opposed to the string-source sentinel or an empty file name.
    pub fn is_file_backed(&self) -> bool {
        !self.file.is_empty() && self.file != Self::STRING_SOURCE
    }
}

/// Displays as `(line:column)`, `(line)` when only the line is known,
/// or nothing at all when the line is unknown.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            if self.column > 0 {
                write!(f, "({}:{})", self.line, self.column)
            } else {
                write!(f, "({})", self.line)
            }
        } else {
            Ok(())
        }
    }
}
