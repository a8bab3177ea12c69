//! The structured description of one problem to be rendered.

use crate::severity::Severity;
use quill_source::Position;
use serde::{Deserialize, Serialize};

/// A structured description of one problem: severity, name, human-readable
/// description, and optional remediation hint and source position.
///
/// Reports are immutable once built; rendering never mutates them, and each
/// render derives its own transient source snippet. The program name shown
/// in the header divider is not part of the report — it is process-wide
/// configuration injected into the renderer (see
/// [`TerminalRenderer`](crate::TerminalRenderer)).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// The severity of the problem.
    pub severity: Severity,
    /// The short name of the problem, e.g. `TypeError`. An empty name
    /// renders the header divider without a name segment.
    pub name: String,
    /// The human-readable description, rendered verbatim.
    pub description: String,
    /// An optional remediation hint; absent hints render as an empty line.
    pub hint: Option<String>,
    /// Where in source text the problem occurred, if known.
    pub position: Option<Position>,
}

impl DiagnosticReport {
    /// Creates a report with the given severity.
    pub fn new(
        severity: Severity,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            name: name.into(),
            description: description.into(),
            hint: None,
            position: None,
        }
    }

    /// Creates an error report.
    pub fn error(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, name, description)
    }

    /// Creates a warning report.
    pub fn warning(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Warn, name, description)
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attaches the source position the report points at.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}
