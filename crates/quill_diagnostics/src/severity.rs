//! Diagnostic severity levels ordered from least to most verbose.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic report.
///
/// Ordered by verbosity, matching the derived `PartialOrd`/`Ord` based on
/// declaration order: [`Error`](Severity::Error) is the quietest tier that
/// is always shown, [`Debug`](Severity::Debug) the most verbose. Consumers
/// that filter by verbosity compare against a threshold; rendering itself
/// is a pure label/color lookup (see [`style_for_level`](crate::style)).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    /// A definite problem.
    Error = 0,
    /// A potential problem worth reviewing.
    Warn = 1,
    /// An informational message.
    Info = 2,
    /// Verbose operational chatter.
    Talkative = 3,
    /// Very verbose operational chatter.
    Chatty = 4,
    /// Extremely verbose output.
    Vomit = 5,
    /// Debugging output.
    Debug = 6,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// Returns the numeric level of this severity.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Converts a numeric level back into a severity, if it is in range.
    ///
    /// Out-of-range levels return `None`; when rendered they get a visible
    /// fallback label rather than being silently mapped to a default, so
    /// misuse stays diagnosable.
    pub fn from_level(level: u8) -> Option<Severity> {
        match level {
            0 => Some(Severity::Error),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Info),
            3 => Some(Severity::Talkative),
            4 => Some(Severity::Chatty),
            5 => Some(Severity::Vomit),
            6 => Some(Severity::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Talkative => write!(f, "talk"),
            Severity::Chatty => write!(f, "chat"),
            Severity::Vomit => write!(f, "vomit"),
            Severity::Debug => write!(f, "debug"),
        }
    }
}
