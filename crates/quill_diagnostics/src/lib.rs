//! Diagnostic reports and their terminal rendering.
//!
//! This crate provides the [`DiagnosticReport`] record describing one
//! problem (severity, name, description, optional hint and source
//! position), the [`Severity`] taxonomy with its label/color table, and the
//! [`TerminalRenderer`] that assembles a report into a deterministic,
//! optionally color-coded multi-line string with a caret-annotated source
//! snippet. Rendering is best-effort by design: a missing or unreadable
//! source file degrades to "no context shown", never to "no report at all".

#![warn(missing_docs)]

pub mod renderer;
pub mod report;
pub mod severity;
pub mod style;

pub use renderer::{render_context, TerminalRenderer};
pub use report::DiagnosticReport;
pub use severity::Severity;
pub use style::{style_for_level, Palette, SeverityStyle};
