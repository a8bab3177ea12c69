//! Source positions and best-effort source context extraction for diagnostics.
//!
//! This crate provides the [`Position`] type for locating a diagnostic in
//! source text, the [`SourceSnippet`] holding up to three lines of context
//! around that location, and [`extract`] for reading those lines from disk
//! without ever failing the caller.

#![warn(missing_docs)]

pub mod context;
pub mod position;
pub mod snippet;

pub use context::extract;
pub use position::Position;
pub use snippet::SourceSnippet;
