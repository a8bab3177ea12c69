//! Label and color selection for severity levels.

use crate::severity::Severity;

const ANSI_RED: &str = "\x1b[31;1m";
const ANSI_GREEN: &str = "\x1b[32;1m";
const ANSI_YELLOW: &str = "\x1b[33;1m";
const ANSI_BLUE: &str = "\x1b[34;1m";
const ANSI_NORMAL: &str = "\x1b[0m";

/// The four logical colors used by report rendering, plus reset.
///
/// A disabled palette returns the empty string for every code, so a
/// non-coloring target loses nothing but the escapes: all dash and column
/// arithmetic is defined in terms of visible characters and stays correct
/// when colors are stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that emits ANSI escape codes.
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// A palette that emits no escape codes at all.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// The color for errors and carets.
    pub fn red(&self) -> &'static str {
        if self.enabled { ANSI_RED } else { "" }
    }

    /// The color for the informational and verbose tiers.
    pub fn green(&self) -> &'static str {
        if self.enabled { ANSI_GREEN } else { "" }
    }

    /// The color for warnings and debug output.
    pub fn yellow(&self) -> &'static str {
        if self.enabled { ANSI_YELLOW } else { "" }
    }

    /// The color for structural report text (divider, file names).
    pub fn blue(&self) -> &'static str {
        if self.enabled { ANSI_BLUE } else { "" }
    }

    /// The reset code ending any colored run.
    pub fn reset(&self) -> &'static str {
        if self.enabled { ANSI_NORMAL } else { "" }
    }
}

/// How a severity level is displayed: label text plus on/off color codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeverityStyle {
    /// The visible label, e.g. `error:`.
    pub label: String,
    /// The escape sequence turning the label color on (may be empty).
    pub color_on: &'static str,
    /// The escape sequence turning the label color off (may be empty).
    pub color_off: &'static str,
}

impl SeverityStyle {
    /// The label wrapped in its color codes.
    pub fn colored_label(&self) -> String {
        format!("{}{}{}", self.color_on, self.label, self.color_off)
    }
}

/// Returns the display style for a numeric severity level.
///
/// Total over all inputs with no failure mode: levels outside the
/// [`Severity`] enumeration get the uncolored label
/// `invalid error level: N` — a visible diagnostic-of-a-diagnostic, not a
/// silent default, so that a bad level coming in over a wire or config
/// boundary is diagnosable from the report itself.
pub fn style_for_level(level: u8, palette: &Palette) -> SeverityStyle {
    let (label, color_on) = match Severity::from_level(level) {
        Some(Severity::Error) => ("error:", palette.red()),
        Some(Severity::Warn) => ("warning:", palette.yellow()),
        Some(Severity::Info) => ("info:", palette.green()),
        Some(Severity::Talkative) => ("talk:", palette.green()),
        Some(Severity::Chatty) => ("chat:", palette.green()),
        Some(Severity::Vomit) => ("vomit:", palette.green()),
        Some(Severity::Debug) => ("debug:", palette.yellow()),
        None => {
            return SeverityStyle {
                label: format!("invalid error level: {level}"),
                color_on: "",
                color_off: "",
            }
        }
    };
    SeverityStyle {
        label: label.to_string(),
        color_on,
        color_off: palette.reset(),
    }
}

impl Severity {
    /// Returns the display style for this severity.
    pub fn style(self, palette: &Palette) -> SeverityStyle {
        style_for_level(self.level(), palette)
    }
}
