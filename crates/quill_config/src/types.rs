//! Strongly-typed report configuration.

use serde::{Deserialize, Serialize};

/// The top-level `quill.toml` configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report presentation settings (`[report]` table).
    #[serde(default)]
    pub report: ReportSettings,
}

/// Presentation settings for rendered diagnostic reports.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportSettings {
    /// The program name shown at the end of the header divider. Absent
    /// means no program name is rendered.
    #[serde(default)]
    pub program_name: Option<String>,
    /// The target visible width of the header divider, in columns.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Whether to emit ANSI color codes.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            program_name: None,
            width: default_width(),
            color: default_color(),
        }
    }
}

fn default_width() -> usize {
    80
}

fn default_color() -> bool {
    true
}
