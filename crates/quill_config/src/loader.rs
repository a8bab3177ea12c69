//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ReportConfig;
use std::path::Path;

/// The smallest usable divider width: room for a severity label, the fixed
/// punctuation, and the minimum 3-dash run.
const MIN_WIDTH: usize = 20;

/// Loads and validates a `quill.toml` configuration from a directory.
///
/// Reads `<dir>/quill.toml`, parses it, and validates the values.
pub fn load_config(dir: &Path) -> Result<ReportConfig, ConfigError> {
    let config_path = dir.join("quill.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `quill.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ReportConfig, ConfigError> {
    let config: ReportConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.report.width < MIN_WIDTH {
        return Err(ConfigError::ValidationError(format!(
            "report.width must be at least {MIN_WIDTH} columns, got {}",
            config.report.width
        )));
    }
    Ok(())
}
