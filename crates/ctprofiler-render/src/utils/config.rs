//! Render configuration and constants.
//!
//! A `RenderConfig` is fixed for the duration of one traversal. It can be
//! built in code, loaded from a TOML file, or assembled by the CLI from flags.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current input schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

// Field widths of the report columns
pub const CALL_COUNT_WIDTH: usize = 7;
pub const MILLIS_WIDTH: usize = 12;

/// Width of the "[calls] millis " column, used to align summary lines
pub const TIMINGS_COLUMN_WIDTH: usize = CALL_COUNT_WIDTH + MILLIS_WIDTH + 6;

pub const DEFAULT_LEAF_MARKER_TOKEN: &str = "|-";
pub const DEFAULT_INDENT_TOKEN: &str = "| ";
pub const DEFAULT_LINE_TERMINATOR: &str = "\n";
pub const DEFAULT_GROUP_INDENT: &str = "    ";

/// Options controlling how a profile is rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Token appended at the deepest indent level
    pub leaf_marker_token: String,

    /// Token repeated once per indentation level
    pub indent_token: String,

    /// Appended after each rendered line
    pub line_terminator: String,

    /// Nodes faster than this are candidates for suppression (0 = never suppress)
    pub suppression_threshold_nanos: u64,

    /// Top-N cap for the leaf summary (0 = no leaf summary)
    pub leaf_summary_max_items: usize,

    /// Minimum summed duration for a leaf to appear in the leaf summary
    pub leaf_summary_threshold_nanos: u64,

    /// Base prefix written in front of every line
    pub line_prefix: String,

    /// Added to the current prefix for every nested per-thread group
    pub group_indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            leaf_marker_token: DEFAULT_LEAF_MARKER_TOKEN.to_string(),
            indent_token: DEFAULT_INDENT_TOKEN.to_string(),
            line_terminator: DEFAULT_LINE_TERMINATOR.to_string(),
            suppression_threshold_nanos: 0,
            leaf_summary_max_items: 0,
            leaf_summary_threshold_nanos: 0,
            line_prefix: String::new(),
            group_indent: DEFAULT_GROUP_INDENT.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suppression threshold in milliseconds
    pub fn with_suppression_threshold_ms(mut self, millis: f64) -> Self {
        self.suppression_threshold_nanos = millis_to_nanos(millis);
        self
    }

    /// Enable the leaf summary with the given cap and threshold in milliseconds
    pub fn with_leaf_summary(mut self, max_items: usize, threshold_millis: f64) -> Self {
        self.leaf_summary_max_items = max_items;
        self.leaf_summary_threshold_nanos = millis_to_nanos(threshold_millis);
        self
    }

    pub fn with_line_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.line_prefix = prefix.into();
        self
    }

    /// Whether the leaf summary is emitted at the end of each session
    pub fn leaf_summary_enabled(&self) -> bool {
        self.leaf_summary_max_items > 0
    }

    /// Check option values that would produce an unreadable report
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_terminator.is_empty() {
            return Err(ConfigError::InvalidOption(
                "line_terminator cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Convert a millisecond value from user input to whole nanoseconds
///
/// Negative and non-finite inputs clamp to zero.
pub fn millis_to_nanos(millis: f64) -> u64 {
    if !millis.is_finite() || millis <= 0.0 {
        return 0;
    }
    (millis * NANOS_PER_MILLI).round() as u64
}

/// Load render configuration from a TOML file
///
/// Missing keys fall back to their defaults.
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::InvalidOption` - If an option value is rejected
///
/// # Example
/// ```ignore
/// let config = load_config("render.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RenderConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: RenderConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.leaf_marker_token, "|-");
        assert_eq!(config.indent_token, "| ");
        assert_eq!(config.line_terminator, "\n");
        assert_eq!(config.suppression_threshold_nanos, 0);
        assert!(!config.leaf_summary_enabled());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RenderConfig = toml::from_str(
            r#"
            suppression_threshold_nanos = 5000000
            leaf_summary_max_items = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.suppression_threshold_nanos, 5_000_000);
        assert_eq!(config.leaf_summary_max_items, 10);
        assert_eq!(config.indent_token, "| ");
    }

    #[test]
    fn test_millis_to_nanos() {
        assert_eq!(millis_to_nanos(5.0), 5_000_000);
        assert_eq!(millis_to_nanos(0.25), 250_000);
        assert_eq!(millis_to_nanos(-1.0), 0);
        assert_eq!(millis_to_nanos(f64::NAN), 0);
    }

    #[test]
    fn test_empty_line_terminator_rejected() {
        let config = RenderConfig {
            line_terminator: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
