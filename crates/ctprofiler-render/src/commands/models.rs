use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by the CLI to construct from flags
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Session JSON to render
    pub input: PathBuf,

    /// Report file; `None` writes to stdout
    pub output: Option<PathBuf>,

    /// TOML file with render options
    pub config_file: Option<PathBuf>,

    /// Suppress nodes faster than this many milliseconds
    pub suppress_below_ms: Option<f64>,

    /// Number of leaf timers in the summary (0 disables it)
    pub top_leaves: Option<usize>,

    /// Only leaves slower than this many milliseconds appear in the summary
    pub leaf_threshold_ms: Option<f64>,

    /// Prefix written in front of every report line
    pub prefix: Option<String>,
}
