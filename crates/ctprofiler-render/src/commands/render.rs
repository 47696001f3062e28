//! Render command implementation.
//!
//! The render command:
//! 1. Loads render options (file, then flag overrides)
//! 2. Reads and validates the session JSON
//! 3. Writes the text report to a file or stdout

use crate::commands::models::RenderArgs;
use crate::output::{write_report, write_report_to};
use crate::parser::read_session;
use crate::utils::config::{load_config, millis_to_nanos, RenderConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from the CLI
///
/// # Errors
/// * Config file or session file cannot be read or is invalid
/// * The report cannot be written
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = build_config(&args)?;
    debug!("Render config: {:?}", config);

    info!("Reading session: {}", args.input.display());
    let session = read_session(&args.input)
        .with_context(|| format!("Failed to read session {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            write_report(&session, &config, path).context("Failed to write report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_report_to(&session, &config, &mut lock)
                .context("Failed to write report to stdout")?;
        }
    }

    info!(
        "Render completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Resolve render options: defaults, then the config file, then flags
pub fn build_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config_file {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(millis) = args.suppress_below_ms {
        config.suppression_threshold_nanos = millis_to_nanos(millis);
    }
    if let Some(top) = args.top_leaves {
        config.leaf_summary_max_items = top;
    }
    if let Some(millis) = args.leaf_threshold_ms {
        config.leaf_summary_threshold_nanos = millis_to_nanos(millis);
    }
    if let Some(prefix) = &args.prefix {
        config.line_prefix = prefix.clone();
    }

    config.validate().context("Invalid render options")?;
    Ok(config)
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    for (flag, value) in [
        ("suppress-below-ms", args.suppress_below_ms),
        ("leaf-threshold-ms", args.leaf_threshold_ms),
    ] {
        if let Some(millis) = value {
            if !millis.is_finite() || millis < 0.0 {
                anyhow::bail!("--{} must be a non-negative number", flag);
            }
        }
    }

    Ok(())
}
