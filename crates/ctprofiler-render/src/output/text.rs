//! Text report output writer.

use crate::profile::ProfileSession;
use crate::rendering::render_session;
use crate::utils::config::RenderConfig;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render a session into a text file
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error while writing
///
/// # Example
/// ```ignore
/// let session = read_session("session.json")?;
/// write_report(&session, &RenderConfig::default(), "report.txt")?;
/// ```
pub fn write_report(
    session: &ProfileSession,
    config: &RenderConfig,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_report_to(session, config, &mut writer)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Render a session into an arbitrary sink, e.g. stdout
pub fn write_report_to(
    session: &ProfileSession,
    config: &RenderConfig,
    sink: &mut dyn Write,
) -> Result<(), OutputError> {
    render_session(config, session, sink)?;
    Ok(())
}

/// Calculate file size in bytes
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
