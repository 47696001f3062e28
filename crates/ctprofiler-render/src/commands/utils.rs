use crate::parser::read_session;
use crate::profile::ProfileSession;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

/// Validate a session JSON file
pub fn validate_session_file(file_path: PathBuf) -> Result<()> {
    println!("Validating session: {}", file_path.display());

    let session = read_session(&file_path)?;

    println!("{}", "✓ Valid session JSON".green());
    print_session_overview(&session, 1);

    Ok(())
}

fn print_session_overview(session: &ProfileSession, depth: usize) {
    let pad = "  ".repeat(depth);
    println!("{}Thread: {}", pad, session.thread_name.bold());
    println!("{}  Roots: {}", pad, session.roots.len());
    println!("{}  Nodes: {}", pad, session.node_count());
    for subtask in &session.subtasks {
        print_session_overview(subtask, depth + 1);
    }
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("ctprofiler Session Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  thread_name: string      - Name of the captured thread");
        println!("  roots: array             - Root timers of the call tree");
        println!("    name: string           - Timer name");
        println!("    stats: object?         - Absent for umbrella timers");
        println!("      calls: number        - Number of recorded calls");
        println!("      total_nanos: number  - Summed elapsed nanoseconds");
        println!("    children: array?       - Nested timers");
        println!("  subtasks: array?         - Sessions of other threads");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("ctprofiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Session Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Text reports for code-path profiling call trees.");
}
