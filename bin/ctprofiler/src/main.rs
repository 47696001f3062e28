//! ctprofiler CLI
//!
//! Renders call trees captured by a code-path profiler as text reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use ctprofiler_render::commands::{
    display_schema, display_version, execute_render, validate_args, validate_session_file,
    RenderArgs,
};

/// ctprofiler - text reports for code-path profiles
#[derive(Parser, Debug)]
#[command(name = "ctprofiler")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a session JSON as a text report
    Render {
        /// Session JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Report file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file with render options
        #[arg(short, long, env = "CTPROFILER_CONFIG")]
        config: Option<PathBuf>,

        /// Collapse sibling timers faster than this (milliseconds)
        #[arg(long)]
        suppress_below_ms: Option<f64>,

        /// Number of leaf timers to rank at the end of each session (0 disables)
        #[arg(long)]
        top_leaves: Option<usize>,

        /// Only rank leaf timers slower than this (milliseconds)
        #[arg(long)]
        leaf_threshold_ms: Option<f64>,

        /// Prefix written in front of every report line
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Validate a session JSON file
    Validate {
        /// Path to session JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean report
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("Resolved command: {:?}", cli.command);

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            suppress_below_ms,
            top_leaves,
            leaf_threshold_ms,
            prefix,
        } => {
            let args = RenderArgs {
                input,
                output,
                config_file: config,
                suppress_below_ms,
                top_leaves,
                leaf_threshold_ms,
                prefix,
            };

            validate_args(&args)?;
            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_session_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
