//! Command-line argument definitions for the Arbor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, root selection,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Arbor family tree tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input snapshot file (JSON)
    #[arg(
        help = "Path to the input snapshot (JSON)",
        required_unless_present = "sample",
        conflicts_with = "sample"
    )]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Root person to draw the tree from (full name or id);
    /// defaults to the earliest-born person in the snapshot
    #[arg(short, long)]
    pub root: Option<String>,

    /// Render the built-in sample family instead of reading a snapshot
    #[arg(long)]
    pub sample: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
