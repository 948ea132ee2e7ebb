//! Command-line argument definitions for the Tejun CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output formats,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Tejun process-model generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input procedure text file, or `-` for stdin
    #[arg(help = "Path to the input text file ('-' reads stdin)")]
    pub input: String,

    /// Output basename; one file per format is written as `<basename>.<ext>`
    #[arg(short, long, default_value = "out")]
    pub output: String,

    /// Output formats to write (xml, json, svg, ascii); repeatable
    #[arg(short, long, default_values_t = [String::from("xml")])]
    pub format: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
