//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Version line printed by `--version`.
pub const VERSION: &str = concat!(
    "GeoTag-X Project Formatter Tool v",
    env!("CARGO_PKG_VERSION")
);

/// A tool that formats a GeoTag-X project's configurations.
#[derive(Parser, Debug)]
#[command(name = "geotagx-formatter")]
#[command(long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Project directories to format
    #[arg(value_name = "PATH", required_unless_present = "version")]
    pub paths: Vec<PathBuf>,

    /// Suppress all warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Detail the actions being performed
    #[arg(short, long)]
    pub verbose: bool,

    /// Write compact JSON instead of pretty printing
    #[arg(short, long)]
    pub compact: bool,

    /// Display version information and exit
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,
}
