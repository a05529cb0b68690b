//! GeoTag-X project formatter
//!
//! Formats the configuration documents of one or more GeoTag-X project
//! directories in place.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use gtx_fs::FormatOptions;

use cli::{Cli, VERSION};

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{VERSION}");
        return;
    }

    if !cli.quiet
        && let Err(e) = logging::init(cli.verbose)
    {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let options = FormatOptions {
        compact: cli.compact,
        overwrite: true,
    };
    if !commands::run_format(&cli.paths, options) {
        std::process::exit(1);
    }
}
