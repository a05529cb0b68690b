//! The format command

use std::path::{Path, PathBuf};

use colored::Colorize;
use gtx_format::format_configuration_set;
use gtx_fs::{FormatOptions, ProjectLayout, read_configuration_set, sanitize_paths, write_configuration_set};

use crate::error::Result;

/// Format the project in `path` in place.
///
/// Nothing is written unless every document of the project formats.
pub fn format_project(path: &Path, options: FormatOptions) -> Result<()> {
    tracing::info!(path = %path.display(), "Formatting project");
    let layout = ProjectLayout::new(path);
    let set = read_configuration_set(&layout)?;
    let set = format_configuration_set(set)?;
    write_configuration_set(&layout, &set, options)?;
    Ok(())
}

/// Format every project in `paths`, reporting each outcome.
///
/// A failing project does not stop the others. Returns whether every
/// project was formatted.
pub fn run_format(paths: &[PathBuf], options: FormatOptions) -> bool {
    let mut succeeded = true;

    for result in sanitize_paths(paths) {
        let outcome = result
            .map_err(Into::into)
            .and_then(|path| format_project(&path, options).map(|()| path));
        match outcome {
            Ok(path) => {
                println!(
                    "The project located at '{}' was successfully formatted.",
                    path.display()
                );
            }
            Err(e) => {
                tracing::debug!(error = ?e, "Formatting failed");
                eprintln!("{}: {}", "error".red().bold(), e);
                succeeded = false;
            }
        }
    }

    succeeded
}
