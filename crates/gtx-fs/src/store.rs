//! Reading and writing a project's configuration set

use std::path::PathBuf;

use gtx_schema::ConfigurationSet;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{Error, ProjectLayout, Result, io};

/// How formatted documents are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Write compact JSON instead of pretty printing with a 4-space indent.
    pub compact: bool,
    /// Replace documents that already exist.
    pub overwrite: bool,
}

/// Read every document present in a project directory.
///
/// Fails with [`Error::NoConfiguration`] when the directory holds none of
/// the configuration documents.
pub fn read_configuration_set(layout: &ProjectLayout) -> Result<ConfigurationSet> {
    let mut set = ConfigurationSet::new();
    for kind in layout.present_documents() {
        let path = layout.document_path(kind);
        let content = io::read_text(&path)?;
        let document: Value =
            serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "Read {kind} configuration");
        set.insert(kind, document);
    }

    if set.is_empty() {
        return Err(Error::NoConfiguration {
            path: layout.root().to_path_buf(),
        });
    }
    Ok(set)
}

/// Serialize a document as JSON text.
///
/// Pretty output uses a 4-space indent and ends with a newline. Non-ASCII
/// text is written as UTF-8, not escaped.
pub fn to_json_string(value: &Value, compact: bool) -> serde_json::Result<String> {
    if compact {
        return serde_json::to_string(value);
    }

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write every known document of `set` into the project directory.
///
/// The set is written as a unit: all documents are serialized first, and
/// when `options.overwrite` is unset nothing is written if any target file
/// already exists.
pub fn write_configuration_set(
    layout: &ProjectLayout,
    set: &ConfigurationSet,
    options: FormatOptions,
) -> Result<()> {
    let pending = set
        .documents()
        .map(|(kind, document)| {
            let content =
                to_json_string(document, options.compact).map_err(|e| Error::ConfigSerialize {
                    document: kind.to_string(),
                    message: e.to_string(),
                })?;
            Ok((layout.document_path(kind), content))
        })
        .collect::<Result<Vec<(PathBuf, String)>>>()?;

    if !options.overwrite
        && let Some((path, _)) = pending.iter().find(|(path, _)| path.exists())
    {
        return Err(Error::WouldOverwrite { path: path.clone() });
    }

    for (path, content) in &pending {
        io::write_atomic(path, content.as_bytes())?;
    }

    tracing::info!(
        project = %layout.root().display(),
        documents = pending.len(),
        "Wrote configuration set"
    );
    Ok(())
}
