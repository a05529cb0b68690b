//! Project path sanitizing

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve a user-supplied project path to a canonical directory.
pub fn sanitize_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let canonical = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
    if !canonical.is_dir() {
        return Err(Error::NotADirectory { path: canonical });
    }
    Ok(canonical)
}

/// Sanitize every path, dropping those naming an already seen directory.
///
/// Each path yields its own result so one bad path does not hide the
/// others. Duplicates are kept once, at their first position.
pub fn sanitize_paths<I, P>(paths: I) -> Vec<Result<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .map(sanitize_path)
        .filter(|result| match result {
            Ok(path) => {
                let first = seen.insert(path.clone());
                if !first {
                    tracing::debug!(path = %path.display(), "Skipping duplicate project path");
                }
                first
            }
            Err(_) => true,
        })
        .collect()
}
