//! Project directory layout

use std::path::{Path, PathBuf};

use gtx_schema::DocumentKind;

/// A project directory and the files its configuration documents live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding the `kind` document.
    pub fn document_path(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    /// Documents whose file exists, in [`DocumentKind::ALL`] order.
    pub fn present_documents(&self) -> impl Iterator<Item = DocumentKind> + '_ {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.document_path(*kind).is_file())
    }
}
