//! [`TestProject`] builder for project-directory test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use gtx_schema::DocumentKind;
use serde_json::Value;
use tempfile::TempDir;

/// A temporary project directory with helpers to seed and inspect the
/// configuration documents.
///
/// # Example
///
/// ```rust,no_run
/// use gtx_schema::DocumentKind;
/// use gtx_test_utils::{documents, project::TestProject};
///
/// let project = TestProject::new();
/// project.write_document(DocumentKind::Project, &documents::project());
/// project.assert_file_exists("project.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project directory seeded with every sample document.
    pub fn with_sample_documents() -> Self {
        let project = Self::new();
        for (kind, document) in crate::documents::configuration_set().documents() {
            project.write_document(kind, document);
        }
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn document_path(&self, kind: DocumentKind) -> PathBuf {
        self.root().join(kind.file_name())
    }

    /// Write `document` as pretty JSON to the file `kind` is stored in.
    pub fn write_document(&self, kind: DocumentKind, document: &Value) {
        let content = serde_json::to_string_pretty(document).unwrap();
        fs::write(self.document_path(kind), content).unwrap();
    }

    /// Write raw text to `name` (relative to the project root).
    pub fn write_raw(&self, name: &str, content: &str) {
        fs::write(self.root().join(name), content).unwrap();
    }

    /// Parse the document stored for `kind`.
    ///
    /// # Panics
    /// Panics if the file is missing or is not valid JSON.
    pub fn read_document(&self, kind: DocumentKind) -> Value {
        serde_json::from_str(&self.read_raw(kind.file_name())).unwrap()
    }

    pub fn read_raw(&self, name: &str) -> String {
        let path = self.root().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `name` (relative to the project root) exists.
    pub fn assert_file_exists(&self, name: &str) {
        let path = self.root().join(name);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `name` (relative to the project root) does **not** exist.
    pub fn assert_file_not_exists(&self, name: &str) {
        let path = self.root().join(name);
        assert!(!path.exists(), "Expected file NOT to exist: {}", path.display());
    }
}
