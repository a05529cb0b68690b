//! The three-document configuration set

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One of the documents making up a project's configuration set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Project,
    TaskPresenter,
    Tutorial,
}

impl DocumentKind {
    /// Every document kind, in the order documents are formatted.
    ///
    /// The tutorial depends on the task presenter's language, so the task
    /// presenter always precedes it.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Project,
        DocumentKind::TaskPresenter,
        DocumentKind::Tutorial,
    ];

    /// Key of the document inside a configuration set.
    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::Project => "project",
            DocumentKind::TaskPresenter => "task_presenter",
            DocumentKind::Tutorial => "tutorial",
        }
    }

    /// Name of the file holding the document in a project directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Project => "project.json",
            DocumentKind::TaskPresenter => "task_presenter.json",
            DocumentKind::Tutorial => "tutorial.json",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A project's configuration set: up to three documents keyed by
/// [`DocumentKind::key`].
///
/// Keys that name no known document are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationSet {
    documents: Map<String, Value>,
}

impl ConfigurationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(documents: Map<String, Value>) -> Self {
        Self { documents }
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.documents
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.documents
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&Value> {
        self.documents.get(kind.key())
    }

    pub fn get_mut(&mut self, kind: DocumentKind) -> Option<&mut Value> {
        self.documents.get_mut(kind.key())
    }

    pub fn contains(&self, kind: DocumentKind) -> bool {
        self.documents.contains_key(kind.key())
    }

    /// Insert a document, returning the one it replaces.
    pub fn insert(&mut self, kind: DocumentKind, document: Value) -> Option<Value> {
        self.documents.insert(kind.key().to_string(), document)
    }

    /// Known documents present in the set, in [`DocumentKind::ALL`] order.
    pub fn documents(&self) -> impl Iterator<Item = (DocumentKind, &Value)> {
        DocumentKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|document| (kind, document)))
    }

    /// Keys that do not name a known document.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.documents
            .keys()
            .map(String::as_str)
            .filter(|key| DocumentKind::from_key(key).is_none())
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl From<Map<String, Value>> for ConfigurationSet {
    fn from(documents: Map<String, Value>) -> Self {
        Self::from_map(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_keys_round_trip() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(DocumentKind::from_key("readme"), None);
    }

    #[test]
    fn test_task_presenter_precedes_tutorial() {
        let position = |kind| DocumentKind::ALL.iter().position(|k| *k == kind);
        assert!(position(DocumentKind::TaskPresenter) < position(DocumentKind::Tutorial));
    }

    #[test]
    fn test_documents_iterate_in_fixed_order() {
        let set: ConfigurationSet = serde_json::from_value(json!({
            "tutorial": {},
            "extra": 1,
            "project": {},
            "task_presenter": {}
        }))
        .unwrap();

        let kinds: Vec<_> = set.documents().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, DocumentKind::ALL.to_vec());
        assert_eq!(set.unknown_keys().collect::<Vec<_>>(), vec!["extra"]);
    }
}
