//! Configuration set dispatcher

use gtx_schema::{ConfigurationSet, DocumentKind, Validator};
use serde_json::Value;

use crate::Result;
use crate::formatter::Formatter;

impl<V: Validator> Formatter<V> {
    /// Format every known document of a configuration set.
    ///
    /// The set is validated once as a whole; documents are then formatted
    /// in [`DocumentKind::ALL`] order without further validation. The
    /// tutorial is formatted against the already formatted task presenter.
    /// Keys naming no known document are kept unformatted.
    pub fn format(&self, set: ConfigurationSet, validate: bool) -> Result<ConfigurationSet> {
        self.check(validate, |v| v.check_configuration_set(set.as_map()))?;

        for key in set.unknown_keys() {
            tracing::warn!(key, "Ignoring unknown configuration document");
        }

        let mut set = set;
        for kind in DocumentKind::ALL {
            let Some(slot) = set.get_mut(kind) else {
                continue;
            };
            let document = std::mem::take(slot);
            let formatted = match kind {
                DocumentKind::Project => self.format_project(document, false)?,
                DocumentKind::TaskPresenter => self.format_task_presenter(document, false)?,
                DocumentKind::Tutorial => {
                    let task_presenter = set.get(DocumentKind::TaskPresenter).unwrap_or(&Value::Null);
                    self.format_tutorial(document, task_presenter, false, false)?
                }
            };
            set.insert(kind, formatted);
        }

        tracing::debug!(
            documents = set.documents().count(),
            "Formatted configuration set"
        );
        Ok(set)
    }
}

/// Validate and format a configuration set with the built-in validator.
pub fn format_configuration_set(set: ConfigurationSet) -> Result<ConfigurationSet> {
    Formatter::new().format(set, true)
}
