//! Project document formatter

use gtx_schema::Validator;
use serde_json::Value;

use crate::formatter::{Formatter, into_object, update};
use crate::{Error, Result};

pub fn format_project_name(name: &str) -> String {
    name.trim().to_string()
}

pub fn format_project_description(description: &str) -> String {
    description.trim().to_string()
}

pub fn format_project_repository(repository: &str) -> String {
    repository.trim().to_string()
}

/// Project fields and the leaf formatter applied to each.
const FIELDS: &[(&str, fn(&str) -> String)] = &[
    ("name", format_project_name),
    ("short_name", format_project_name),
    ("description", format_project_description),
    ("repository", format_project_repository),
    ("why", format_project_description),
];

impl<V: Validator> Formatter<V> {
    /// Format a project document: every known text field is trimmed.
    pub fn format_project(&self, project: Value, validate: bool) -> Result<Value> {
        self.check(validate, |v| v.check_project(&project))?;

        let mut project = into_object(project, "project")?;
        for &(key, format) in FIELDS {
            update(&mut project, key, |value| match value {
                Value::String(text) => Ok(Value::String(format(&text))),
                other => Err(Error::type_mismatch(format!("project.{key}"), "a string", &other)),
            })?;
        }

        tracing::debug!("Formatted project configuration");
        Ok(Value::Object(project))
    }
}
