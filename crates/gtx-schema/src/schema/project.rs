//! Project document rules

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::text::{as_object, check_string};
use crate::Verdict;
use crate::error::reject;

static SHORT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("short name pattern is valid"));

pub(crate) fn check_project(project: &Value) -> Verdict {
    let project = as_object(project, "project configuration")?;

    match project.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => {}
        Some(_) => reject!("The project's name must be a non-empty string."),
        None => reject!("The project configuration is missing a name."),
    }

    if let Some(short_name) = project.get("short_name") {
        match short_name.as_str().map(str::trim) {
            Some(short_name) if SHORT_NAME.is_match(short_name) => {}
            _ => reject!(
                "The project's short name may only contain lowercase letters, digits, '-' and '_'."
            ),
        }
    }

    check_string(project, "description", "project")?;
    check_string(project, "why", "project")?;

    if let Some(repository) = project.get("repository") {
        match repository.as_str().map(str::trim) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {}
            _ => reject!("The project's repository must be an http(s) URL."),
        }
    }

    Ok(())
}
