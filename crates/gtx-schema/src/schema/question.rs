//! Questionnaire question rules

use serde_json::Value;

use super::input::check_input;
use super::text::{as_object, check_text};
use crate::error::{Rejection, reject};
use crate::{LanguageConfig, Verdict};

pub(crate) fn check_question(question: &Value, language: &LanguageConfig) -> Verdict {
    let object = as_object(question, "question")?;

    let key = match object.get("key") {
        Some(Value::String(key)) if !key.trim().is_empty() => key.as_str(),
        Some(_) => reject!("A question's key must be a non-empty string."),
        None => reject!("A question is missing its key."),
    };

    match object.get("title") {
        Some(title) => check_title(title, language).map_err(|r| in_question(key, r))?,
        None => reject!("The question '{key}' is missing a title."),
    }
    for field in ["hint", "help"] {
        if let Some(help) = object.get(field) {
            check_text(help, language, field).map_err(|r| in_question(key, r))?;
        }
    }
    match object.get("input") {
        Some(input) => check_input(input, language).map_err(|r| in_question(key, r))?,
        None => reject!("The question '{key}' is missing an input."),
    }

    match object.get("branch") {
        None | Some(Value::String(_)) | Some(Value::Object(_)) => Ok(()),
        Some(_) => reject!("The question '{key}' has a malformed branch."),
    }
}

pub(crate) fn check_title(title: &Value, language: &LanguageConfig) -> Verdict {
    check_text(title, language, "title")
}

pub(crate) fn check_help(help: &Value, language: &LanguageConfig) -> Verdict {
    check_text(help, language, "help")
}

fn in_question(key: &str, rejection: Rejection) -> Rejection {
    Rejection::new(format!("In question '{key}': {}", rejection.message))
}
